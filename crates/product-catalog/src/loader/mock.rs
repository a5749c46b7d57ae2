//! In-memory catalog sources.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::CatalogLoader;
use crate::error::LoadError;
use crate::model::{BundledImage, Product, ProductId};

/// The fixed catalog the application starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(ProductId(1), "Notebook", "Informática", 4500.0)
            .with_description("Notebook com processador i7 e SSD.")
            .with_image(BundledImage::Notebook),
        Product::new(ProductId(2), "Cadeira Gamer", "Móveis", 1200.0)
            .with_description("Conforto e ergonomia para seu setup.")
            .with_image(BundledImage::CadeiraGamer),
        Product::new(ProductId(3), "Smartphone", "Telefonia", 2500.0)
            .with_description("Tela AMOLED, 128GB de armazenamento.")
            .with_image(BundledImage::Apple),
    ]
}

/// Returns a fixed product set after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockCatalogLoader {
    delay: Duration,
    products: Vec<Product>,
}

impl MockCatalogLoader {
    /// A loader returning [`seed_products`] after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self::with_products(delay, seed_products())
    }

    pub fn with_products(delay: Duration, products: Vec<Product>) -> Self {
        Self { delay, products }
    }
}

#[async_trait]
impl CatalogLoader for MockCatalogLoader {
    async fn load_catalog(&self) -> Result<Vec<Product>, LoadError> {
        debug!(delay = ?self.delay, "Fetching catalog");
        tokio::time::sleep(self.delay).await;
        Ok(self.products.clone())
    }
}

/// A source that always fails, after an optional delay.
#[derive(Debug, Clone)]
pub struct FailingLoader {
    delay: Duration,
    reason: String,
}

impl FailingLoader {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            delay: Duration::ZERO,
            reason: reason.into(),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl CatalogLoader for FailingLoader {
    async fn load_catalog(&self) -> Result<Vec<Product>, LoadError> {
        tokio::time::sleep(self.delay).await;
        warn!(reason = %self.reason, "Catalog source failed");
        Err(LoadError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_mock_loader_waits_before_resolving() {
        let loader = MockCatalogLoader::new(Duration::from_millis(50));
        let started = Instant::now();

        let products = loader.load_catalog().await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(50));
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Notebook", "Cadeira Gamer", "Smartphone"]);
    }

    #[tokio::test]
    async fn test_failing_loader_reports_reason() {
        let err = FailingLoader::new("connection refused")
            .load_catalog()
            .await
            .unwrap_err();
        assert_eq!(err, LoadError::Unavailable("connection refused".into()));
    }

    #[test]
    fn test_seed_ids_are_unique_and_increasing() {
        let ids: Vec<u64> = seed_products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
