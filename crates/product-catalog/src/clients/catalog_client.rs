//! # Catalog Client
//!
//! Provides a high-level API over the product store. It wraps a
//! `StoreClient<Product>` and exposes the two catalog mutations under domain names.
use crate::error::CatalogError;
use crate::model::{Product, ProductId};
use product_store::{Revision, StoreClient, StoreError, StoreHandle};
use tracing::{debug, instrument};

/// Client for the product store.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StoreClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }

    /// Replaces the whole catalog. Used once, after the initial load.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn replace_catalog(&self, products: Vec<Product>) -> Result<Revision, CatalogError> {
        debug!("Sending request");
        self.inner
            .replace_all(products)
            .await
            .map_err(Self::map_error)
    }

    /// Appends one product. The caller has already given it a unique id.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn add_product(&self, product: Product) -> Result<Revision, CatalogError> {
        debug!(?product, "Sending request");
        self.inner.append(product).await.map_err(Self::map_error)
    }

    /// Largest id currently in the store, if any.
    pub async fn max_id(&self) -> Result<Option<ProductId>, CatalogError> {
        let products = self.snapshot().await?;
        Ok(products.iter().map(|p| p.id).max())
    }
}

impl StoreHandle<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        CatalogError::Store(e)
    }
}
