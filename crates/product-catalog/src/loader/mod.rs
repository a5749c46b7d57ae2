//! # Catalog Loader
//!
//! The loader produces the initial product sequence, once, asynchronously. It is the
//! seam where a real backend plugs in: swap [`MockCatalogLoader`] for an HTTP or
//! database implementation and nothing downstream changes.
//!
//! ```rust
//! use product_catalog::loader::{CatalogLoader, MockCatalogLoader};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let loader = MockCatalogLoader::new(Duration::ZERO);
//!     let products = loader.load_catalog().await.unwrap();
//!     assert_eq!(products.len(), 3);
//! }
//! ```

pub mod mock;

pub use mock::{seed_products, FailingLoader, MockCatalogLoader};

use async_trait::async_trait;

use crate::error::LoadError;
use crate::model::Product;

/// Source of the initial catalog.
#[async_trait]
pub trait CatalogLoader: Send + Sync + 'static {
    /// Returns the full initial product set. No parameters, no pagination.
    async fn load_catalog(&self) -> Result<Vec<Product>, LoadError>;
}
