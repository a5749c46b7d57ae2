//! Type-safe wrappers that hide the store's message passing.

pub mod catalog_client;

pub use catalog_client::*;
pub use product_store::StoreHandle;
