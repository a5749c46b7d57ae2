//! # Product Catalog
//!
//! A product catalog front end: a list view with search, price range, sorting and
//! pagination, plus a form for adding products.
//!
//! ## Core Components
//!
//! - **[model]**: [`Product`](model::Product) and the image it is shown with.
//! - **[query]**: pure functions over a product sequence. Filtering, sorting,
//!   pagination and the Brazilian real currency format live here.
//! - **[clients]**: [`CatalogClient`](clients::CatalogClient), the typed wrapper around
//!   the product store.
//! - **[loader]**: where the initial catalog comes from.
//! - **[view]**: list and form state as a front end would hold it.
//! - **[lifecycle]**: starts the store and the load, hands out sessions.
//!
//! ## Quick Start
//!
//! The binary in `main.rs` loads the seed catalog, sorts it by price, adds a
//! product through the form and searches for it.
//!
//! ## Testing
//!
//! See [`product_store::mock`] for testing clients without a running store, and
//! [`loader::MockCatalogLoader`] / [`loader::FailingLoader`] for driving the load.

pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod loader;
pub mod model;
pub mod query;
pub mod view;
