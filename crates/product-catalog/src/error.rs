//! Error types for the catalog.

use product_store::StoreError;
use thiserror::Error;

/// Errors raised while producing the initial catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    /// The catalog source could not be reached or answered with an error.
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),

    /// The load task stopped before producing a result.
    #[error("Catalog load task aborted: {0}")]
    Aborted(String),
}

/// Field-level problems found when validating the product form.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    /// A required field is blank.
    #[error("Field is required: {0}")]
    MissingField(&'static str),

    /// The price field has text but no digits.
    #[error("Price is not a valid amount: {0:?}")]
    InvalidPrice(String),
}

/// Top-level error for catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Form(#[from] FormError),

    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    Store(#[from] StoreError),

    /// A background task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    TaskFailed(String),

    #[error("Unknown sort key: {0:?}")]
    UnknownSortKey(String),
}
