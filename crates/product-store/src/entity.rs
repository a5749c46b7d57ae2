//! # StoreItem Trait
//!
//! The `StoreItem` trait is the contract a value type must satisfy to be held by a
//! [`StoreActor`](crate::StoreActor). The store keeps items in insertion order and
//! never inspects them beyond reading their identifier for structured logging.
//!
//! Identifier uniqueness is the caller's responsibility: the store performs no id
//! assignment and no validation. Whoever builds a new item derives its id before
//! calling [`StoreClient::append`](crate::StoreClient::append).

use std::fmt::{Debug, Display};

/// Trait that any value held in an ordered store must implement.
///
/// Items are cloned out of the store on every snapshot, so they should be cheap
/// value types (or wrap their heavy parts in `Arc`).
pub trait StoreItem: Clone + Send + Sync + Debug + 'static {
    /// The identifier of an item (e.g. `u64`, a newtype, a `Uuid`).
    type Id: Clone + Send + Sync + Display + Debug;

    /// Returns the identifier of this item.
    fn id(&self) -> Self::Id;
}
