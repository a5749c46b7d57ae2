//! # Store Errors
//!
//! Every store operation is total with respect to its inputs; the only failures
//! come from the channel plumbing between a client and the actor task.

/// Errors that can occur while talking to a store actor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
}
