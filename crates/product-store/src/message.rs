//! # Store Messages
//!
//! This module defines the request type sent from a [`StoreClient`](crate::StoreClient)
//! to a [`StoreActor`](crate::StoreActor), and the [`Revision`] value published to
//! observers after every mutation.

use crate::entity::StoreItem;
use crate::error::StoreError;
use tokio::sync::{oneshot, watch};

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Requests understood by the store actor.
///
/// There are exactly two mutations, [`ReplaceAll`](StoreRequest::ReplaceAll) and
/// [`Append`](StoreRequest::Append). Items are never updated or removed.
#[derive(Debug)]
pub enum StoreRequest<T: StoreItem> {
    /// Discard the current sequence and replace it wholesale.
    ReplaceAll {
        items: Vec<T>,
        respond_to: Response<Revision>,
    },
    /// Add one item to the end of the sequence.
    Append {
        item: T,
        respond_to: Response<Revision>,
    },
    /// Read the full ordered sequence.
    Snapshot { respond_to: Response<Vec<T>> },
    /// Read the number of items.
    Len { respond_to: Response<usize> },
    /// Register an observer that is notified on every mutation.
    Subscribe {
        respond_to: Response<watch::Receiver<Revision>>,
    },
}

/// The kind of change that produced a [`Revision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// No mutation has happened yet.
    Initial,
    /// The sequence was replaced wholesale.
    Replaced,
    /// One item was appended.
    Appended,
}

/// State version published to observers.
///
/// `number` starts at 0 and increases by exactly one per mutation, so an observer
/// can tell whether the sequence it derived from is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision {
    pub number: u64,
    pub len: usize,
    pub change: Change,
}

impl Revision {
    pub(crate) fn initial() -> Self {
        Self {
            number: 0,
            len: 0,
            change: Change::Initial,
        }
    }

    pub(crate) fn next(self, len: usize, change: Change) -> Self {
        Self {
            number: self.number + 1,
            len,
            change,
        }
    }
}
