//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered from
//! a queue of scripted expectations instead of a running [`StoreActor`](crate::StoreActor).
//! Use it to test code *around* the store (form submission, loaders, view refresh)
//! deterministically, including failures that a real store never produces.
//!
//! | | MockStore | Real StoreActor |
//! |---|---|---|
//! | **State** | None, answers are scripted | Real ordered sequence |
//! | **Error injection** | `return_err(StoreError::ActorClosed)` | Only by dropping the actor |
//! | **Use case** | Logic that calls the store | The store itself, full system |
//!
//! ```rust
//! use product_store::mock::MockStore;
//! use product_store::{StoreError, StoreItem};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note { id: u32 }
//! impl StoreItem for Note {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Note>::new();
//!     mock.expect_snapshot().return_ok(vec![Note { id: 7 }]);
//!     mock.expect_append().return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.snapshot().await.unwrap(), vec![Note { id: 7 }]);
//!     assert!(client.append(Note { id: 8 }).await.is_err());
//!
//!     mock.verify();
//! }
//! ```
//!
//! For asserting on the *payload* of a request, use [`create_mock_store`] and the
//! `expect_*` receiver helpers, which hand back the request and its responder.

use crate::client::StoreClient;
use crate::entity::StoreItem;
use crate::error::StoreError;
use crate::message::{Response, Revision, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: StoreItem> {
    ReplaceAll {
        response: Result<Revision, StoreError>,
    },
    Append {
        response: Result<Revision, StoreError>,
    },
    Snapshot {
        response: Result<Vec<T>, StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store with expectation tracking for fluent testing.
pub struct MockStore<T: StoreItem> {
    client: StoreClient<T>,
    expectations: Expectations<T>,
    received: Arc<Mutex<Vec<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreItem> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreItem> MockStore<T> {
    /// Creates a new mock store with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::ReplaceAll { items, respond_to },
                        Some(Expectation::ReplaceAll { response }),
                    ) => {
                        received_clone.lock().unwrap().extend(items);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Append { item, respond_to },
                        Some(Expectation::Append { response }),
                    ) => {
                        received_clone.lock().unwrap().push(item);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected store request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_replace_all(&mut self) -> MutationExpectationBuilder<T> {
        MutationExpectationBuilder {
            kind: MutationKind::ReplaceAll,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_append(&mut self) -> MutationExpectationBuilder<T> {
        MutationExpectationBuilder {
            kind: MutationKind::Append,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Items received by `replace_all` and `append` requests, in arrival order.
    pub fn received(&self) -> Vec<T> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

enum MutationKind {
    ReplaceAll,
    Append,
}

/// Builder for `replace_all` and `append` expectations.
pub struct MutationExpectationBuilder<T: StoreItem> {
    kind: MutationKind,
    expectations: Expectations<T>,
}

impl<T: StoreItem> MutationExpectationBuilder<T> {
    /// Answers with the given revision.
    pub fn return_ok(self, revision: Revision) {
        self.push(Ok(revision));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Revision, StoreError>) {
        let expectation = match self.kind {
            MutationKind::ReplaceAll => Expectation::ReplaceAll { response },
            MutationKind::Append => Expectation::Append { response },
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: StoreItem> {
    expectations: Expectations<T>,
}

impl<T: StoreItem> SnapshotExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: Ok(items) });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot {
                response: Err(error),
            });
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiving end of its channel.
///
/// Nothing answers the requests: the test pulls them off the receiver with the
/// `expect_*` helpers, inspects the payload, and replies through the responder.
pub fn create_mock_store<T: StoreItem>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Returns the next request if it is an `Append`.
pub async fn expect_append<T: StoreItem>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, Response<Revision>)> {
    match receiver.recv().await {
        Some(StoreRequest::Append { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a `ReplaceAll`.
pub async fn expect_replace_all<T: StoreItem>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(Vec<T>, Response<Revision>)> {
    match receiver.recv().await {
        Some(StoreRequest::ReplaceAll { items, respond_to }) => Some((items, respond_to)),
        _ => None,
    }
}

/// Returns the responder of the next request if it is a `Snapshot`.
pub async fn expect_snapshot<T: StoreItem>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// A revision value for scripted answers.
pub fn revision(number: u64, len: usize, change: crate::Change) -> Revision {
    Revision {
        number,
        len,
        change,
    }
}
