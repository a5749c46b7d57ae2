//! # Store Actor
//!
//! This module defines the `StoreActor`, the single owner of an ordered sequence of
//! items. It processes requests sequentially in its own Tokio task, so the sequence
//! needs no lock: the task has exclusive ownership of it.

use std::num::NonZeroUsize;

use crate::client::StoreClient;
use crate::entity::StoreItem;
use crate::message::{Change, Revision, StoreRequest};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

/// The actor that owns an ordered, append-only sequence of items.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client wherever the sequence is read or mutated.
///
/// ```rust
/// use product_store::{StoreActor, StoreItem};
/// use std::num::NonZeroUsize;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
///
/// impl StoreItem for Note {
///     type Id = u32;
///     fn id(&self) -> u32 { self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(NonZeroUsize::new(16).unwrap());
///     tokio::spawn(actor.run());
///
///     client.append(Note { id: 1, text: "hello".into() }).await.unwrap();
///     assert_eq!(client.len().await.unwrap(), 1);
/// }
/// ```
///
/// # Operations
///
/// * **ReplaceAll**: drops the current sequence, stores the new one, publishes a revision.
/// * **Append**: pushes to the end (existing order is untouched), publishes a revision.
/// * **Snapshot**: returns a clone of the whole sequence in insertion order.
/// * **Subscribe**: hands out a `watch::Receiver` that always holds the latest revision.
pub struct StoreActor<T: StoreItem> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    items: Vec<T>,
    changes: watch::Sender<Revision>,
}

impl<T: StoreItem> StoreActor<T> {
    /// Creates a new, empty `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    pub fn new(buffer_size: NonZeroUsize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.get());
        let (changes, _) = watch::channel(Revision::initial());
        let actor = Self {
            receiver,
            items: Vec::new(),
            changes,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop, processing requests until every client is dropped.
    pub async fn run(mut self) {
        // Just the type name, e.g. "Product" instead of "product_catalog::model::product::Product"
        let item_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(item_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::ReplaceAll { items, respond_to } => {
                    debug!(item_type, count = items.len(), "ReplaceAll");
                    self.items = items;
                    let revision = self.publish(Change::Replaced);
                    info!(item_type, revision = revision.number, size = self.items.len(), "Replaced");
                    let _ = respond_to.send(Ok(revision));
                }
                StoreRequest::Append { item, respond_to } => {
                    let id = item.id();
                    debug!(item_type, ?item, "Append");
                    self.items.push(item);
                    let revision = self.publish(Change::Appended);
                    info!(item_type, %id, revision = revision.number, size = self.items.len(), "Appended");
                    let _ = respond_to.send(Ok(revision));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(item_type, size = self.items.len(), "Snapshot");
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                StoreRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.items.len()));
                }
                StoreRequest::Subscribe { respond_to } => {
                    debug!(item_type, observers = self.changes.receiver_count() + 1, "Subscribe");
                    let _ = respond_to.send(Ok(self.changes.subscribe()));
                }
            }
        }

        info!(item_type, size = self.items.len(), "Shutdown");
    }

    fn publish(&self, change: Change) -> Revision {
        let len = self.items.len();
        // send_modify updates the value even when nobody is subscribed yet
        self.changes
            .send_modify(|revision| *revision = revision.next(len, change));
        *self.changes.borrow()
    }
}
