//! # Store Client
//!
//! This module defines the client half of the store: a cheap, cloneable handle that
//! forwards requests over a Tokio mpsc channel and awaits the answer on a oneshot.

use crate::entity::StoreItem;
use crate::error::StoreError;
use crate::message::{Revision, StoreRequest};
use tokio::sync::{mpsc, oneshot, watch};

/// A type-safe handle for interacting with a [`StoreActor`](crate::StoreActor).
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – every method resolves to `Result<…, StoreError>`.
/// * **Explicit** – the handle is passed to whoever needs the store; there is no global instance.
#[derive(Clone)]
pub struct StoreClient<T: StoreItem> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreItem> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    /// Replaces the whole sequence. Returns the revision the change produced.
    pub async fn replace_all(&self, items: Vec<T>) -> Result<Revision, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::ReplaceAll { items, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Appends one item. Returns the revision the change produced.
    pub async fn append(&self, item: T) -> Result<Revision, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Append { item, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn len(&self) -> Result<usize, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Len { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Registers an observer. The receiver always holds the latest [`Revision`].
    pub async fn subscribe(&self) -> Result<watch::Receiver<Revision>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Subscribe { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}
