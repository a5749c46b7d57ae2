//! # StoreHandle Trait
//!
//! Provides a common interface for domain-specific store wrappers, adding default
//! read and subscribe methods built on top of a generic [`StoreClient`].
use crate::{Revision, StoreClient, StoreError, StoreItem};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for domain wrappers around a [`StoreClient`] to inherit the read operations.
///
/// Wrappers implement `inner` and `map_error`, then add their own mutation methods
/// with domain names and domain errors.
///
/// # Example
///
/// ```rust
/// use product_store::{StoreClient, StoreError, StoreHandle, StoreItem};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32 }
/// impl StoreItem for Note {
///     type Id = u32;
///     fn id(&self) -> u32 { self.id }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("notes unavailable: {0}")]
/// struct NoteError(String);
///
/// struct NoteBook { inner: StoreClient<Note> }
///
/// impl StoreHandle<Note> for NoteBook {
///     type Error = NoteError;
///     fn inner(&self) -> &StoreClient<Note> { &self.inner }
///     fn map_error(e: StoreError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// async fn count(book: &NoteBook) -> Result<usize, NoteError> {
///     // snapshot(), len() and subscribe() are provided automatically
///     book.len().await
/// }
/// ```
#[async_trait]
pub trait StoreHandle<T: StoreItem>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the domain error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Read the full ordered sequence.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Number of items currently held.
    async fn len(&self) -> Result<usize, Self::Error> {
        self.inner().len().await.map_err(Self::map_error)
    }

    /// Register for change notifications.
    #[tracing::instrument(skip(self))]
    async fn subscribe(&self) -> Result<watch::Receiver<Revision>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().subscribe().await.map_err(Self::map_error)
    }
}
