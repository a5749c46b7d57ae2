use std::num::NonZeroUsize;
use std::sync::Arc;

use product_store::{Revision, StoreError, StoreHandle};
use tokio::sync::watch;
use tracing::debug;

use crate::clients::CatalogClient;
use crate::error::CatalogError;
use crate::model::Product;
use crate::view::{ProductForm, ProductIdGenerator, ProductList};

/// One screen's worth of view state, wired to the store.
///
/// The session is pull-based: the front end calls [`refresh`](Self::refresh) from
/// its event loop, or awaits [`changed`](Self::changed) to be woken on the next
/// store mutation. Either way the list is re-synced from a fresh snapshot and goes
/// back to page 1.
pub struct CatalogSession {
    client: CatalogClient,
    changes: watch::Receiver<Revision>,
    ids: Arc<ProductIdGenerator>,
    pub list: ProductList,
    pub form: ProductForm,
}

impl CatalogSession {
    /// Subscribes to the store and takes the first snapshot.
    pub async fn attach(
        client: CatalogClient,
        ids: Arc<ProductIdGenerator>,
        page_size: NonZeroUsize,
    ) -> Result<Self, CatalogError> {
        let changes = client.subscribe().await?;
        let mut session = Self {
            client,
            changes,
            ids,
            list: ProductList::new(page_size),
            form: ProductForm::new(),
        };
        session.resync().await?;
        Ok(session)
    }

    /// Re-syncs the list if the store changed since the last sync.
    /// Returns whether it did.
    pub async fn refresh(&mut self) -> Result<bool, CatalogError> {
        let changed = self
            .changes
            .has_changed()
            .map_err(|_| StoreError::ActorClosed)?;
        if changed {
            self.resync().await?;
        }
        Ok(changed)
    }

    /// Waits for the next store mutation, then re-syncs the list.
    pub async fn changed(&mut self) -> Result<Revision, CatalogError> {
        self.changes
            .changed()
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        self.resync().await
    }

    /// Submits the form and re-syncs the list with the new product in it.
    pub async fn submit_form(&mut self) -> Result<Product, CatalogError> {
        let product = self.form.submit(&self.client, &self.ids).await?;
        self.resync().await?;
        Ok(product)
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    async fn resync(&mut self) -> Result<Revision, CatalogError> {
        // mark as seen before reading, so a mutation in between triggers another refresh
        let revision = *self.changes.borrow_and_update();
        let products = self.client.snapshot().await?;
        debug!(revision = revision.number, count = products.len(), "Resync");
        self.list.sync(products, revision.number);
        Ok(revision)
    }
}
