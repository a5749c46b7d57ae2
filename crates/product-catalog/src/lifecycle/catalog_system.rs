use std::sync::Arc;

use product_store::StoreActor;
use tokio::task::JoinHandle;
use tracing::{error, info, warn, Instrument};

use super::session::CatalogSession;
use crate::clients::CatalogClient;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, LoadError};
use crate::loader::CatalogLoader;
use crate::model::Product;
use crate::view::ProductIdGenerator;

/// Runtime orchestrator for the catalog.
///
/// Owns the store actor task and the initial load task. Every session it creates
/// shares the same store and the same id generator.
///
/// # Example
///
/// ```rust
/// use product_catalog::config::CatalogConfig;
/// use product_catalog::lifecycle::CatalogSystem;
/// use product_catalog::loader::MockCatalogLoader;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = CatalogConfig::default();
///     let mut system = CatalogSystem::start(&config, MockCatalogLoader::new(Duration::ZERO));
///
///     assert_eq!(system.wait_loaded().await?, 3);
///
///     let mut session = system.session().await?;
///     session.refresh().await?;
///     assert_eq!(session.list.render().items.len(), 3);
///
///     drop(session);
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct CatalogSystem {
    /// Client for the product store.
    pub client: CatalogClient,

    config: CatalogConfig,
    ids: Arc<ProductIdGenerator>,
    store_handle: JoinHandle<()>,
    load_handle: Option<JoinHandle<Result<usize, LoadError>>>,
    load_result: Option<Result<usize, LoadError>>,
}

impl CatalogSystem {
    /// Spawns the store and starts loading the catalog in the background.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &CatalogConfig, loader: impl CatalogLoader) -> Self {
        let (actor, store_client) = StoreActor::<Product>::new(config.channel_capacity);
        let client = CatalogClient::new(store_client);
        let store_handle = tokio::spawn(actor.run());

        let load_client = client.clone();
        let load_handle = tokio::spawn(
            async move {
                let products = match loader.load_catalog().await {
                    Ok(products) => products,
                    Err(e) => {
                        warn!(error = %e, "Catalog load failed, store stays empty");
                        return Err(e);
                    }
                };
                let count = products.len();
                load_client
                    .replace_catalog(products)
                    .await
                    .map_err(|e| LoadError::Aborted(e.to_string()))?;
                info!(count, "Catalog loaded");
                Ok(count)
            }
            .instrument(tracing::info_span!("catalog_load")),
        );

        Self {
            client,
            config: config.clone(),
            ids: Arc::new(ProductIdGenerator::new()),
            store_handle,
            load_handle: Some(load_handle),
            load_result: None,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Waits for the initial load. Returns the number of products loaded.
    ///
    /// Safe to call more than once; later calls return the first outcome.
    pub async fn wait_loaded(&mut self) -> Result<usize, CatalogError> {
        if let Some(handle) = self.load_handle.take() {
            let outcome = handle
                .await
                .unwrap_or_else(|e| Err(LoadError::Aborted(e.to_string())));
            self.load_result = Some(outcome);
        }
        match &self.load_result {
            Some(outcome) => outcome.clone().map_err(CatalogError::from),
            None => Err(LoadError::Aborted("load task missing".into()).into()),
        }
    }

    /// True once the load task has finished, whether it succeeded or not.
    pub fn is_load_finished(&self) -> bool {
        self.load_result.is_some() || self.load_handle.as_ref().is_some_and(|h| h.is_finished())
    }

    /// Creates a view session subscribed to the store.
    pub async fn session(&self) -> Result<CatalogSession, CatalogError> {
        CatalogSession::attach(self.client.clone(), self.ids.clone(), self.config.page_size).await
    }

    /// Gracefully shuts the system down.
    ///
    /// The store only stops once every session has been dropped as well.
    pub async fn shutdown(self) -> Result<(), CatalogError> {
        info!("Shutting down catalog...");

        if let Some(handle) = self.load_handle {
            if !handle.is_finished() {
                warn!("Catalog load still pending, aborting it");
                handle.abort();
            }
            let _ = handle.await;
        }

        drop(self.client);

        if let Err(e) = self.store_handle.await {
            error!("Store task failed: {:?}", e);
            return Err(CatalogError::TaskFailed(e.to_string()));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
