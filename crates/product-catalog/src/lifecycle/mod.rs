//! # System Lifecycle
//!
//! Starts the product store and the one-shot catalog load, hands out sessions, and
//! shuts everything down.
//!
//! ## Startup
//!
//! 1. **Store** - spawn the [`StoreActor`](product_store::StoreActor) (empty).
//! 2. **Load** - spawn a task that awaits the [`CatalogLoader`](crate::loader::CatalogLoader)
//!    and replaces the store's contents with the result.
//!
//! The load is not awaited during startup: the store is usable (and empty) while it
//! runs, and observers are notified when the products arrive. [`CatalogSystem::wait_loaded`]
//! is the explicit completion signal; a failed load leaves the store empty and
//! reports the error there. There is no retry.
//!
//! ## Shutdown
//!
//! 1. **Drop clients** - closes the store's channel once every session is gone too
//! 2. **Store exits** - `recv()` returns `None`, the actor logs its final size
//! 3. **Await tasks** - the load task is awaited (or aborted if still pending)

pub mod catalog_system;
pub mod session;

pub use catalog_system::*;
pub use session::*;
pub use product_store::tracing::setup_tracing;
