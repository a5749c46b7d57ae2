//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing`
//! crate. Store operations log with an `item_type` field instead of a module path,
//! so the compact format hides targets.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and mutations
//! RUST_LOG=debug cargo run     # every request, with full payloads
//! ```
//!
//! With `RUST_LOG=info` a catalog run reads like:
//!
//! ```text
//! INFO Store started item_type="Product"
//! INFO Replaced item_type="Product" revision=1 size=3
//! INFO Appended item_type="Product" id=1760000000000 revision=2 size=4
//! INFO Shutdown item_type="Product" size=4
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
