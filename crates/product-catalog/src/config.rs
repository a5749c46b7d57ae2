//! Runtime configuration.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Catalog configuration.
///
/// # Environment Variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_PAGE_SIZE | 6 | Products per list page |
/// | CATALOG_LOAD_DELAY_MS | 500 | Artificial delay of the mock catalog source |
/// | CATALOG_CHANNEL_CAPACITY | 32 | Store actor request buffer |
///
/// Missing or invalid values fall back to the default.
///
/// ```ignore
/// CATALOG_PAGE_SIZE=3 RUST_LOG=info cargo run
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub page_size: NonZeroUsize,
    pub load_delay_ms: u64,
    pub channel_capacity: NonZeroUsize,
}

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(size) => size,
    None => unreachable!(),
};

pub const DEFAULT_CHANNEL_CAPACITY: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            load_delay_ms: 500,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl CatalogConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            page_size: lookup("CATALOG_PAGE_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.page_size),
            load_delay_ms: lookup("CATALOG_LOAD_DELAY_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.load_delay_ms),
            channel_capacity: lookup("CATALOG_CHANNEL_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.channel_capacity),
        }
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::from_lookup(|_| None);
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.page_size.get(), 6);
        assert_eq!(config.load_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_overrides() {
        let config = CatalogConfig::from_lookup(lookup(&[
            ("CATALOG_PAGE_SIZE", "3"),
            ("CATALOG_LOAD_DELAY_MS", " 0 "),
            ("CATALOG_CHANNEL_CAPACITY", "8"),
        ]));
        assert_eq!(config.page_size.get(), 3);
        assert_eq!(config.load_delay_ms, 0);
        assert_eq!(config.channel_capacity.get(), 8);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = CatalogConfig::from_lookup(lookup(&[
            ("CATALOG_PAGE_SIZE", "0"),
            ("CATALOG_LOAD_DELAY_MS", "soon"),
            ("CATALOG_CHANNEL_CAPACITY", "0"),
        ]));
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_zero_capacity_is_rejected_when_deserializing() {
        let zero = r#"{"page_size":6,"load_delay_ms":0,"channel_capacity":0}"#;
        assert!(serde_json::from_str::<CatalogConfig>(zero).is_err());

        let ok = r#"{"page_size":6,"load_delay_ms":0,"channel_capacity":4}"#;
        let config: CatalogConfig = serde_json::from_str(ok).unwrap();
        assert_eq!(config.channel_capacity.get(), 4);
    }
}
