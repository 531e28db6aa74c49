//! Service configuration.
//!
//! Read once at startup and passed down explicitly; nothing below this layer
//! consults the environment.

/// Storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    InMemory,
    Postgres { database_url: String },
}

/// Runtime configuration for the API process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address, e.g. `0.0.0.0:8080`.
    pub bind_addr: String,
    pub store: StoreConfig,
}

impl ApiConfig {
    /// Configuration for tests and local experiments: in-memory store bound
    /// to an ephemeral port.
    pub fn in_memory() -> Self {
        Self {
            bind_addr: "127.0.0.1:0".to_string(),
            store: StoreConfig::InMemory,
        }
    }

    /// Read configuration from the environment.
    ///
    /// - `BIND_ADDR` (default `0.0.0.0:8080`)
    /// - `USE_PERSISTENT_STORE` (`true`/`false`, default `false`) selects
    ///   Postgres; any other value is ignored with a warning
    /// - `DATABASE_URL` (default `postgres://localhost/inventory`)
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let use_persistent =
            parse_store_flag(std::env::var("USE_PERSISTENT_STORE").ok().as_deref());

        let store = if use_persistent {
            let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
                tracing::warn!("DATABASE_URL not set; using local default");
                "postgres://localhost/inventory".to_string()
            });
            StoreConfig::Postgres { database_url }
        } else {
            StoreConfig::InMemory
        };

        Self { bind_addr, store }
    }
}

/// Interpret the `USE_PERSISTENT_STORE` value.
///
/// Only the literals `true` and `false` are recognized; any other present
/// value keeps the in-memory default and logs what was seen.
fn parse_store_flag(raw: Option<&str>) -> bool {
    match raw {
        Some(raw) => raw.parse::<bool>().unwrap_or_else(|_| {
            tracing::warn!(
                value = %raw,
                "USE_PERSISTENT_STORE is not a bool; using the in-memory store"
            );
            false
        }),
        None => false,
    }
}
