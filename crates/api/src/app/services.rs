use std::sync::Arc;

use sqlx::PgPool;

use stockroom_infra::item_store::{InMemoryItemStore, ItemStore, PostgresItemStore};

use crate::config::{ApiConfig, StoreConfig};

/// Shared service handles injected into request handlers.
#[derive(Clone)]
pub struct AppServices {
    pub item_store: Arc<dyn ItemStore>,
}

/// Wire up the storage backend selected by `config`.
///
/// Failing to reach a configured Postgres instance is fatal: the process has
/// nothing useful to serve without its store.
pub async fn build_services(config: &ApiConfig) -> AppServices {
    match &config.store {
        StoreConfig::InMemory => AppServices {
            item_store: Arc::new(InMemoryItemStore::new()),
        },
        StoreConfig::Postgres { database_url } => {
            let pool = PgPool::connect(database_url)
                .await
                .expect("Failed to connect to Postgres");

            let store = PostgresItemStore::new(pool);
            store
                .ensure_schema()
                .await
                .expect("Failed to create items schema");

            AppServices {
                item_store: Arc::new(store),
            }
        }
    }
}
