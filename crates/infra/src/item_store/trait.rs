use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, NewItem};

/// Item store operation error.
///
/// These are **infrastructure errors** (connectivity, locking) as opposed to
/// domain errors (validation failures, unknown ids). Unknown ids are reported
/// in-band by the individual operations; anything surfacing here is a plain
/// internal failure to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("item store lock poisoned")]
    LockPoisoned,
}

/// Persistence boundary for inventory records.
///
/// One record per item, keyed by a store-assigned id. The store makes no
/// policy decisions: inputs are validated before they reach `insert` or
/// `update`, and records are stored exactly as given.
///
/// ## Operation Semantics
///
/// - `insert` assigns the next id and returns the stored record.
/// - `get` returns `None` for an unknown id.
/// - `list` returns records in ascending id order (creation order); the
///   optional filter keeps exact category matches only.
/// - `update` rewrites the full record under `item.id`; `Ok(false)` when the
///   id is unknown.
/// - `delete` removes the record; `Ok(false)` when the id is unknown.
///
/// ## Implementation Requirements
///
/// Implementations must:
/// - assign ids starting at 1, monotonically increasing
/// - never reuse an id, including after the record was deleted
/// - keep each operation atomic with respect to concurrent callers
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a validated candidate record and return it with its id.
    async fn insert(&self, item: NewItem) -> Result<Item, StoreError>;

    /// Fetch a single record by id.
    async fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Fetch all records, optionally restricted to one category.
    async fn list(&self, category: Option<&str>) -> Result<Vec<Item>, StoreError>;

    /// Replace the record stored under `item.id`.
    async fn update(&self, item: &Item) -> Result<bool, StoreError>;

    /// Remove the record stored under `id`.
    async fn delete(&self, id: ItemId) -> Result<bool, StoreError>;
}

#[async_trait]
impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    async fn insert(&self, item: NewItem) -> Result<Item, StoreError> {
        (**self).insert(item).await
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        (**self).get(id).await
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Item>, StoreError> {
        (**self).list(category).await
    }

    async fn update(&self, item: &Item) -> Result<bool, StoreError> {
        (**self).update(item).await
    }

    async fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        (**self).delete(id).await
    }
}
