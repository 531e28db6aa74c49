use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, NewItem};

use super::r#trait::{ItemStore, StoreError};

/// In-memory item store.
///
/// The default backend: state lives for the process lifetime only. Intended
/// for tests, development, and the non-persistent deployment mode.
#[derive(Debug)]
pub struct InMemoryItemStore {
    items: RwLock<BTreeMap<ItemId, Item>>,
    next_id: AtomicI64,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            // Ids are 1-based; the counter only ever moves forward, so an
            // id freed by a delete is never handed out again.
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn insert(&self, item: NewItem) -> Result<Item, StoreError> {
        let id = ItemId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let stored = item.into_item(id);

        let mut items = self.items.write().map_err(|_| StoreError::LockPoisoned)?;
        items.insert(id, stored.clone());

        Ok(stored)
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let items = self.items.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(items.get(&id).cloned())
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Item>, StoreError> {
        let items = self.items.read().map_err(|_| StoreError::LockPoisoned)?;

        // BTreeMap iteration is ascending by id, which is creation order.
        Ok(items
            .values()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .cloned()
            .collect())
    }

    async fn update(&self, item: &Item) -> Result<bool, StoreError> {
        let mut items = self.items.write().map_err(|_| StoreError::LockPoisoned)?;
        match items.get_mut(&item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        let mut items = self.items.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(items.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn candidate(name: &str, quantity: i64, price: f64, category: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            quantity,
            price,
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_monotonic_ids_from_one() {
        let store = InMemoryItemStore::new();

        let a = store.insert(candidate("A", 1, 1.0, "Books")).await.unwrap();
        let b = store.insert(candidate("B", 2, 2.0, "Books")).await.unwrap();
        let c = store.insert(candidate("C", 3, 3.0, "Tools")).await.unwrap();

        assert_eq!(a.id, ItemId::new(1));
        assert_eq!(b.id, ItemId::new(2));
        assert_eq!(c.id, ItemId::new(3));
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reused() {
        let store = InMemoryItemStore::new();

        store.insert(candidate("A", 1, 1.0, "Books")).await.unwrap();
        let b = store.insert(candidate("B", 2, 2.0, "Books")).await.unwrap();
        assert!(store.delete(b.id).await.unwrap());

        let c = store.insert(candidate("C", 3, 3.0, "Books")).await.unwrap();
        assert_eq!(c.id, ItemId::new(3));
    }

    #[tokio::test]
    async fn insert_returns_the_stored_record() {
        let store = InMemoryItemStore::new();

        let created = store
            .insert(candidate("Laptop", 4, 999.5, "Electronics"))
            .await
            .unwrap();

        assert_eq!(created.name, "Laptop");
        assert_eq!(created.quantity, 4);
        assert_eq!(created.price, 999.5);
        assert_eq!(created.category, "Electronics");
        assert_eq!(store.get(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn get_unknown_id_returns_none() {
        let store = InMemoryItemStore::new();
        assert_eq!(store.get(ItemId::new(99)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_returns_creation_order() {
        let store = InMemoryItemStore::new();

        store.insert(candidate("First", 1, 1.0, "Books")).await.unwrap();
        store.insert(candidate("Second", 1, 1.0, "Tools")).await.unwrap();
        store.insert(candidate("Third", 1, 1.0, "Books")).await.unwrap();

        let names: Vec<String> = store
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn list_filters_by_exact_category() {
        let store = InMemoryItemStore::new();

        store.insert(candidate("A", 1, 1.0, "Books")).await.unwrap();
        store.insert(candidate("B", 1, 1.0, "books")).await.unwrap();
        store.insert(candidate("C", 1, 1.0, "Tools")).await.unwrap();

        let books = store.list(Some("Books")).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "A");

        assert!(store.list(Some("Garden")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_rewrites_the_full_record() {
        let store = InMemoryItemStore::new();

        let created = store.insert(candidate("A", 1, 1.0, "Books")).await.unwrap();
        let replacement = Item {
            name: "A2".to_string(),
            quantity: 7,
            price: 3.5,
            category: "Tools".to_string(),
            ..created
        };

        assert!(store.update(&replacement).await.unwrap());
        assert_eq!(store.get(created.id).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn update_unknown_id_returns_false() {
        let store = InMemoryItemStore::new();
        let phantom = Item {
            id: ItemId::new(42),
            name: "Ghost".to_string(),
            quantity: 1,
            price: 1.0,
            category: "Books".to_string(),
        };
        assert!(!store.update(&phantom).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let store = InMemoryItemStore::new();

        let created = store.insert(candidate("A", 1, 1.0, "Books")).await.unwrap();
        assert!(store.delete(created.id).await.unwrap());
        assert_eq!(store.get(created.id).await.unwrap(), None);
        assert!(!store.delete(created.id).await.unwrap());
    }

    async fn count_all<S: ItemStore>(store: &S) -> usize {
        store.list(None).await.unwrap().len()
    }

    #[tokio::test]
    async fn arc_wrapped_store_satisfies_the_trait() {
        let store = Arc::new(InMemoryItemStore::new());
        store.insert(candidate("A", 1, 1.0, "Books")).await.unwrap();
        assert_eq!(count_all(&store).await, 1);

        let dynamic: Arc<dyn ItemStore> = store;
        assert_eq!(count_all(&dynamic).await, 1);
    }
}
