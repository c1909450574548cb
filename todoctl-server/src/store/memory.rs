//! In-memory todo store
//!
//! Test double for the HTTP layer: same contract as the SQLite store
//! (id-ordered listing, monotonic never-reused ids, vanished/not-found
//! signaling) with no database behind it.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{StoreError, TodoStore};
use crate::models::{NewTodoItem, TodoItem};

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    items: BTreeMap<i64, TodoItem>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.items.get(&id).cloned())
    }

    async fn insert(&self, new: NewTodoItem) -> Result<TodoItem, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;

        let item = TodoItem {
            id: inner.last_id,
            name: new.name,
            is_complete: new.is_complete,
        };
        inner.items.insert(item.id, item.clone());

        Ok(item)
    }

    async fn replace(&self, id: i64, item: TodoItem) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.items.get_mut(&id) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(StoreError::Vanished { id }),
        }
    }

    async fn remove(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.items.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound { id }),
        }
    }

    async fn persist(&self) -> Result<(), StoreError> {
        // Nothing is buffered; writes are visible as soon as they land.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_stay_monotonic_after_remove() {
        let store = MemoryStore::new();

        let first = store.insert(NewTodoItem::default()).await.unwrap();
        store.remove(first.id).await.unwrap();
        let second = store.insert(NewTodoItem::default()).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn signals_missing_rows() {
        let store = MemoryStore::new();

        let replace_err = store
            .replace(
                7,
                TodoItem {
                    id: 7,
                    name: None,
                    is_complete: false,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(replace_err, StoreError::Vanished { id: 7 }));

        let remove_err = store.remove(7).await.unwrap_err();
        assert!(matches!(remove_err, StoreError::NotFound { id: 7 }));
    }
}
