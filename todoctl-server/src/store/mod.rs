//! Storage gateway for todo items
//!
//! The [`TodoStore`] trait is the seam between the HTTP layer and
//! persistence: handlers are written against the trait and tested
//! against the in-memory implementation.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;

use crate::models::{NewTodoItem, TodoItem};

/// Name of the record inserted into an empty store at startup.
pub const SEED_NAME: &str = "Item1";

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("todo item {id} not found")]
    NotFound { id: i64 },

    /// The row disappeared between the caller's existence check and the
    /// write. Surfaced as an error, never silently ignored.
    #[error("todo item {id} vanished during update")]
    Vanished { id: i64 },
}

/// Record-level operations against the todo table.
///
/// Object-safe so the HTTP layer can run against either [`SqliteStore`]
/// or the [`MemoryStore`] fake.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All records in id order. An empty table yields an empty vec, not
    /// an error.
    async fn list_all(&self) -> Result<Vec<TodoItem>, StoreError>;

    /// The record with `id`, if present.
    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, StoreError>;

    /// Persist a new record. The store assigns the id.
    async fn insert(&self, new: NewTodoItem) -> Result<TodoItem, StoreError>;

    /// Overwrite every field of the record with `id`.
    ///
    /// Callers must ensure `item.id == id`. Fails with
    /// [`StoreError::Vanished`] if no such row exists by the time the
    /// write lands.
    async fn replace(&self, id: i64, item: TodoItem) -> Result<(), StoreError>;

    /// Delete the record with `id`; [`StoreError::NotFound`] if absent.
    async fn remove(&self, id: i64) -> Result<(), StoreError>;

    /// Flush completed writes to durable storage.
    async fn persist(&self) -> Result<(), StoreError>;
}

/// Insert the default record if the store is empty.
///
/// Idempotent. Called once at process startup, never per request.
pub async fn ensure_seeded(store: &dyn TodoStore) -> Result<(), StoreError> {
    if store.list_all().await?.is_empty() {
        let seeded = store
            .insert(NewTodoItem {
                name: Some(SEED_NAME.to_string()),
                is_complete: false,
            })
            .await?;
        store.persist().await?;
        tracing::info!(id = seeded.id, "seeded empty todo store");
    }

    Ok(())
}
