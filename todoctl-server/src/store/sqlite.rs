//! SQLite-backed todo store
//!
//! Uses a sqlx connection pool with automatic schema creation on open.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::{StoreError, TodoStore};
use crate::models::{NewTodoItem, TodoItem};

/// AUTOINCREMENT keeps id assignment monotonic: rowids of deleted
/// records are never handed out again.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS todo_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    is_complete INTEGER NOT NULL DEFAULT 0
)
"#;

/// Maximum connections for the pool. Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// SQLite storage gateway backed by a connection pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open or create the database at the given path.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.create_schema().await?;
        Ok(store)
    }

    /// Open an in-memory database (for testing).
    ///
    /// The pool is pinned to a single long-lived connection: every new
    /// SQLite connection would otherwise see its own private database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new().in_memory(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.create_schema().await?;
        Ok(store)
    }

    async fn create_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl TodoStore for SqliteStore {
    async fn list_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        let items: Vec<TodoItem> =
            sqlx::query_as("SELECT id, name, is_complete FROM todo_items ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, StoreError> {
        let item: Option<TodoItem> =
            sqlx::query_as("SELECT id, name, is_complete FROM todo_items WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(item)
    }

    async fn insert(&self, new: NewTodoItem) -> Result<TodoItem, StoreError> {
        let item: TodoItem = sqlx::query_as(
            r#"
            INSERT INTO todo_items (name, is_complete)
            VALUES (?, ?)
            RETURNING id, name, is_complete
            "#,
        )
        .bind(new.name)
        .bind(new.is_complete)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn replace(&self, id: i64, item: TodoItem) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE todo_items SET name = ?, is_complete = ? WHERE id = ?")
            .bind(item.name)
            .bind(item.is_complete)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Vanished { id });
        }

        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }

        Ok(())
    }

    async fn persist(&self) -> Result<(), StoreError> {
        // Statements commit individually; checkpoint the WAL so completed
        // writes reach the main database file.
        sqlx::query("PRAGMA wal_checkpoint(PASSIVE)")
            .fetch_optional(&self.pool)
            .await?;

        Ok(())
    }
}
