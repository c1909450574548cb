//! todoctl-server: HTTP CRUD API for todo items
//!
//! A single-entity REST service: five `/api/todo` endpoints backed by a
//! SQLite storage gateway. The storage seam is the [`store::TodoStore`]
//! trait, so the HTTP layer can be exercised against an in-memory fake
//! as well as the real database.

pub mod http;
pub mod models;
pub mod store;

pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{NewTodoItem, TodoItem};
pub use store::{ensure_seeded, MemoryStore, SqliteStore, StoreError, TodoStore};
