//! Entity types for the todo API

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A todo item as stored and served.
///
/// Wire form uses camelCase field names: `{"id", "name", "isComplete"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Store-assigned, immutable once created
    pub id: i64,
    pub name: Option<String>,
    pub is_complete: bool,
}

/// Field values for a record the store has not assigned an id to yet.
#[derive(Debug, Clone, Default)]
pub struct NewTodoItem {
    pub name: Option<String>,
    pub is_complete: bool,
}
