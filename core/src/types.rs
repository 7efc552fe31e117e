//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift. Ids are opaque: the remote service may
//! hand out numbers or strings, and locally created items use UUID strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

/// Identifier of a todo item, preserved exactly as the server sent it.
///
/// Any JSON number is accepted, negative and fractional ones included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(Number),
    Text(String),
}

impl TodoId {
    /// A fresh client-side id for items the server has not confirmed yet.
    pub fn local() -> Self {
        TodoId::Text(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        TodoId::Number(n.into())
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId::Text(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        TodoId::Text(s)
    }
}

/// A single todo item as held in the list.
///
/// `message` is a client-side annotation set when an operation on this item
/// fails. The server never sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TodoItem {
    pub fn new(id: impl Into<TodoId>, title: &str, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            completed,
            message: None,
        }
    }
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for flipping the completed flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleTodo {
    pub completed: bool,
}

/// The server's confirmation of a toggle. Only `id` and `completed` are
/// guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggledTodo {
    pub id: TodoId,
    pub completed: bool,
    #[serde(default)]
    pub title: Option<String>,
}
