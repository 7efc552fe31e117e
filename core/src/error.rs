//! Error types for the todo API client and the store.
//!
//! # Design
//! `ApiError` describes what went wrong on the wire and is only ever logged.
//! `RequestError` is what the store sees: the operation that failed, the
//! fixed user-facing message for that operation, and for per-item operations
//! the id that was targeted.

use thiserror::Error;

use crate::types::TodoId;

pub const LIST_FAILED: &str = "something is wrong, please try again....";
pub const CREATE_FAILED: &str = "cannot add a todo right now, something is wrong ....";
pub const TOGGLE_FAILED: &str = "cannot toggle the todo item right now, something is wrong ....";
pub const DELETE_FAILED: &str = "cannot delete the todo item right now, something is wrong ....";

/// Errors returned by `TodoClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}

/// The remote operation families. Each has its own failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Toggle,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => LIST_FAILED,
            Operation::Create => CREATE_FAILED,
            Operation::Toggle => TOGGLE_FAILED,
            Operation::Delete => DELETE_FAILED,
        }
    }
}

/// A failed remote operation, as recorded into store state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    pub kind: Operation,
    pub message: String,
    /// Set for toggle and delete, which act on a single item.
    pub target_id: Option<TodoId>,
}

impl RequestError {
    fn new(kind: Operation, target_id: Option<TodoId>) -> Self {
        Self {
            kind,
            message: kind.failure_message().to_string(),
            target_id,
        }
    }

    pub fn list() -> Self {
        Self::new(Operation::List, None)
    }

    pub fn create() -> Self {
        Self::new(Operation::Create, None)
    }

    pub fn toggle(id: TodoId) -> Self {
        Self::new(Operation::Toggle, Some(id))
    }

    pub fn delete(id: TodoId) -> Self {
        Self::new(Operation::Delete, Some(id))
    }
}
