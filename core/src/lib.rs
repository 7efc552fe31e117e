//! Client-side state synchronization for a remote todo list.
//!
//! # Overview
//! A `TodoStore` holds one in-memory `TodoListState` and keeps it in step
//! with a remote todo service through four commands: load, add, toggle and
//! delete. Each command tracks its own pending/settled lifecycle, and
//! failures are recorded into the state (page-level, form-level or on the
//! affected item) instead of being returned to the caller.
//!
//! # Design
//! - `TodoClient` builds `HttpRequest`s and parses `HttpResponse`s without
//!   touching the network (host-does-IO); a `Transport` runs them.
//! - `TodoService` is the seam the store depends on. `RemoteTodoService`
//!   is the HTTP implementation; tests swap in their own.
//! - `TodoListState::apply` is the only place state changes.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod state;
pub mod store;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::{ApiError, Operation, RequestError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{RemoteTodoService, TodoService};
pub use state::{TodoListState, Transition, EMPTY_LIST_MESSAGE};
pub use store::TodoStore;
pub use transport::{ReqwestTransport, Transport};
pub use types::{CreateTodo, TodoId, TodoItem, ToggleTodo, ToggledTodo};
