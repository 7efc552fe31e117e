//! The four remote operations the store depends on.
//!
//! `TodoService` is the seam between the store and the network. The
//! production implementation, `RemoteTodoService`, runs build → execute →
//! parse for each call and folds every `ApiError` into the operation's
//! `RequestError`, logging the underlying cause.

use async_trait::async_trait;
use tracing::warn;

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, RequestError};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{CreateTodo, TodoId, TodoItem, ToggleTodo, ToggledTodo};

#[async_trait]
pub trait TodoService: Send + Sync {
    async fn list(&self) -> Result<Vec<TodoItem>, RequestError>;
    async fn create(&self, title: &str) -> Result<TodoItem, RequestError>;
    async fn toggle(&self, id: &TodoId, completed: bool) -> Result<ToggledTodo, RequestError>;
    /// Returns the full list left on the server after the delete.
    async fn delete(&self, id: &TodoId) -> Result<Vec<TodoItem>, RequestError>;
}

pub struct RemoteTodoService<T> {
    client: TodoClient,
    transport: T,
}

impl RemoteTodoService<ReqwestTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(TodoClient::new(&config.base_url), ReqwestTransport::new())
    }
}

impl<T: Transport> RemoteTodoService<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }
}

fn reject(op: &'static str, cause: ApiError, err: RequestError) -> RequestError {
    warn!(op, error = %cause, id = ?err.target_id, "remote todo call failed");
    err
}

#[async_trait]
impl<T: Transport> TodoService for RemoteTodoService<T> {
    async fn list(&self) -> Result<Vec<TodoItem>, RequestError> {
        let result: Result<_, ApiError> = async {
            let response = self.transport.execute(self.client.build_list()).await?;
            self.client.parse_list(response)
        }
        .await;
        result.map_err(|e| reject("list", e, RequestError::list()))
    }

    async fn create(&self, title: &str) -> Result<TodoItem, RequestError> {
        let input = CreateTodo {
            title: title.to_string(),
        };
        let result: Result<_, ApiError> = async {
            let request = self.client.build_create(&input)?;
            let response = self.transport.execute(request).await?;
            self.client.parse_create(response)
        }
        .await;
        result.map_err(|e| reject("create", e, RequestError::create()))
    }

    async fn toggle(&self, id: &TodoId, completed: bool) -> Result<ToggledTodo, RequestError> {
        let result: Result<_, ApiError> = async {
            let request = self.client.build_toggle(id, &ToggleTodo { completed })?;
            let response = self.transport.execute(request).await?;
            self.client.parse_toggle(response)
        }
        .await;
        result.map_err(|e| reject("toggle", e, RequestError::toggle(id.clone())))
    }

    async fn delete(&self, id: &TodoId) -> Result<Vec<TodoItem>, RequestError> {
        let result: Result<_, ApiError> = async {
            let response = self.transport.execute(self.client.build_delete(id)).await?;
            self.client.parse_delete(response)
        }
        .await;
        result.map_err(|e| reject("delete", e, RequestError::delete(id.clone())))
    }
}
