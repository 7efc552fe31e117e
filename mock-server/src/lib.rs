//! In-memory todo server speaking the same wire contract as the remote
//! service the store talks to.
//!
//! Items are kept in insertion order and receive sequential numeric ids, so
//! list responses are deterministic. `DELETE` answers with the full remaining
//! list rather than an empty body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// PATCH payload. Fields left out of the JSON are not touched.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Default)]
pub struct TodoTable {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoTable {
    pub fn seeded(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
        Self { todos, next_id }
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }
}

pub type Db = Arc<RwLock<TodoTable>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Build the router with `todos` already stored, in the given order.
pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(TodoTable::seeded(todos)));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock todo server listening");
    }
    axum::serve(listener, app).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let table = db.read().await;
    debug!(count = table.todos.len(), "list todos");
    Json(table.todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut table = db.write().await;
    table.next_id += 1;
    let todo = Todo {
        id: table.next_id,
        title: input.title,
        completed: false,
    };
    table.todos.push(todo.clone());
    debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut table = db.write().await;
    let idx = table.position(id).ok_or(StatusCode::NOT_FOUND)?;
    let todo = &mut table.todos[idx];
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    debug!(id, completed = todo.completed, "updated todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Todo>>, StatusCode> {
    let mut table = db.write().await;
    let idx = table.position(id).ok_or(StatusCode::NOT_FOUND)?;
    table.todos.remove(idx);
    debug!(id, remaining = table.todos.len(), "deleted todo");
    Ok(Json(table.todos.clone()))
}
