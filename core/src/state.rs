//! The todo list state and the transitions that mutate it.
//!
//! # Design
//! Every change to `TodoListState` is a `Transition` value applied by
//! `TodoListState::apply`, which is synchronous and does no I/O. The store
//! decides *when* a transition happens; this module decides *what* it does.
//!
//! Item-targeted transitions look the item up by id and silently skip the
//! update when the item is gone (deleted or replaced while the request was
//! in flight).

use serde::Serialize;
use tracing::debug;

use crate::error::RequestError;
use crate::types::{TodoId, TodoItem, ToggledTodo};

pub const EMPTY_LIST_MESSAGE: &str = "NO TODO LIST SO FAR .....";

/// Everything a renderer needs to draw the list and its forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoListState {
    pub todo_list: Vec<TodoItem>,
    /// True while a list fetch is in flight. Starts true: the first fetch is
    /// expected to be issued right away.
    pub todo_list_status: bool,
    /// Page-level message: empty list or failed fetch.
    pub status_message: String,
    /// True while a create is in flight.
    pub add_todo_status: bool,
    /// Outcome of the most recent create.
    pub add_todo_status_message: String,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self {
            todo_list: Vec::new(),
            todo_list_status: true,
            status_message: String::new(),
            add_todo_status: false,
            add_todo_status_message: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    LoadPending,
    LoadFulfilled(Vec<TodoItem>),
    LoadRejected(RequestError),
    AddPending,
    AddFulfilled(TodoItem),
    AddRejected(RequestError),
    ToggleFulfilled(ToggledTodo),
    ToggleRejected(RequestError),
    DeleteFulfilled(Vec<TodoItem>),
    DeleteRejected(RequestError),
    /// Append an item that has not been sent to the server.
    AddLocal(TodoItem),
    ToggleLocal { id: TodoId, completed: bool },
    RemoveLocal(TodoId),
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already known list, as if a load had just succeeded.
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        let mut state = Self::new();
        state.apply(Transition::LoadFulfilled(items));
        state
    }

    pub fn find(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todo_list.iter().find(|t| &t.id == id)
    }

    fn find_mut(&mut self, id: &TodoId) -> Option<&mut TodoItem> {
        self.todo_list.iter_mut().find(|t| &t.id == id)
    }

    /// Number of items marked completed.
    pub fn completed_count(&self) -> usize {
        self.todo_list.iter().filter(|t| t.completed).count()
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::LoadPending => self.todo_list_status = true,
            Transition::LoadFulfilled(items) => {
                self.todo_list_status = false;
                if items.is_empty() {
                    self.status_message = EMPTY_LIST_MESSAGE.to_string();
                } else {
                    self.todo_list = items;
                    self.status_message.clear();
                }
            }
            Transition::LoadRejected(err) => {
                self.todo_list_status = false;
                self.status_message = err.message;
            }
            Transition::AddPending => self.add_todo_status = true,
            Transition::AddFulfilled(item) => {
                self.add_todo_status = false;
                self.add_todo_status_message = format!("{} added successfully", item.title);
                self.todo_list.push(item);
            }
            Transition::AddRejected(err) => {
                self.add_todo_status = false;
                self.add_todo_status_message = err.message;
            }
            Transition::ToggleFulfilled(confirmed) => match self.find_mut(&confirmed.id) {
                Some(item) => {
                    item.completed = confirmed.completed;
                    if let Some(title) = confirmed.title {
                        item.title = title;
                    }
                    item.message = None;
                }
                None => debug!(id = %confirmed.id, "toggled item no longer in list"),
            },
            Transition::ToggleRejected(err) | Transition::DeleteRejected(err) => {
                self.annotate(err)
            }
            Transition::DeleteFulfilled(remaining) => self.todo_list = remaining,
            Transition::AddLocal(item) => self.todo_list.push(item),
            Transition::ToggleLocal { id, completed } => {
                if let Some(item) = self.find_mut(&id) {
                    item.completed = completed;
                }
            }
            Transition::RemoveLocal(id) => self.todo_list.retain(|t| t.id != id),
        }
    }

    /// Attach a failed operation's message to the item it targeted.
    fn annotate(&mut self, err: RequestError) {
        let Some(id) = err.target_id else {
            debug!(kind = ?err.kind, "item error without a target id");
            return;
        };
        match self.find_mut(&id) {
            Some(item) => item.message = Some(err.message),
            None => debug!(%id, kind = ?err.kind, "failed item no longer in list"),
        }
    }
}
