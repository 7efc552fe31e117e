//! Async commands over a single `TodoListState`.
//!
//! # Design
//! The state lives in a `watch` channel. Each command marks its pending
//! flag, awaits the service, then applies exactly one settlement transition.
//! Transitions run inside `send_modify`, so each one is atomic and nothing
//! is held across an await. Commands take `&self` and can be in flight at
//! the same time; item settlements are applied by id.
//!
//! Commands never return errors: failures end up in the state as messages.

use tokio::sync::watch;
use tracing::debug;

use crate::config::ClientConfig;
use crate::service::{RemoteTodoService, TodoService};
use crate::state::{TodoListState, Transition};
use crate::transport::ReqwestTransport;
use crate::types::{TodoId, TodoItem};

pub struct TodoStore<S> {
    service: S,
    state: watch::Sender<TodoListState>,
}

impl TodoStore<RemoteTodoService<ReqwestTransport>> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(RemoteTodoService::from_config(config))
    }
}

impl<S: TodoService> TodoStore<S> {
    pub fn new(service: S) -> Self {
        Self::with_state(service, TodoListState::new())
    }

    pub fn with_state(service: S, state: TodoListState) -> Self {
        let (state, _) = watch::channel(state);
        Self { service, state }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// An owned copy of the current state.
    pub fn snapshot(&self) -> TodoListState {
        self.state.borrow().clone()
    }

    /// A receiver that is marked changed after every transition.
    pub fn subscribe(&self) -> watch::Receiver<TodoListState> {
        self.state.subscribe()
    }

    pub fn completed_count(&self) -> usize {
        self.state.borrow().completed_count()
    }

    fn dispatch(&self, transition: Transition) {
        self.state.send_modify(|state| state.apply(transition));
    }

    pub async fn load_todos(&self) {
        debug!("loading todos");
        self.dispatch(Transition::LoadPending);
        let transition = match self.service.list().await {
            Ok(items) => Transition::LoadFulfilled(items),
            Err(err) => Transition::LoadRejected(err),
        };
        self.dispatch(transition);
    }

    /// Create a todo on the server. The item only shows up in the list once
    /// the server has answered. Blank titles are ignored.
    pub async fn add_todo(&self, title: &str) {
        if title.trim().is_empty() {
            debug!("ignoring add with blank title");
            return;
        }
        debug!(title, "adding todo");
        self.dispatch(Transition::AddPending);
        let transition = match self.service.create(title).await {
            Ok(item) => Transition::AddFulfilled(item),
            Err(err) => Transition::AddRejected(err),
        };
        self.dispatch(transition);
    }

    pub async fn toggle_todo(&self, id: &TodoId, completed: bool) {
        debug!(%id, completed, "toggling todo");
        let transition = match self.service.toggle(id, completed).await {
            Ok(confirmed) => Transition::ToggleFulfilled(confirmed),
            Err(err) => Transition::ToggleRejected(err),
        };
        self.dispatch(transition);
    }

    pub async fn delete_todo(&self, id: &TodoId) {
        debug!(%id, "deleting todo");
        let transition = match self.service.delete(id).await {
            Ok(remaining) => Transition::DeleteFulfilled(remaining),
            Err(err) => Transition::DeleteRejected(err),
        };
        self.dispatch(transition);
    }

    /// Append an unconfirmed item with a client-assigned id.
    pub fn add_local(&self, title: &str) -> TodoId {
        let item = TodoItem::new(TodoId::local(), title, false);
        let id = item.id.clone();
        self.dispatch(Transition::AddLocal(item));
        id
    }

    pub fn toggle_local(&self, id: &TodoId, completed: bool) {
        self.dispatch(Transition::ToggleLocal {
            id: id.clone(),
            completed,
        });
    }

    pub fn remove_local(&self, id: &TodoId) {
        self.dispatch(Transition::RemoveLocal(id.clone()));
    }
}
