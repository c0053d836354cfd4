//! Todo page logic.
//!
//! # Design
//! `TodoListController` owns the local `TodoList` and all transient page
//! state, and turns user actions into service calls. Operations are
//! `async fn(&self)` over a `RefCell`d `PageState`; the cell is never borrowed
//! across an `.await`, so the page stays usable while a call is in flight and
//! flags such as `loading` are visible to the renderer in the meantime.
//!
//! Local state changes only after the server confirms a mutation, so a failed
//! call leaves nothing to roll back.

use std::cell::RefCell;

use chrono::Utc;
use tracing::debug;

use crate::list::TodoList;
use crate::notify::Notifier;
use crate::service::TodoService;
use crate::transport::Transport;
use crate::types::{is_valid_title, Todo, TodoId};
use crate::view::PageView;

pub const EMPTY_TODO: &str = "Todo cannot be empty";
pub const EMPTY_TITLE: &str = "Todo title cannot be empty";
pub const TODO_ADDED: &str = "Todo added successfully";
pub const TODO_UPDATED: &str = "Todo updated successfully";
pub const TODO_DELETED: &str = "Todo deleted successfully";

/// The single in-progress edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: TodoId,
    pub buffer: String,
}

/// Everything the page renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub input: String,
    pub todos: TodoList,
    /// A create call is in flight.
    pub loading: bool,
    /// The initial load is in flight.
    pub fetching: bool,
    pub editing: Option<EditState>,
    /// Candidate for deletion; the confirmation dialog is open while set.
    pub delete_target: Option<TodoId>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            input: String::new(),
            todos: TodoList::new(),
            loading: false,
            fetching: true,
            editing: None,
            delete_target: None,
        }
    }
}

impl PageState {
    pub fn is_delete_dialog_open(&self) -> bool {
        self.delete_target.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn is_editing(&self, id: &TodoId) -> bool {
        self.editing.as_ref().is_some_and(|edit| &edit.id == id)
    }
}

pub struct TodoListController<T, N> {
    service: TodoService<T>,
    notifier: N,
    state: RefCell<PageState>,
}

impl<T: Transport, N: Notifier> TodoListController<T, N> {
    pub fn new(service: TodoService<T>, notifier: N) -> Self {
        Self {
            service,
            notifier,
            state: RefCell::new(PageState::default()),
        }
    }

    /// Start from an already materialized list, skipping the initial load.
    pub fn with_todos(service: TodoService<T>, notifier: N, todos: Vec<Todo>) -> Self {
        let state = PageState {
            todos: TodoList::from(todos),
            fetching: false,
            ..PageState::default()
        };
        Self {
            service,
            notifier,
            state: RefCell::new(state),
        }
    }

    pub fn state(&self) -> PageState {
        self.state.borrow().clone()
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.state.borrow().todos.as_slice().to_vec()
    }

    pub fn view(&self) -> PageView {
        PageView::from_state(&self.state.borrow())
    }

    pub fn service(&self) -> &TodoService<T> {
        &self.service
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.state.borrow_mut().input = text.into();
    }

    /// Ignored when no edit is in progress.
    pub fn set_edit_buffer(&self, text: impl Into<String>) {
        if let Some(edit) = self.state.borrow_mut().editing.as_mut() {
            edit.buffer = text.into();
        }
    }

    pub async fn load(&self) {
        self.state.borrow_mut().fetching = true;
        let result = self.service.get_all_todos().await;
        {
            let mut state = self.state.borrow_mut();
            if let Ok(todos) = &result {
                state.todos.replace(todos.clone());
            }
            state.fetching = false;
        }
        match result {
            Ok(todos) => debug!(count = todos.len(), "todos loaded"),
            Err(err) => self.notifier.error(&err.message),
        }
    }

    pub async fn create(&self) {
        let title = {
            let state = self.state.borrow();
            if state.loading {
                debug!("create ignored while another create is in flight");
                return;
            }
            state.input.clone()
        };
        if !is_valid_title(&title) {
            self.notifier.error(EMPTY_TODO);
            return;
        }

        self.state.borrow_mut().loading = true;
        let result = self.service.add_todo(&title).await;
        {
            let mut state = self.state.borrow_mut();
            state.loading = false;
            if let Ok(created) = &result {
                state.todos.push(Todo::new(created.id.clone(), created.title.clone()));
                state.input.clear();
            }
        }
        match result {
            Ok(_) => self.notifier.success(TODO_ADDED),
            Err(err) => self.notifier.error(&err.message),
        }
    }

    /// Starting an edit abandons any other unsaved edit buffer.
    pub fn begin_edit(&self, id: &TodoId) {
        let mut state = self.state.borrow_mut();
        let Some(title) = state.todos.get(id).map(|todo| todo.title.clone()) else {
            debug!(%id, "begin_edit on unknown todo");
            return;
        };
        state.editing = Some(EditState {
            id: id.clone(),
            buffer: title,
        });
    }

    pub fn cancel_edit(&self) {
        self.state.borrow_mut().editing = None;
    }

    pub async fn commit_edit(&self) {
        let Some(EditState { id, buffer }) = self.state.borrow().editing.clone() else {
            return;
        };
        if !is_valid_title(&buffer) {
            self.notifier.error(EMPTY_TITLE);
            return;
        }

        match self.service.update_todo(&id, &buffer).await {
            Ok(()) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.todos.rename(&id, &buffer, Utc::now());
                    if state.is_editing(&id) {
                        state.editing = None;
                    }
                }
                self.notifier.success(TODO_UPDATED);
            }
            Err(err) => self.notifier.error(&err.message),
        }
    }

    pub fn request_delete(&self, id: TodoId) {
        self.state.borrow_mut().delete_target = Some(id);
    }

    /// On failure the dialog stays open on the same candidate so the user can
    /// retry or cancel.
    pub async fn confirm_delete(&self) {
        let Some(id) = self.state.borrow().delete_target.clone() else {
            return;
        };

        match self.service.delete_todo(&id).await {
            Ok(()) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.todos.remove(&id);
                    if state.delete_target.as_ref() == Some(&id) {
                        state.delete_target = None;
                    }
                    if state.is_editing(&id) {
                        state.editing = None;
                    }
                }
                self.notifier.success(TODO_DELETED);
            }
            Err(err) => self.notifier.error(&err.message),
        }
    }

    pub fn cancel_delete(&self) {
        self.state.borrow_mut().delete_target = None;
    }
}
