//! Todo service: one domain operation per HTTP call, errors normalized into
//! `TodoError` with readable text.

use tracing::warn;

use crate::api::TodoApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, Operation, TodoError};
use crate::transport::Transport;
use crate::types::{Todo, TodoId};

#[derive(Debug, Clone)]
pub struct TodoService<T> {
    api: TodoApi<T>,
}

impl<T: Transport> TodoService<T> {
    pub fn new(api: TodoApi<T>) -> Self {
        Self { api }
    }

    pub fn connect(base_url: &str, transport: T) -> Self {
        Self::new(TodoApi::new(base_url, transport))
    }

    pub fn from_config(config: &ClientConfig, transport: T) -> Self {
        Self::connect(&config.base_url, transport)
    }

    pub fn api(&self) -> &TodoApi<T> {
        &self.api
    }

    pub async fn get_all_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.api
            .fetch_list()
            .await
            .map_err(|err| normalize(Operation::List, err))
    }

    /// Returns the created todo only when the server reported success.
    pub async fn add_todo(&self, title: &str) -> Result<Todo, TodoError> {
        self.api
            .create(title)
            .await
            .map_err(|err| normalize(Operation::Create, err))
    }

    pub async fn update_todo(&self, id: &TodoId, title: &str) -> Result<(), TodoError> {
        self.api
            .update(id, title)
            .await
            .map_err(|err| normalize(Operation::Update, err))
    }

    pub async fn delete_todo(&self, id: &TodoId) -> Result<(), TodoError> {
        self.api
            .remove(id)
            .await
            .map_err(|err| normalize(Operation::Delete, err))
    }
}

fn normalize(operation: Operation, err: ApiError) -> TodoError {
    let todo_err = TodoError::from_api(operation, &err);
    warn!(%operation, cause = %err, text = %todo_err.message, "todo operation failed");
    todo_err
}
