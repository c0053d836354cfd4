//! Round-trip HTTP client for the todo endpoint.
//!
//! Pairs the pure `TodoClient` with a `Transport`: build, execute, parse.
//! No retries and no timeouts are applied here.

use tracing::warn;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Todo, TodoId};

#[derive(Debug, Clone)]
pub struct TodoApi<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> TodoApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        self.transport.execute(request).await.map_err(|err| {
            warn!(method = method.as_str(), %path, error = %err, "request failed");
            ApiError::from(err)
        })
    }

    pub async fn fetch_list(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.round_trip(self.client.build_list_todos()).await?;
        self.client.parse_list_todos(response)
    }

    pub async fn create(&self, title: &str) -> Result<Todo, ApiError> {
        let request = self.client.build_create_todo(title)?;
        let response = self.round_trip(request).await?;
        self.client.parse_create_todo(response)
    }

    pub async fn update(&self, id: &TodoId, title: &str) -> Result<(), ApiError> {
        let request = self.client.build_update_todo(id, title)?;
        let response = self.round_trip(request).await?;
        self.client.parse_update_todo(response)
    }

    pub async fn remove(&self, id: &TodoId) -> Result<(), ApiError> {
        let response = self.round_trip(self.client.build_delete_todo(id)).await?;
        self.client.parse_delete_todo(response)
    }
}
