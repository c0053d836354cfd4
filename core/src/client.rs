//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The round trip itself belongs to a `Transport` (see `crate::api`).

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateResponse, ListResponse, TitlePayload, Todo, TodoId, UpdateResponse};

/// Characters escaped when an id is placed in a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_path(&self, id: &TodoId) -> String {
        format!("{}/{}", self.base_url, utf8_percent_encode(id.as_str(), SEGMENT))
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/getTodos", self.base_url),
            headers: Vec::new(),
            body: None,
            with_credentials: true,
        }
    }

    pub fn build_create_todo(&self, title: &str) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/", self.base_url),
            headers: json_headers(),
            body: Some(title_body(title)?),
            with_credentials: true,
        })
    }

    pub fn build_update_todo(&self, id: &TodoId, title: &str) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_path(id),
            headers: json_headers(),
            body: Some(title_body(title)?),
            with_credentials: false,
        })
    }

    pub fn build_delete_todo(&self, id: &TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
            with_credentials: false,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response)?;
        let list: ListResponse = decode(&response.body)?;
        Ok(list.todos.unwrap_or_default())
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        let created: CreateResponse = decode(&response.body)?;
        if !created.success {
            return Err(ApiError::Unsuccessful {
                message: created.message.as_str().map(str::to_string),
            });
        }
        serde_json::from_value(created.message)
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        let updated: UpdateResponse = decode(&response.body)?;
        if !updated.success {
            return Err(ApiError::Unsuccessful {
                message: updated
                    .message
                    .as_ref()
                    .and_then(|m| m.as_str())
                    .map(str::to_string),
            });
        }
        Ok(())
    }

    /// Any 2xx counts as deleted; the body shape is up to the server.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn title_body(title: &str) -> Result<String, ApiError> {
    let payload = TitlePayload {
        title: title.to_string(),
    };
    serde_json::to_string(&payload).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let message = extract_message(&response.body);
    if response.status == 404 {
        return Err(ApiError::NotFound { message });
    }
    Err(ApiError::Http {
        status: response.status,
        message,
    })
}

/// Pull a string `message` field out of a JSON error body.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
