//! Domain DTOs for the todo API.
//!
//! # Design
//! Wire names follow the server schema (`_id`, `updatedAt`) through serde
//! renames so the Rust side keeps snake_case fields. Extra fields the server
//! sends (`createdAt`, `__v`, ...) are ignored on decode.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque, server-assigned todo identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: TodoId,
    pub title: String,
    /// Set only after a successful edit.
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Todo {
    pub fn new(id: impl Into<TodoId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            updated_at: None,
        }
    }

    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }
}

/// Request payload shared by create and update: only the title is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitlePayload {
    pub title: String,
}

/// `GET /getTodos` response. A missing or null `todos` field decodes as empty.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListResponse {
    #[serde(default)]
    pub todos: Option<Vec<Todo>>,
}

/// `POST /` response. `message` is the created todo on success and, on some
/// failures, a human-readable string.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: serde_json::Value,
}

/// `PUT /{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

/// Titles are valid when they contain something besides whitespace.
pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}
