//! Error types for the todo client.
//!
//! # Design
//! Two layers mirror the two call layers. `ApiError` describes what went wrong
//! on the wire and keeps any `message` the server supplied. `TodoError` is
//! what the service hands to the page: a single readable message, taken from
//! the server when present and from a per-operation fallback otherwise.

use std::fmt;

use thiserror::Error;

/// The round trip itself failed (connection refused, reset, TLS, ...).
#[derive(Debug, Clone, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Errors returned by `TodoClient` parse methods and `TodoApi` calls.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound { message: Option<String> },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },

    /// The server answered 2xx but reported `success: false`.
    #[error("request was not successful")]
    Unsuccessful { message: Option<String> },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// The `message` the server put in the response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { message }
            | ApiError::Http { message, .. }
            | ApiError::Unsuccessful { message } => message.as_deref(),
            _ => None,
        }
    }
}

/// The four service operations, used to pick fallback error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch todos",
            Operation::Create => "todo add error",
            Operation::Update => "todo update error",
            Operation::Delete => "todo delete error",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Fallback when a create reports `success: false` without a message.
pub const CREATE_REJECTED_FALLBACK: &str = "Todo failed";

/// Domain error surfaced by `TodoService`; its `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TodoError {
    pub operation: Operation,
    pub message: String,
}

impl TodoError {
    pub fn new(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }

    /// Normalize a client error: server message first, then the fallback.
    pub fn from_api(operation: Operation, err: &ApiError) -> Self {
        if let Some(message) = err.server_message().filter(|m| !m.trim().is_empty()) {
            return Self::new(operation, message);
        }
        let fallback = match (operation, err) {
            (Operation::Create, ApiError::Unsuccessful { .. }) => CREATE_REJECTED_FALLBACK,
            _ => operation.fallback_message(),
        };
        Self::new(operation, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::Http {
            status: 500,
            message: Some("Database down".to_string()),
        };
        let todo_err = TodoError::from_api(Operation::List, &err);
        assert_eq!(todo_err.to_string(), "Database down");
    }

    #[test]
    fn blank_server_message_uses_fallback() {
        let err = ApiError::NotFound {
            message: Some("  ".to_string()),
        };
        let todo_err = TodoError::from_api(Operation::Delete, &err);
        assert_eq!(todo_err.message, "todo delete error");
    }

    #[test]
    fn transport_failure_uses_operation_fallback() {
        let err = ApiError::Transport(TransportError("connection refused".to_string()));
        assert_eq!(err.server_message(), None);
        assert_eq!(
            TodoError::from_api(Operation::Update, &err).message,
            "todo update error"
        );
    }

    #[test]
    fn rejected_create_without_message_says_todo_failed() {
        let err = ApiError::Unsuccessful { message: None };
        assert_eq!(
            TodoError::from_api(Operation::Create, &err).message,
            "Todo failed"
        );
    }

    #[test]
    fn undecodable_create_uses_add_fallback() {
        let err = ApiError::Deserialization("expected value".to_string());
        assert_eq!(
            TodoError::from_api(Operation::Create, &err).message,
            "todo add error"
        );
    }
}
