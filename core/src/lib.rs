//! Client core for the todo page.
//!
//! # Overview
//! Talks to a todo endpoint and keeps the page state that mirrors it:
//! a pure request builder / response parser, an I/O seam, a thin HTTP client,
//! the todo service, and the page controller that ties them to user actions.
//!
//! # Design
//! - `TodoClient` is stateless: `build_*` produces a request, `parse_*`
//!   consumes a response, so the I/O boundary is explicit.
//! - `Transport` performs the round trip; `ReqwestTransport` in production,
//!   scripted transports in tests.
//! - `TodoApi` → `TodoService` → `TodoListController` each add one concern:
//!   round trip, readable errors, page state.
//! - Notifications go through an injected `Notifier`.

pub mod api;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod list;
pub mod notify;
pub mod service;
pub mod transport;
pub mod types;
pub mod view;

pub use api::TodoApi;
pub use client::TodoClient;
pub use config::{ClientConfig, ConfigError};
pub use controller::{EditState, PageState, TodoListController};
pub use error::{ApiError, Operation, TodoError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::TodoList;
pub use notify::{Notification, NotificationKind, NotificationLog, Notifier, TracingNotifier};
pub use service::TodoService;
pub use transport::{ReqwestTransport, Transport};
pub use types::{is_valid_title, TitlePayload, Todo, TodoId};
pub use view::{ListView, PageView, RowView};

