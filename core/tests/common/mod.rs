//! Scripted transport shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use todo_core::{
    HttpRequest, HttpResponse, NotificationLog, Todo, TodoListController, TodoService, Transport,
    TransportError,
};

pub const BASE_URL: &str = "http://localhost:3000/api/todos";

pub enum Reply {
    Ready(Result<HttpResponse, TransportError>),
    /// Resolves when the paired sender fires; lets a test observe state while
    /// the call is in flight.
    Pending(oneshot::Receiver<HttpResponse>),
}

/// Answers requests from a queue of canned replies and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Reply>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Reply::Ready(Ok(response(status, &body.to_string()))));
        self
    }

    pub fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Reply::Ready(Ok(response(status, body))));
        self
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Reply::Ready(Err(TransportError(reason.to_string()))));
        self
    }

    pub fn pending(&self) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Reply::Pending(rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                panic!(
                    "no scripted reply for {} {}",
                    request.method.as_str(),
                    request.path
                )
            });
        match reply {
            Reply::Ready(result) => result,
            Reply::Pending(rx) => rx
                .await
                .map_err(|_| TransportError("reply sender dropped".to_string())),
        }
    }
}

pub fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: Vec::new(),
        body: body.to_string(),
    }
}

pub type Page = TodoListController<ScriptedTransport, NotificationLog>;

/// A controller over `todos` that has already finished its initial load.
pub fn page_with(todos: Vec<Todo>) -> (Page, ScriptedTransport, NotificationLog) {
    let transport = ScriptedTransport::new();
    let log = NotificationLog::new();
    let page = TodoListController::with_todos(
        TodoService::connect(BASE_URL, transport.clone()),
        log.clone(),
        todos,
    );
    (page, transport, log)
}

/// A controller that has not loaded yet.
pub fn fresh_page() -> (Page, ScriptedTransport, NotificationLog) {
    let transport = ScriptedTransport::new();
    let log = NotificationLog::new();
    let page = TodoListController::new(
        TodoService::connect(BASE_URL, transport.clone()),
        log.clone(),
    );
    (page, transport, log)
}
