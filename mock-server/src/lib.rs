use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct TitleInput {
    #[serde(default)]
    pub title: String,
}

/// Insertion-ordered store.
pub type Db = Arc<RwLock<Vec<Todo>>>;

type Reply = (StatusCode, Json<Value>);

pub fn app() -> Router {
    app_with(Db::default())
}

/// Router over an existing store, for tests that seed or inspect it.
pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/getTodos", get(list_todos))
        .route("/", post(create_todo))
        .route("/{id}", put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn failure(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "success": false, "message": message })))
}

async fn list_todos(State(db): State<Db>) -> Json<Value> {
    let todos = db.read().await;
    info!(count = todos.len(), "list todos");
    Json(json!({ "todos": *todos }))
}

async fn create_todo(State(db): State<Db>, Json(input): Json<TitleInput>) -> Reply {
    if input.title.trim().is_empty() {
        return failure(StatusCode::BAD_REQUEST, "Title is required");
    }
    let todo = Todo {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        updated_at: None,
    };
    info!(id = %todo.id, "create todo");
    db.write().await.push(todo.clone());
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": todo })),
    )
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TitleInput>,
) -> Reply {
    if input.title.trim().is_empty() {
        return failure(StatusCode::BAD_REQUEST, "Title is required");
    }
    let mut todos = db.write().await;
    let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) else {
        return failure(StatusCode::NOT_FOUND, "Todo not found");
    };
    todo.title = input.title;
    todo.updated_at = Some(Utc::now());
    info!(%id, "update todo");
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Todo updated" })),
    )
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> Reply {
    let mut todos = db.write().await;
    let Some(index) = todos.iter().position(|todo| todo.id == id) else {
        return failure(StatusCode::NOT_FOUND, "Todo not found");
    };
    todos.remove(index);
    info!(%id, "delete todo");
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Todo deleted" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_server_field_names() {
        let todo = Todo {
            id: "abc".to_string(),
            title: "Test".to_string(),
            updated_at: None,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, json!({"_id": "abc", "title": "Test"}));
    }

    #[test]
    fn edited_todo_carries_updated_at() {
        let todo = Todo {
            id: "abc".to_string(),
            title: "Test".to_string(),
            updated_at: Some(Utc::now()),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert!(json["updatedAt"].is_string());
    }

    #[test]
    fn title_input_defaults_to_empty() {
        let input: TitleInput = serde_json::from_str("{}").unwrap();
        assert!(input.title.is_empty());
    }
}
