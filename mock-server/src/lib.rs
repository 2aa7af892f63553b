//! In-memory stand-in for the `/todos` REST service.
//!
//! Mirrors the handful of json-server behaviors the client depends on:
//! sequential numeric ids, PATCH merges fields, unknown fields are stored and
//! echoed back, DELETE answers 200 with the removed item.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::CorsLayer;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Seed file shape: either a bare array or a json-server style `db.json`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Seed {
    List(Vec<Todo>),
    Db { todos: Vec<Todo> },
}

/// Todos ordered by id, plus the last id handed out.
#[derive(Debug, Default)]
pub struct Store {
    todos: BTreeMap<u64, Todo>,
    last_id: u64,
}

impl Store {
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        let todos: BTreeMap<u64, Todo> = todos.into_iter().map(|t| (t.id, t)).collect();
        let last_id = todos.keys().next_back().copied().unwrap_or(0);
        Self { todos, last_id }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let todos = match serde_json::from_str(raw)? {
            Seed::List(todos) | Seed::Db { todos } => todos,
        };
        Ok(Self::with_todos(todos))
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn insert(&mut self, input: CreateTodo) -> Todo {
        self.last_id += 1;
        let mut extra = input.extra;
        extra.remove("id");
        let todo = Todo {
            id: self.last_id,
            title: input.title,
            extra,
        };
        self.todos.insert(todo.id, todo.clone());
        todo
    }

    fn patch(&mut self, id: u64, input: UpdateTodo) -> Option<Todo> {
        let todo = self.todos.get_mut(&id)?;
        if let Some(title) = input.title {
            todo.title = title;
        }
        for (key, value) in input.extra {
            if key != "id" {
                todo.extra.insert(key, value);
            }
        }
        Some(todo.clone())
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Store::default())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).patch(update_todo).delete(delete_todo))
        .with_state(db)
        .layer(CorsLayer::permissive())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.insert(input);
    tracing::info!(id = todo.id, title = %todo.title, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    let store = db.read().await;
    store.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let todo = db.write().await.patch(id, input).ok_or(StatusCode::NOT_FOUND)?;
    tracing::info!(id, title = %todo.title, "patched todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    let removed = db.write().await.todos.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    tracing::info!(id, "deleted todo");
    Ok(Json(removed))
}
