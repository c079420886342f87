//! In-process stand-in for the placeholder service.
//!
//! Boots an axum application on an ephemeral local port that reproduces
//! the behaviors the client layer depends on: numeric server-assigned ids,
//! echo semantics on create and update, 404 with an empty object body for
//! misses, 200 with an empty object body for deletes, and string-compared
//! query filtering on collection reads.
//!
//! Documents are stored as raw JSON values, so the server accepts whatever
//! shape a test sends and never constrains the client's models.

use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error};

#[cfg(test)]
#[path = "fake_api_tests.rs"]
mod tests;

/// One resource family's storage: documents keyed by id, plus the id
/// counter. Ids start at 1 and are never reused within a server's life.
#[derive(Debug, Default)]
struct Collection {
    next_id: u64,
    items: BTreeMap<u64, Value>,
}

impl Collection {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

type Store = Arc<RwLock<Collection>>;

#[derive(Clone, Default)]
struct ApiState {
    comments: Store,
    users: Store,
}

fn app() -> Router {
    let state = ApiState::default();
    Router::new()
        .route("/comments", get(list_comments).post(create_comment))
        .route(
            "/comments/:id",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(state)
}

async fn list_comments(
    State(state): State<ApiState>,
    Query(filters): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    list_in(&state.comments, &filters).await
}

async fn create_comment(
    State(state): State<ApiState>,
    Json(document): Json<Value>,
) -> (StatusCode, Json<Value>) {
    create_in(&state.comments, document).await
}

async fn get_comment(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> (StatusCode, Json<Value>) {
    fetch_in(&state.comments, id).await
}

async fn update_comment(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
    Json(document): Json<Value>,
) -> (StatusCode, Json<Value>) {
    update_in(&state.comments, id, document).await
}

async fn delete_comment(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> (StatusCode, Json<Value>) {
    delete_in(&state.comments, id).await
}

async fn list_users(
    State(state): State<ApiState>,
    Query(filters): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    list_in(&state.users, &filters).await
}

async fn create_user(
    State(state): State<ApiState>,
    Json(document): Json<Value>,
) -> (StatusCode, Json<Value>) {
    create_in(&state.users, document).await
}

async fn get_user(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> (StatusCode, Json<Value>) {
    fetch_in(&state.users, id).await
}

async fn update_user(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
    Json(document): Json<Value>,
) -> (StatusCode, Json<Value>) {
    update_in(&state.users, id, document).await
}

async fn delete_user(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> (StatusCode, Json<Value>) {
    delete_in(&state.users, id).await
}

async fn create_in(store: &Store, mut document: Value) -> (StatusCode, Json<Value>) {
    let mut collection = store.write().await;
    let id = collection.allocate_id();
    if let Value::Object(fields) = &mut document {
        fields.insert("id".to_string(), json!(id));
    }
    collection.items.insert(id, document.clone());
    debug!(id, "stored new document");
    (StatusCode::CREATED, Json(document))
}

async fn fetch_in(store: &Store, id: u64) -> (StatusCode, Json<Value>) {
    match store.read().await.items.get(&id) {
        Some(document) => (StatusCode::OK, Json(document.clone())),
        None => miss(),
    }
}

async fn update_in(store: &Store, id: u64, mut document: Value) -> (StatusCode, Json<Value>) {
    let mut collection = store.write().await;
    if !collection.items.contains_key(&id) {
        return miss();
    }
    if let Value::Object(fields) = &mut document {
        fields.insert("id".to_string(), json!(id));
    }
    collection.items.insert(id, document.clone());
    (StatusCode::OK, Json(document))
}

async fn delete_in(store: &Store, id: u64) -> (StatusCode, Json<Value>) {
    if store.write().await.items.remove(&id).is_some() {
        (StatusCode::OK, Json(json!({})))
    } else {
        miss()
    }
}

async fn list_in(store: &Store, filters: &HashMap<String, String>) -> (StatusCode, Json<Value>) {
    let collection = store.read().await;
    let matches: Vec<Value> = collection
        .items
        .values()
        .filter(|document| matches_filters(document, filters))
        .cloned()
        .collect();
    (StatusCode::OK, Json(Value::Array(matches)))
}

/// Query filtering compares the document field's JSON rendering against
/// the query value, matching how the real service filters collections.
fn matches_filters(document: &Value, filters: &HashMap<String, String>) -> bool {
    filters.iter().all(|(field, want)| match document.get(field) {
        Some(Value::String(text)) => text == want,
        Some(other) => other.to_string() == *want,
        None => false,
    })
}

fn miss() -> (StatusCode, Json<Value>) {
    // The placeholder service answers misses with an empty object.
    (StatusCode::NOT_FOUND, Json(json!({})))
}

/// Handle to a running stand-in server.
///
/// The server task is aborted when the handle is dropped, so keep the
/// handle alive for the duration of the test.
#[derive(Debug)]
pub struct FakePlaceholderServer {
    addr: SocketAddr,
    server: JoinHandle<()>,
}

impl FakePlaceholderServer {
    /// Binds an ephemeral local port and serves the stand-in API on it.
    pub async fn start() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            if let Err(error) = axum::serve(listener, app()).await {
                error!(%error, "stand-in placeholder server stopped unexpectedly");
            }
        });
        debug!(%addr, "stand-in placeholder server listening");
        Ok(Self { addr, server })
    }

    /// Base URL clients should be configured with.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Socket address the server is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for FakePlaceholderServer {
    fn drop(&mut self) {
        self.server.abort();
    }
}
