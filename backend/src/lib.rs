pub mod store;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use std::{fs, path::PathBuf, sync::Arc};
use store::{SnippetStore, StoreError};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::error;

pub struct AppState {
    pub store: SnippetStore,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/snippets", get(get_snippets).post(save_snippets))
        .route("/api/snippets/{id}", delete(delete_snippets))
        .fallback(index_handler)
        .with_state(state)
}

async fn index_handler(uri: axum::http::Uri) -> impl IntoResponse {
    // Try to serve static file first
    let path = uri.path().trim_start_matches('/');
    let static_path = PathBuf::from("static").join(path);

    if !path.is_empty() && static_path.exists() && static_path.is_file() {
        match ServeDir::new("static")
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
        {
            Ok(res) => return res.into_response(),
            Err(err) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Static file error: {}", err),
                )
                    .into_response()
            }
        }
    }

    // Fallback to index.html
    match fs::read_to_string("static/index.html") {
        Ok(content) => (StatusCode::OK, axum::response::Html(content)).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "index.html not found").into_response(),
    }
}

async fn get_snippets(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.load() {
        Ok(forest) => Json(forest).into_response(),
        Err(err) => {
            error!("failed to read snippets: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

async fn save_snippets(
    State(state): State<Arc<AppState>>,
    Json(doc): Json<Value>,
) -> impl IntoResponse {
    match state.store.save(&doc) {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Saved" }))).into_response(),
        Err(StoreError::InvalidFormat) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid data format" })),
        )
            .into_response(),
        Err(err) => {
            error!("failed to save snippets: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to save snippet" })),
            )
                .into_response()
        }
    }
}

/// Despite the verb this is a full overwrite: the client computes the
/// post-delete forest and sends it as the body.
async fn delete_snippets(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(doc): Json<Value>,
) -> impl IntoResponse {
    match state.store.overwrite(&doc) {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Deleted" }))).into_response(),
        Err(err) => {
            error!("failed to delete snippet {id}: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
