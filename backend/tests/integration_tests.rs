use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use backend::store::SnippetStore;
use backend::{app, AppState};
use common::FileNode;
use serde_json::{json, Value};
use std::{fs, sync::Arc};
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

fn test_app(dir: &TempDir) -> axum::Router {
    let state = Arc::new(AppState {
        store: SnippetStore::new(dir.path().join("snippets.json")),
    });
    app(state)
}

fn forest_doc() -> Value {
    json!([
        {
            "id": "f1",
            "name": "utils",
            "type": "folder",
            "children": [
                { "id": "a", "name": "a.js", "type": "file", "content": "print(1)" }
            ]
        },
        { "id": "b", "name": "b.js", "type": "file", "content": "" }
    ])
}

#[tokio::test]
async fn test_get_snippets_empty_when_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let app = test_app(&temp_dir);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/snippets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let forest: Vec<FileNode> = serde_json::from_slice(&body_bytes).unwrap();
    assert!(forest.is_empty());
}

#[tokio::test]
async fn test_save_then_get_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let app = test_app(&temp_dir);
    let doc = forest_doc();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/snippets")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&doc).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body, json!({ "message": "Saved" }));

    // stored pretty-printed
    let raw = fs::read_to_string(temp_dir.path().join("snippets.json")).unwrap();
    assert!(raw.contains('\n'));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/snippets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let fetched: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(fetched, doc);
}

#[tokio::test]
async fn test_save_rejects_non_sequence_body() {
    let temp_dir = TempDir::new().unwrap();
    let app = test_app(&temp_dir);

    // seed valid state first
    fs::write(temp_dir.path().join("snippets.json"), "[]").unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/snippets")
                .header("content-type", "application/json")
                .body(Body::from(r#"{ "invalid": true }"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"], "Invalid data format");

    // prior state untouched
    let raw = fs::read_to_string(temp_dir.path().join("snippets.json")).unwrap();
    assert_eq!(raw, "[]");
}

#[tokio::test]
async fn test_delete_overwrites_stored_document() {
    let temp_dir = TempDir::new().unwrap();
    let app = test_app(&temp_dir);

    fs::write(
        temp_dir.path().join("snippets.json"),
        serde_json::to_string_pretty(&forest_doc()).unwrap(),
    )
    .unwrap();

    // client computed the post-delete forest: only "b" remains
    let replacement = json!([
        { "id": "b", "name": "b.js", "type": "file", "content": "" }
    ]);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/snippets/f1")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&replacement).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body, json!({ "message": "Deleted" }));

    let raw = fs::read_to_string(temp_dir.path().join("snippets.json")).unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, replacement);
}

#[tokio::test]
async fn test_get_snippets_corrupt_file_is_internal_error() {
    let temp_dir = TempDir::new().unwrap();
    let app = test_app(&temp_dir);

    fs::write(temp_dir.path().join("snippets.json"), "{ not json").unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/snippets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
