use axum::http::StatusCode;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use trivia_api::api::{self, AppState};
use trivia_api::db::init_db;
use trivia_api::{seed_if_empty, MemoryStore, Repository};

async fn setup_test_app() -> (axum::Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));
    seed_if_empty(&repo).await.expect("seed failed");

    (api::create_router(AppState::new(repo)), temp_dir)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _temp) = setup_test_app().await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["total_questions"], 19);
}

#[tokio::test]
async fn test_unknown_route_uses_error_envelope() {
    let (app, _temp) = setup_test_app().await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/does-not-exist")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"success": false, "error": 404, "message": "resource not found"})
    );
}

#[tokio::test]
async fn test_method_not_allowed_keeps_allow_header() {
    let (app, _temp) = setup_test_app().await;

    let request = axum::http::Request::builder()
        .method("PUT")
        .uri("/categories")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.headers().contains_key("allow"));
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"success": false, "error": 405, "message": "method not allowed"})
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _temp) = setup_test_app().await;

    let request = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/questions")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "DELETE")
        .header("access-control-request-headers", "content-type")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("DELETE"));
    assert!(methods.contains("PATCH"));
    let allowed_headers = headers["access-control-allow-headers"]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed_headers.contains("content-type"));
    assert!(allowed_headers.contains("authorization"));
}

#[tokio::test]
async fn test_failing_store_still_answers_with_envelopes() {
    let app = api::create_router(AppState::new(Arc::new(MemoryStore::failing())));

    let list = axum::http::Request::builder()
        .method("GET")
        .uri("/questions")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.clone().oneshot(list).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], 404);

    let create = axum::http::Request::builder()
        .method("POST")
        .uri("/questions")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(
            r#"{"question": "q", "answer": "a", "category": 1, "difficulty": 1}"#,
        ))
        .unwrap();
    let response = app.oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["message"], "unprocessable");
}
