//! Handler tests over the in-memory store: status codes and response shapes
//! for both auth endpoints, without a running database.

use super::{login, register};
use crate::account::{service::AccountService, store::testing::MemoryStore};
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    routing::post,
    Extension, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let service = AccountService::new(MemoryStore::default());

    Router::new()
        .route("/auth/register", post(register::<MemoryStore>))
        .route("/auth/login", post(login::<MemoryStore>))
        .layer(Extension(service))
}

async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();

    (status, value)
}

fn alice() -> Value {
    json!({
        "email": "a@x.com",
        "password": "pw123",
        "type": "worker",
        "name": "Alice",
    })
}

#[tokio::test]
async fn test_register_success_returns_user() {
    let app = app();

    let (status, body) = post_json(&app, "/auth/register", &alice()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["id"], json!(1));
    assert_eq!(body["user"]["email"], json!("a@x.com"));
    assert_eq!(body["user"]["name"], json!("Alice"));
    assert_eq!(body["user"]["type"], json!("worker"));

    // No secret material in the payload
    let raw = body.to_string();
    assert!(!raw.contains("password"));
    assert!(!raw.contains("argon2"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = app();

    post_json(&app, "/auth/register", &alice()).await;

    let bob = json!({
        "email": "a@x.com",
        "password": "other",
        "type": "employer",
        "name": "Bob",
    });
    let (status, body) = post_json(&app, "/auth/register", &bob).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Email already registered"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = app();

    let request = json!({
        "email": "not-an-email",
        "password": "pw123",
        "type": "worker",
        "name": "Alice",
    });
    let (status, body) = post_json(&app, "/auth/register", &request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Invalid email"));
}

#[tokio::test]
async fn test_register_missing_payload() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/register")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], json!("Missing payload"));
}

#[tokio::test]
async fn test_login_round_trip() {
    let app = app();

    post_json(&app, "/auth/register", &alice()).await;

    let credentials = json!({"email": "a@x.com", "password": "pw123"});
    let (status, body) = post_json(&app, "/auth/login", &credentials).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["id"], json!(1));
    assert_eq!(body["user"]["type"], json!("worker"));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = app();

    post_json(&app, "/auth/register", &alice()).await;

    let wrong_password = json!({"email": "a@x.com", "password": "wrong"});
    let unknown_email = json!({"email": "nobody@x.com", "password": "pw123"});

    let (wrong_status, wrong_body) = post_json(&app, "/auth/login", &wrong_password).await;
    let (unknown_status, unknown_body) = post_json(&app, "/auth/login", &unknown_email).await;

    assert_eq!(wrong_status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["message"], json!("Invalid email or password"));
}

#[tokio::test]
async fn test_login_missing_payload() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_valid_email() {
    assert!(super::valid_email("a@x.com"));
    assert!(super::valid_email("first.last@sub.domain.org"));

    assert!(!super::valid_email("not-an-email"));
    assert!(!super::valid_email("a@x"));
    assert!(!super::valid_email("a b@x.com"));
    assert!(!super::valid_email("@x.com"));
}
