//! Integration tests for registration, login and token handling.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_register_and_me() {
    let app = TestApp::new().await;
    let (token, id) = app.register("Alice").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["email"], "alice@example.com");
    assert_eq!(response.body["role"], "user");
    assert!(response.body.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.register("Alice").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "name": "Other", "email": "ALICE@example.com", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[tokio::test]
async fn test_register_rejects_invalid_fields() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "name": "", "email": "not-an-email", "password": "x" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.message().contains("name"));
    assert!(response.message().contains("email"));
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;
    app.register("Bob").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "bob@example.com", "password": "wrongpassword" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid email or password");
}

#[tokio::test]
async fn test_missing_and_garbage_tokens() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");

    let response = app
        .request("GET", "/api/auth/me", None, Some("not.a.jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_require_admin() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Carol").await;

    let response = app
        .request("GET", "/api/admin/bookings", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.message(), "Admin access required");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["backend"], "memory");
}
