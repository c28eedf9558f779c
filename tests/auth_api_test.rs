use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use jobportal_backend::{routes, AppState};

fn app() -> axum::Router {
    std::env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    std::env::set_var("DATABASE_URL", "postgres://localhost/unused");
    std::env::set_var("JWT_SECRET", "test_secret_key");
    let _ = jobportal_backend::config::init_config();
    routes::api_router().with_state(AppState::in_memory())
}

async fn call(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn signup_signin_me_flow() {
    let app = app();

    let (status, body) = call(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "username": "asha",
            "email": "Asha@Example.com",
            "password": "secret123",
            "fullName": "Asha Verma"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["user"]["email"], json!("asha@example.com"));
    assert_eq!(body["data"]["user"]["role"], json!("user"));
    // Password never appears in a response.
    assert!(body["data"]["user"].get("password").is_none());
    assert!(body["data"]["user"].get("passwordHash").is_none());
    assert!(body["data"]["token"].is_string());

    let (status, body) = call(
        &app,
        "POST",
        "/api/auth/signin",
        None,
        Some(json!({ "username": "asha", "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let (status, body) = call(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], json!("asha"));
    assert_eq!(body["data"]["fullName"], json!("Asha Verma"));
    // lastLogin was stamped by the successful signin.
    assert!(body["data"]["lastLogin"].is_string());

    let (status, body) = call(&app, "POST", "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Logged out successfully"));
}

#[tokio::test]
async fn signin_by_email_fallback() {
    let app = app();
    call(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "username": "ravi",
            "email": "ravi@example.com",
            "password": "secret123"
        })),
    )
    .await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/auth/signin",
        None,
        Some(json!({ "username": "ravi@example.com", "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["username"], json!("ravi"));
}

#[tokio::test]
async fn wrong_password_and_unknown_user_are_indistinguishable() {
    let app = app();
    call(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "username": "meena",
            "email": "meena@example.com",
            "password": "secret123"
        })),
    )
    .await;

    let (wrong_status, wrong_body) = call(
        &app,
        "POST",
        "/api/auth/signin",
        None,
        Some(json!({ "username": "meena", "password": "not-the-password" })),
    )
    .await;
    let (unknown_status, unknown_body) = call(
        &app,
        "POST",
        "/api/auth/signin",
        None,
        Some(json!({ "username": "nobody", "password": "whatever" })),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn duplicate_email_is_rejected_case_insensitively() {
    let app = app();
    let (status, _) = call(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "username": "first",
            "email": "same@example.com",
            "password": "secret123"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "username": "second",
            "email": "SAME@Example.com",
            "password": "secret123"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Email already registered"));
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let app = app();
    call(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "username": "taken",
            "email": "one@example.com",
            "password": "secret123"
        })),
    )
    .await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "username": "taken",
            "email": "two@example.com",
            "password": "secret123"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Username already taken"));
}

#[tokio::test]
async fn missing_credentials_are_bad_requests() {
    let app = app();

    let (status, body) = call(&app, "POST", "/api/auth/signup", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!("Please provide username, email, and password")
    );

    let (status, body) = call(
        &app,
        "POST",
        "/api/auth/signin",
        None,
        Some(json!({ "username": "someone" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Please provide username and password"));
}

#[tokio::test]
async fn protected_routes_reject_missing_and_bad_tokens() {
    let app = app();

    let (status, _) = call(&app, "GET", "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(&app, "GET", "/api/auth/me", Some("garbage.token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_and_fallback_routes() {
    let app = app();

    let (status, body) = call(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body["timestamp"].is_string());

    let (status, body) = call(&app, "GET", "/api/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Route not found"));
}
