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

async fn staff_token(app: &axum::Router) -> String {
    let (status, body) = call(
        app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "username": "staff",
            "email": "staff@example.com",
            "password": "secret123"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_job_applies_defaults() {
    let app = app();
    let token = staff_token(&app).await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/jobs",
        Some(&token),
        Some(json!({
            "title": "Cook",
            "location": "Agra",
            "salary": "10k",
            "qualification": "10th",
            "experience": "Fresher",
            "keySkills": "Cooking"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["isActive"], json!(true));
    assert_eq!(body["data"]["type"], json!("Full-time"));
    assert_eq!(body["data"]["category"], json!("General"));
    assert!(body["data"]["postedDate"].is_string());
}

#[tokio::test]
async fn mutating_job_routes_require_a_token() {
    let app = app();

    let (status, _) = call(
        &app,
        "POST",
        "/api/jobs",
        None,
        Some(json!({
            "title": "Cook",
            "location": "Agra",
            "salary": "10k",
            "qualification": "10th",
            "experience": "Fresher",
            "keySkills": "Cooking"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Public browsing stays open.
    let (status, _) = call(&app, "GET", "/api/jobs", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn validation_failure_lists_fields() {
    let app = app();
    let token = staff_token(&app).await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/jobs",
        Some(&token),
        Some(json!({ "title": "ab", "location": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"title"));
    assert!(fields.contains(&"location"));
    assert!(fields.contains(&"salary"));
}

#[tokio::test]
async fn unknown_job_type_is_rejected() {
    let app = app();
    let token = staff_token(&app).await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/jobs",
        Some(&token),
        Some(json!({
            "title": "Cook",
            "location": "Agra",
            "salary": "10k",
            "qualification": "10th",
            "experience": "Fresher",
            "keySkills": "Cooking",
            "type": "Gig"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Invalid job type value"));
}

#[tokio::test]
async fn list_filters_are_case_insensitive_partial_matches() {
    let app = app();
    let token = staff_token(&app).await;

    for (title, location, category) in [
        ("Sales Executive", "Agra", "Sales"),
        ("Telecaller", "Delhi NCR", "Customer Service"),
    ] {
        let (status, _) = call(
            &app,
            "POST",
            "/api/jobs",
            Some(&token),
            Some(json!({
                "title": title,
                "location": location,
                "salary": "10k",
                "qualification": "12th",
                "experience": "Fresher",
                "keySkills": "Communication",
                "category": category
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = call(&app, "GET", "/api/jobs?location=agra", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["data"][0]["title"], json!("Sales Executive"));

    let (status, body) = call(&app, "GET", "/api/jobs?category=customer", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["data"][0]["title"], json!("Telecaller"));
}

#[tokio::test]
async fn soft_deleted_job_disappears_from_reads() {
    let app = app();
    let token = staff_token(&app).await;

    let (_, body) = call(
        &app,
        "POST",
        "/api/jobs",
        Some(&token),
        Some(json!({
            "title": "Mechanic",
            "location": "Noida",
            "salary": "20k",
            "qualification": "ITI",
            "experience": "2 years",
            "keySkills": "Repair"
        })),
    )
    .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = call(&app, "DELETE", &format!("/api/jobs/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Job deleted successfully"));

    let (status, _) = call(&app, "GET", &format!("/api/jobs/{}", id), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call(&app, "GET", "/api/jobs", None, None).await;
    assert_eq!(body["count"], json!(0));

    // A second delete of the same id reports not found.
    let (status, _) = call(&app, "DELETE", &format!("/api/jobs/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_required_fields_and_keeps_optional_ones() {
    let app = app();
    let token = staff_token(&app).await;

    let (_, body) = call(
        &app,
        "POST",
        "/api/jobs",
        Some(&token),
        Some(json!({
            "title": "Welder",
            "location": "Agra",
            "salary": "15k",
            "qualification": "ITI",
            "experience": "1 year",
            "keySkills": "Welding",
            "description": "Day shift welding role",
            "category": "Operations"
        })),
    )
    .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = call(
        &app,
        "PUT",
        &format!("/api/jobs/{}", id),
        Some(&token),
        Some(json!({
            "title": "Senior Welder",
            "location": "Agra",
            "salary": "22k",
            "qualification": "ITI",
            "experience": "3 years",
            "keySkills": "Welding, Supervision"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], json!("Senior Welder"));
    assert_eq!(body["data"]["salary"], json!("22k"));
    // Omitted optional fields keep their stored values.
    assert_eq!(body["data"]["description"], json!("Day shift welding role"));
    assert_eq!(body["data"]["category"], json!("Operations"));
}

#[tokio::test]
async fn update_unknown_job_is_not_found() {
    let app = app();
    let token = staff_token(&app).await;

    let (status, _) = call(
        &app,
        "PUT",
        "/api/jobs/00000000-0000-0000-0000-000000000000",
        Some(&token),
        Some(json!({
            "title": "Ghost",
            "location": "Nowhere",
            "salary": "0",
            "qualification": "None",
            "experience": "None",
            "keySkills": "None"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_matches_skills_and_returns_empty_for_unknown_keyword() {
    let app = app();
    let token = staff_token(&app).await;

    call(
        &app,
        "POST",
        "/api/jobs",
        Some(&token),
        Some(json!({
            "title": "Chef",
            "location": "Agra",
            "salary": "18k",
            "qualification": "Hotel Management",
            "experience": "2 years",
            "keySkills": "Cooking, Baking"
        })),
    )
    .await;

    let (status, body) = call(&app, "GET", "/api/jobs/search/cooking", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["data"][0]["title"], json!("Chef"));

    // No match is an empty 200, never a 404.
    let (status, body) = call(&app, "GET", "/api/jobs/search/xyz123nonexistent", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(0));
    assert_eq!(body["data"], json!([]));

    let (status, body) = call(&app, "GET", "/api/jobs/search/%20%20", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Search keyword is required"));
}
