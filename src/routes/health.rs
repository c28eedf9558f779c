use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "success": true,
        "message": "Job portal API is running",
        "timestamp": Utc::now().to_rfc3339(),
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    let body = json!({
        "success": true,
        "message": "Welcome to the Job Portal API",
        "endpoints": {
            "auth": "/api/auth",
            "jobs": "/api/jobs",
            "applications": "/api/applications",
            "contact": "/api/contact",
            "health": "/api/health",
        },
    });
    (StatusCode::OK, Json(body))
}
