pub mod application;
pub mod auth;
pub mod contact;
pub mod health;
pub mod job;

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
    routing::{get, patch, post},
    Router,
};
use serde_json::json;

use crate::AppState;

/// Full route table. Staff/management routes authenticate through the
/// `AuthUser` extractor inside their handlers; public browsing and the two
/// submission endpoints stay open.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/api/health", get(health::health))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/signin", post(auth::signin))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/jobs", get(job::get_all_jobs).post(job::create_job))
        .route("/api/jobs/search/:keyword", get(job::search_jobs))
        .route(
            "/api/jobs/:id",
            get(job::get_job_by_id)
                .put(job::update_job)
                .delete(job::delete_job),
        )
        .route(
            "/api/applications",
            get(application::get_all_applications).post(application::create_application),
        )
        .route(
            "/api/applications/job/:job_title",
            get(application::get_applications_by_job),
        )
        .route(
            "/api/applications/:id",
            get(application::get_application_by_id).delete(application::delete_application),
        )
        .route(
            "/api/applications/:id/status",
            patch(application::update_application_status),
        )
        .route(
            "/api/contact",
            get(contact::get_all_contacts).post(contact::create_contact),
        )
        .route(
            "/api/contact/:id",
            get(contact::get_contact_by_id).delete(contact::delete_contact),
        )
        .route("/api/contact/:id/status", patch(contact::update_contact_status))
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found",
            "path": uri.path(),
        })),
    )
}
