use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::application_dto::{ApplicationListQuery, CreateApplicationPayload, UpdateStatusPayload},
    error::{Error, Result},
    middleware::auth::AuthUser,
    models::application::APPLICATION_STATUSES,
    AppState,
};

#[axum::debug_handler]
pub async fn get_all_applications(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ApplicationListQuery>,
) -> Result<impl IntoResponse> {
    let applications = state.applications.list(query).await?;
    Ok(Json(json!({
        "success": true,
        "count": applications.len(),
        "data": applications,
    })))
}

#[axum::debug_handler]
pub async fn get_application_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let application = state
        .applications
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
    Ok(Json(json!({ "success": true, "data": application })))
}

#[axum::debug_handler]
pub async fn create_application(
    State(state): State<AppState>,
    Json(payload): Json<CreateApplicationPayload>,
) -> Result<impl IntoResponse> {
    let payload = payload.normalized();
    payload.validate()?;

    let application = state.applications.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Application submitted successfully! We will review your application and contact you soon.",
            "data": application,
        })),
    ))
}

#[axum::debug_handler]
pub async fn update_application_status(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse> {
    let status = payload
        .status
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::BadRequest("Status is required".to_string()))?;
    if !APPLICATION_STATUSES.contains(&status.as_str()) {
        return Err(Error::BadRequest("Invalid status value".to_string()));
    }

    let application = state
        .applications
        .update_status(id, &status)
        .await?
        .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
    Ok(Json(json!({
        "success": true,
        "message": "Application status updated successfully",
        "data": application,
    })))
}

#[axum::debug_handler]
pub async fn delete_application(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let deleted = state.applications.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Application not found".to_string()));
    }
    Ok(Json(json!({
        "success": true,
        "message": "Application deleted successfully",
    })))
}

#[axum::debug_handler]
pub async fn get_applications_by_job(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(job_title): Path<String>,
) -> Result<impl IntoResponse> {
    let applications = state.applications.list_by_job_title(&job_title).await?;
    Ok(Json(json!({
        "success": true,
        "count": applications.len(),
        "data": applications,
    })))
}
