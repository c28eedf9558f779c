use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_dto::{JobListQuery, JobPayload},
    error::{Error, Result},
    middleware::auth::AuthUser,
    models::job::JOB_TYPES,
    AppState,
};

#[axum::debug_handler]
pub async fn get_all_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let jobs = state.jobs.list(query).await?;
    Ok(Json(json!({
        "success": true,
        "count": jobs.len(),
        "data": jobs,
    })))
}

#[axum::debug_handler]
pub async fn get_job_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state
        .jobs
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;
    Ok(Json(json!({ "success": true, "data": job })))
}

#[axum::debug_handler]
pub async fn create_job(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<JobPayload>,
) -> Result<impl IntoResponse> {
    let payload = payload.normalized();
    payload.validate()?;
    validate_job_type(&payload)?;

    let job = state.jobs.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Job created successfully",
            "data": job,
        })),
    ))
}

#[axum::debug_handler]
pub async fn update_job(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<JobPayload>,
) -> Result<impl IntoResponse> {
    let payload = payload.normalized();
    payload.validate()?;
    validate_job_type(&payload)?;

    let job = state
        .jobs
        .update(id, payload)
        .await?
        .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;
    Ok(Json(json!({
        "success": true,
        "message": "Job updated successfully",
        "data": job,
    })))
}

#[axum::debug_handler]
pub async fn delete_job(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let deleted = state.jobs.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Job not found".to_string()));
    }
    Ok(Json(json!({
        "success": true,
        "message": "Job deleted successfully",
    })))
}

#[axum::debug_handler]
pub async fn search_jobs(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<impl IntoResponse> {
    let keyword = keyword.trim().to_string();
    if keyword.is_empty() {
        return Err(Error::BadRequest("Search keyword is required".to_string()));
    }

    let jobs = state.jobs.search(&keyword).await?;
    Ok(Json(json!({
        "success": true,
        "count": jobs.len(),
        "data": jobs,
    })))
}

fn validate_job_type(payload: &JobPayload) -> Result<()> {
    if let Some(job_type) = payload.job_type.as_deref() {
        if !JOB_TYPES.contains(&job_type) {
            return Err(Error::BadRequest("Invalid job type value".to_string()));
        }
    }
    Ok(())
}
