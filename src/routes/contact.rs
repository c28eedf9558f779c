use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::contact_dto::{CreateContactPayload, UpdateStatusPayload},
    error::{Error, Result},
    middleware::auth::AuthUser,
    models::contact::CONTACT_STATUSES,
    AppState,
};

#[axum::debug_handler]
pub async fn get_all_contacts(
    _user: AuthUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let contacts = state.contacts.list().await?;
    Ok(Json(json!({
        "success": true,
        "count": contacts.len(),
        "data": contacts,
    })))
}

#[axum::debug_handler]
pub async fn get_contact_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let contact = state
        .contacts
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Contact message not found".to_string()))?;
    Ok(Json(json!({ "success": true, "data": contact })))
}

#[axum::debug_handler]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactPayload>,
) -> Result<impl IntoResponse> {
    let payload = payload.normalized();
    payload.validate()?;

    let contact = state.contacts.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Contact message sent successfully. We will get back to you soon!",
            "data": contact,
        })),
    ))
}

#[axum::debug_handler]
pub async fn update_contact_status(
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
    if !CONTACT_STATUSES.contains(&status.as_str()) {
        return Err(Error::BadRequest("Invalid status value".to_string()));
    }

    let contact = state
        .contacts
        .update_status(id, &status)
        .await?
        .ok_or_else(|| Error::NotFound("Contact message not found".to_string()))?;
    Ok(Json(json!({
        "success": true,
        "message": "Contact status updated successfully",
        "data": contact,
    })))
}

#[axum::debug_handler]
pub async fn delete_contact(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let deleted = state.contacts.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Contact message not found".to_string()));
    }
    Ok(Json(json!({
        "success": true,
        "message": "Contact message deleted successfully",
    })))
}
