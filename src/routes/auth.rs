use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::{
    config::get_config,
    dto::auth_dto::{ProfileView, SigninPayload, SignupPayload, UserView},
    error::{Error, Result},
    middleware::auth::AuthUser,
    repositories::NewUser,
    utils::{
        crypto::{hash_password, verify_password},
        token::issue_token,
    },
    AppState,
};

#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupPayload>,
) -> Result<impl IntoResponse> {
    let payload = payload.normalized();
    if payload.username.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        return Err(Error::BadRequest(
            "Please provide username, email, and password".to_string(),
        ));
    }
    payload.validate()?;

    // Fast-path checks for a friendly message; the unique indexes remain the
    // authority and surface as a Conflict if two signups race.
    if state.users.find_by_email(&payload.email).await?.is_some() {
        return Err(Error::BadRequest("Email already registered".to_string()));
    }
    if state
        .users
        .find_by_username(&payload.username)
        .await?
        .is_some()
    {
        return Err(Error::BadRequest("Username already taken".to_string()));
    }

    let password_hash = hash_password(&payload.password)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?;

    let user = state
        .users
        .create(NewUser {
            username: payload.username,
            email: payload.email,
            password_hash,
            full_name: payload.full_name.unwrap_or_default(),
            phone: payload.phone.unwrap_or_default(),
        })
        .await?;

    let token = issue_token(user.id, &user.role, &get_config().jwt_secret)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Registration successful! Welcome aboard",
            "data": { "token": token, "user": UserView::from(&user) },
        })),
    ))
}

#[axum::debug_handler]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninPayload>,
) -> Result<impl IntoResponse> {
    let identity = payload.username.trim();
    if identity.is_empty() || payload.password.is_empty() {
        return Err(Error::BadRequest(
            "Please provide username and password".to_string(),
        ));
    }

    // Username first, email as fallback. Unknown identity and wrong password
    // produce the identical response so accounts cannot be enumerated.
    let user = match state.users.find_by_username(identity).await? {
        Some(user) => Some(user),
        None => state.users.find_by_email(identity).await?,
    };
    let Some(user) = user else {
        return Err(invalid_credentials());
    };

    let password_ok = verify_password(&payload.password, &user.password_hash)
        .map_err(|e| Error::Internal(format!("Failed to verify password: {}", e)))?;
    if !password_ok {
        return Err(invalid_credentials());
    }

    state.users.update_last_login(user.id).await?;
    let token = issue_token(user.id, &user.role, &get_config().jwt_secret)?;

    Ok(Json(json!({
        "success": true,
        "message": "Login successful! Welcome back",
        "data": { "token": token, "user": UserView::from(&user) },
    })))
}

#[axum::debug_handler]
pub async fn me(user: AuthUser, State(state): State<AppState>) -> Result<impl IntoResponse> {
    let profile = state
        .users
        .find_by_id(user.user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "data": ProfileView::from(&profile),
    })))
}

/// Tokens are stateless, so logout is a client-side discard; the endpoint
/// exists so clients have a uniform call to make.
#[axum::debug_handler]
pub async fn logout(_user: AuthUser) -> Result<impl IntoResponse> {
    Ok(Json(json!({
        "success": true,
        "message": "Logged out successfully",
    })))
}

fn invalid_credentials() -> Error {
    Error::Unauthorized("Invalid credentials".to_string())
}
