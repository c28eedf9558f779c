use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::config::get_config;
use crate::error::Error;
use crate::utils::token::verify_token;

/// Identity attached to authenticated requests. Handlers on protected routes
/// take this as an extractor argument; missing, malformed, expired and
/// badly-signed tokens are all rejected with the same generic 401.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or_else(unauthorized)?;
        let value = header.to_str().map_err(|_| unauthorized())?;
        let token = value.strip_prefix("Bearer ").ok_or_else(unauthorized)?;

        let claims =
            verify_token(token, &get_config().jwt_secret).map_err(|_| unauthorized())?;
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| unauthorized())?;

        Ok(AuthUser {
            user_id,
            role: claims.role,
        })
    }
}

fn unauthorized() -> Error {
    Error::Unauthorized("Not authorized to access this route".to_string())
}
