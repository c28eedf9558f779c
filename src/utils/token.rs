use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Session tokens are valid for seven days from issuance.
const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

/// Issue a signed, stateless session token for the given user.
pub fn issue_token(user_id: Uuid, role: &str, secret: &str) -> Result<String> {
    let exp = Utc::now() + Duration::days(TOKEN_TTL_DAYS);
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp: exp.timestamp() as usize,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to sign token: {}", e)))
}

/// Verify a token's signature and expiry, returning its claims.
/// Expired, malformed, and badly-signed tokens all fail the same way.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|_| Error::Unauthorized("Invalid or expired token".to_string()))
}
