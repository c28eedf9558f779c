use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{field} already exists")]
    Conflict { field: String },

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::Validation(errors) => {
                let details: Vec<_> = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            let message = e
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{} is invalid", field));
                            json!({ "field": field, "message": message })
                        })
                    })
                    .collect();
                let body = Json(json!({ "success": false, "errors": details }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            Error::BadRequest(msg) => envelope(StatusCode::BAD_REQUEST, msg),
            Error::Unauthorized(msg) => envelope(StatusCode::UNAUTHORIZED, msg),
            Error::NotFound(msg) => envelope(StatusCode::NOT_FOUND, msg),
            Error::Conflict { field } => envelope(
                StatusCode::BAD_REQUEST,
                format!("{} already exists", capitalize(&field)),
            ),
            Error::Json(err) => envelope(StatusCode::BAD_REQUEST, err.to_string()),
            other => {
                tracing::error!(error = ?other, "request failed");
                envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        }
    }
}

fn envelope(status: StatusCode, message: String) -> axum::response::Response {
    let body = Json(json!({ "success": false, "message": message }));
    (status, body).into_response()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}
