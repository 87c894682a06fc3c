use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use cinelog_core::{CatalogError, FieldError};
use cinelog_model::MediaId;

pub type AppResult<T> = Result<T, AppError>;

/// The centralized responder: every failure a handler surfaces maps
/// here to a status code and JSON body. Stack traces never reach the
/// caller.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    /// Field-level breakdown carried by 400 validation responses.
    pub field_errors: Vec<FieldError>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation failed".to_string(),
            field_errors: errors,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut error = json!({
            "message": self.message,
            "status": self.status.as_u16(),
        });
        if !self.field_errors.is_empty() {
            error["errors"] = json!(self.field_errors);
        }

        (self.status, Json(json!({ "error": error }))).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(msg) => Self::not_found(msg),
            CatalogError::Validation(errors) => Self::validation(errors),
            CatalogError::Io(_)
            | CatalogError::Serialization(_)
            | CatalogError::Upload(_)
            | CatalogError::Export(_) => Self::internal(err.to_string()),
        }
    }
}

/// Identifiers are opaque, so a path segment that does not even parse
/// can match no record and reads as a miss rather than a bad request.
pub fn parse_media_id(raw: &str) -> AppResult<MediaId> {
    raw.parse()
        .map_err(|_| AppError::not_found(format!("media {raw} not found")))
}
