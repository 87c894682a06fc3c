use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One field-level validation failure, reported verbatim in 400 bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("PDF export error: {0}")]
    Export(String),
}

impl CatalogError {
    pub fn media_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("media {id} not found"))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
