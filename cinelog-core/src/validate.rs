//! Presence-only payload validation.
//!
//! Checks mirror the write contracts: creation requires `Title`,
//! `Year` and `Type`; a review requires `comment` and a numeric
//! `rate`. Failures collect into a structured field-error list rather
//! than failing on the first problem.

use serde_json::{Number, Value};

use crate::error::{CatalogError, FieldError, Result};

/// Validated payload for media creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDraft {
    pub title: String,
    pub year: String,
    pub media_type: String,
}

/// Validated partial field set for media update. `id`, `createdAt` and
/// `reviews` are deliberately not expressible here, which protects
/// them from overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaPatch {
    pub title: Option<String>,
    pub year: Option<String>,
    pub media_type: Option<String>,
    pub poster: Option<String>,
}

impl MediaPatch {
    pub fn with_poster(url: impl Into<String>) -> Self {
        Self {
            poster: Some(url.into()),
            ..Self::default()
        }
    }
}

/// Validated payload for review creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub comment: String,
    pub rate: Number,
}

fn required_string(
    payload: &Value,
    field: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match payload.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => {
            Some(s.clone())
        }
        _ => {
            errors.push(FieldError::new(field, message));
            None
        }
    }
}

fn optional_string(
    payload: &Value,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match payload.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(
                field,
                format!("{field} must be a string"),
            ));
            None
        }
    }
}

/// Validate a creation payload. Presence-only: the three fields must
/// exist as non-empty strings, nothing more is checked.
pub fn media_draft(payload: &Value) -> Result<MediaDraft> {
    let mut errors = Vec::new();
    let title =
        required_string(payload, "Title", "Title is required", &mut errors);
    let year =
        required_string(payload, "Year", "Year is required", &mut errors);
    let media_type =
        required_string(payload, "Type", "Type is required", &mut errors);

    match (title, year, media_type) {
        (Some(title), Some(year), Some(media_type)) => Ok(MediaDraft {
            title,
            year,
            media_type,
        }),
        _ => Err(CatalogError::Validation(errors)),
    }
}

/// Validate an update payload. Every field is optional; supplied
/// fields must be strings. Unknown fields are ignored.
pub fn media_patch(payload: &Value) -> Result<MediaPatch> {
    let mut errors = Vec::new();
    let patch = MediaPatch {
        title: optional_string(payload, "Title", &mut errors),
        year: optional_string(payload, "Year", &mut errors),
        media_type: optional_string(payload, "Type", &mut errors),
        poster: optional_string(payload, "Poster", &mut errors),
    };
    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(CatalogError::Validation(errors))
    }
}

/// Validate a review payload: `comment` must be a non-empty string,
/// `rate` a numeric scalar. No range check on the rating.
pub fn review_draft(payload: &Value) -> Result<ReviewDraft> {
    let mut errors = Vec::new();
    let comment = required_string(
        payload,
        "comment",
        "Please enter valid comment text",
        &mut errors,
    );
    let rate = match payload.get("rate") {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => {
            errors
                .push(FieldError::new("rate", "Please enter valid rating"));
            None
        }
    };

    match (comment, rate) {
        (Some(comment), Some(rate)) => Ok(ReviewDraft { comment, rate }),
        _ => Err(CatalogError::Validation(errors)),
    }
}
