use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::MediaId;
use crate::review::Review;

/// One catalog entry.
///
/// `Title`, `Year` and `Type` are caller-supplied; `id` and `createdAt`
/// are stamped by the server at creation and never change. `Poster` is
/// only ever set through the poster-attach operations. The `reviews`
/// field is absent from the serialized form until the first review is
/// added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: MediaId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(rename = "Poster", skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
}

impl MediaRecord {
    /// Build a fresh record with server-assigned `id` and `createdAt`.
    pub fn new(title: String, year: String, media_type: String) -> Self {
        Self {
            id: MediaId::generate(),
            title,
            year,
            media_type,
            poster: None,
            created_at: Utc::now(),
            reviews: Vec::new(),
        }
    }
}
