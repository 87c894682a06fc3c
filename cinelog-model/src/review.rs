use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::ids::{MediaId, ReviewId};

/// A review embedded in its parent record's `reviews` list.
///
/// Reviews are created and deleted, never updated in place.
/// `elementId` is a redundant back-reference to the owning record;
/// lookups always go through the parent's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: ReviewId,
    #[serde(rename = "elementId")]
    pub element_id: MediaId,
    pub comment: String,
    /// Numeric rating. Any numeric scalar is accepted; no range check.
    pub rate: Number,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(element_id: MediaId, comment: String, rate: Number) -> Self {
        Self {
            id: ReviewId::generate(),
            element_id,
            comment,
            rate,
            created_at: Utc::now(),
        }
    }
}
