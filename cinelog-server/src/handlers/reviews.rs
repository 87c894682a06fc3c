use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use cinelog_core::validate;
use cinelog_model::{MediaRecord, Review, ReviewId};

use crate::app_state::AppState;
use crate::errors::{AppResult, parse_media_id};

pub async fn list_reviews_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Review>>> {
    let id = parse_media_id(&id)?;
    let reviews = state.catalog.reviews(&id).await?;
    Ok(Json(reviews))
}

/// Append a review to the record's list and return the updated record.
pub async fn add_review_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> AppResult<Json<MediaRecord>> {
    let id = parse_media_id(&id)?;
    let draft = validate::review_draft(&payload)?;
    let updated = state.catalog.add_review(&id, draft).await?;
    Ok(Json(updated))
}

/// Remove a review by its `_id`. A review id that matches nothing
/// (including one that does not parse) is a no-op; only an unknown
/// media id is a miss.
pub async fn delete_review_handler(
    State(state): State<AppState>,
    Path((id, review_id)): Path<(String, String)>,
) -> AppResult<Json<MediaRecord>> {
    let id = parse_media_id(&id)?;
    let updated = match review_id.parse::<ReviewId>() {
        Ok(review_id) => {
            state.catalog.delete_review(&id, &review_id).await?
        }
        Err(_) => state.catalog.get(&id).await?,
    };
    Ok(Json(updated))
}
