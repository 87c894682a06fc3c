use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use cinelog_core::validate;
use cinelog_model::MediaRecord;

use crate::app_state::AppState;
use crate::errors::{AppResult, parse_media_id};

/// List the whole catalog, stored order.
pub async fn list_media_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MediaRecord>>> {
    let media = state.catalog.list_all().await?;
    Ok(Json(media))
}

/// Case-insensitive title substring search.
pub async fn search_media_handler(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> AppResult<Json<Vec<MediaRecord>>> {
    let media = state.catalog.search(&query).await?;
    Ok(Json(media))
}

pub async fn get_media_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MediaRecord>> {
    let id = parse_media_id(&id)?;
    let media = state.catalog.get(&id).await?;
    Ok(Json(media))
}

/// Create a record from a payload carrying `Title`, `Year` and `Type`.
/// Invalid payloads get a structured field-error list and nothing is
/// persisted.
pub async fn create_media_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<MediaRecord>> {
    let draft = validate::media_draft(&payload)?;
    let created = state.catalog.create(draft).await?;
    Ok(Json(created))
}

/// Shallow-merge the supplied fields over an existing record.
pub async fn update_media_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> AppResult<Json<MediaRecord>> {
    let id = parse_media_id(&id)?;
    let patch = validate::media_patch(&payload)?;
    let updated = state.catalog.update(&id, patch).await?;
    Ok(Json(updated))
}

pub async fn delete_media_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_media_id(&id)?;
    state.catalog.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Render the record as a one-page PDF and hand it over as an
/// attachment.
pub async fn export_pdf_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_media_id(&id)?;
    let media = state.catalog.get(&id).await?;
    let bytes = state.pdf.render(&media)?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"media.pdf\"",
        ),
    ];
    Ok((headers, bytes).into_response())
}
