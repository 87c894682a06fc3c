use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use tracing::warn;

use cinelog_model::MediaRecord;

use crate::app_state::AppState;
use crate::errors::{AppError, AppResult, parse_media_id};

const POSTER_FIELD: &str = "poster";

/// Pull the `poster` file out of the multipart body.
async fn read_poster_field(
    multipart: &mut Multipart,
) -> AppResult<(Vec<u8>, String)> {
    while let Some(field) = multipart.next_field().await.map_err(|err| {
        AppError::bad_request(format!("malformed multipart body: {err}"))
    })? {
        if field.name() != Some(POSTER_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .unwrap_or(POSTER_FIELD)
            .to_string();
        let bytes = field.bytes().await.map_err(|err| {
            AppError::bad_request(format!(
                "failed to read poster upload: {err}"
            ))
        })?;
        return Ok((bytes.to_vec(), filename));
    }
    Err(AppError::bad_request(format!(
        "multipart field '{POSTER_FIELD}' is required"
    )))
}

/// Attach a poster stored on local disk; the record ends up pointing
/// at this server's `/public/img` tree.
pub async fn upload_poster_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<MediaRecord>> {
    let id = parse_media_id(&id)?;
    // Resolve the record before touching the disk.
    state.catalog.get(&id).await?;

    let (bytes, filename) = read_poster_field(&mut multipart).await?;
    let url = state.local_posters.store(&id, bytes, &filename).await?;
    let updated = state.catalog.set_poster(&id, url).await?;
    Ok(Json(updated))
}

/// Attach a poster held by the remote storage provider.
pub async fn remote_poster_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<String> {
    let id = parse_media_id(&id)?;
    let Some(remote) = state.remote_posters.as_ref() else {
        warn!("remote poster route hit without a configured provider");
        return Err(AppError::internal(
            "remote poster storage is not configured",
        ));
    };
    state.catalog.get(&id).await?;

    let (bytes, filename) = read_poster_field(&mut multipart).await?;
    let url = remote.store(&id, bytes, &filename).await?;
    state.catalog.set_poster(&id, url).await?;
    Ok("new poster added".to_string())
}
