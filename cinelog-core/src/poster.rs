//! Poster storage adapters.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use cinelog_model::MediaId;

use crate::error::{CatalogError, Result};
use crate::ports::PosterStore;

/// Poster file name: the record id plus the upload's original
/// extension, so re-uploads overwrite rather than accumulate.
fn poster_file_name(id: &MediaId, original_filename: &str) -> String {
    match Path::new(original_filename)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

fn join_url(base: &Url, segments: &str) -> String {
    format!("{}/{}", base.as_str().trim_end_matches('/'), segments)
}

/// Writes poster bytes to a local image directory served statically
/// under `/public/img`.
#[derive(Debug, Clone)]
pub struct LocalPosterStore {
    image_dir: PathBuf,
    public_base: Url,
}

impl LocalPosterStore {
    pub fn new(image_dir: impl Into<PathBuf>, public_base: Url) -> Self {
        Self {
            image_dir: image_dir.into(),
            public_base,
        }
    }

    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.image_dir).await?;
        Ok(())
    }
}

#[async_trait]
impl PosterStore for LocalPosterStore {
    async fn store(
        &self,
        id: &MediaId,
        bytes: Vec<u8>,
        original_filename: &str,
    ) -> Result<String> {
        let file_name = poster_file_name(id, original_filename);
        let path = self.image_dir.join(&file_name);
        tokio::fs::write(&path, bytes).await?;
        info!(path = %path.display(), "stored poster on local disk");
        Ok(join_url(
            &self.public_base,
            &format!("public/img/{file_name}"),
        ))
    }
}

/// Delegates poster storage to a remote object-store endpoint via
/// HTTP PUT; the returned URL points at the provider, not this server.
#[derive(Debug, Clone)]
pub struct RemotePosterStore {
    client: reqwest::Client,
    upload_url: Url,
    public_base: Url,
}

impl RemotePosterStore {
    pub fn new(upload_url: Url, public_base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url,
            public_base,
        }
    }
}

#[async_trait]
impl PosterStore for RemotePosterStore {
    async fn store(
        &self,
        id: &MediaId,
        bytes: Vec<u8>,
        original_filename: &str,
    ) -> Result<String> {
        let file_name = poster_file_name(id, original_filename);
        let target = join_url(&self.upload_url, &file_name);
        debug!(target = %target, "uploading poster to remote storage");

        self.client
            .put(&target)
            .body(bytes)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| {
                CatalogError::Upload(format!(
                    "remote poster upload failed: {err}"
                ))
            })?;

        Ok(join_url(&self.public_base, &file_name))
    }
}
