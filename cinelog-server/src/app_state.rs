use std::{fmt, sync::Arc};

use cinelog_core::{
    Catalog, JsonStore, LocalPosterStore, PdfRenderer, PosterStore,
    RemotePosterStore, SheetRenderer,
};

use crate::config::Config;

/// Shared per-request state. Everything here is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<Config>,
    pub local_posters: Arc<dyn PosterStore>,
    /// Absent unless a remote provider is configured; the remote
    /// poster route reports the gap instead of falling back silently.
    pub remote_posters: Option<Arc<dyn PosterStore>>,
    pub pdf: Arc<dyn PdfRenderer>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let catalog =
            Arc::new(Catalog::new(JsonStore::new(&config.data_file)));
        let local_posters: Arc<dyn PosterStore> = Arc::new(LocalPosterStore::new(
            &config.image_dir,
            config.public_base_url.clone(),
        ));
        let remote_posters: Option<Arc<dyn PosterStore>> = match (
            config.poster_upload_url.clone(),
            config.poster_public_url.clone(),
        ) {
            (Some(upload), Some(public)) => {
                Some(Arc::new(RemotePosterStore::new(upload, public)))
            }
            _ => None,
        };

        Self {
            catalog,
            config: Arc::new(config),
            local_posters,
            remote_posters,
            pdf: Arc::new(SheetRenderer::new()),
        }
    }
}
