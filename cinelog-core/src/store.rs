use std::path::{Path, PathBuf};

use tracing::{debug, info};

use cinelog_model::MediaRecord;

use crate::error::Result;

/// Persistence over the single backing JSON document.
///
/// There is no index and no partial write: `load` reads the whole
/// collection, `save` replaces it. Callers own the critical section
/// around load–mutate–save; see [`Catalog`](crate::Catalog).
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seed an empty collection if the document does not exist yet, so
    /// a fresh deployment starts serving instead of erroring on every
    /// read.
    pub async fn ensure_exists(&self) -> Result<()> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, b"[]").await?;
        info!(path = %self.path.display(), "seeded empty catalog document");
        Ok(())
    }

    /// Read and parse the whole collection. An unreadable or malformed
    /// document is a hard error; there is no recovery path short of
    /// fixing the file.
    pub async fn load(&self) -> Result<Vec<MediaRecord>> {
        let raw = tokio::fs::read(&self.path).await?;
        let records = serde_json::from_slice(&raw)?;
        Ok(records)
    }

    /// Serialize and replace the whole collection.
    pub async fn save(&self, records: &[MediaRecord]) -> Result<()> {
        let raw = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, raw).await?;
        debug!(
            path = %self.path.display(),
            count = records.len(),
            "persisted catalog document"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("media.json"))
    }

    #[tokio::test]
    async fn ensure_exists_seeds_empty_collection() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.ensure_exists().await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ensure_exists_leaves_existing_document_alone() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let records = vec![MediaRecord::new(
            "Heat".into(),
            "1995".into(),
            "movie".into(),
        )];
        store.ensure_exists().await.unwrap();
        store.save(&records).await.unwrap();
        store.ensure_exists().await.unwrap();
        assert_eq!(store.load().await.unwrap(), records);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let records = vec![
            MediaRecord::new("Heat".into(), "1995".into(), "movie".into()),
            MediaRecord::new("Dark".into(), "2017".into(), "series".into()),
        ];
        store.save(&records).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, records);
        // save(load()) is idempotent
        store.save(&loaded).await.unwrap();
        assert_eq!(store.load().await.unwrap(), records);
    }

    #[tokio::test]
    async fn missing_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn malformed_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio::fs::write(store.path(), b"{ not json").await.unwrap();
        assert!(store.load().await.is_err());
    }
}
