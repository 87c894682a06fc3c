use tokio::sync::Mutex;
use tracing::info;

use cinelog_model::{MediaId, MediaRecord, Review, ReviewId};

use crate::error::{CatalogError, Result};
use crate::store::JsonStore;
use crate::validate::{MediaDraft, MediaPatch, ReviewDraft};

/// The catalog service: every operation is one load–mutate–save pass
/// over the backing document.
///
/// Mutating passes are serialized behind a process-wide mutex so two
/// in-flight writes cannot clobber each other's merge. Reads take an
/// unlocked snapshot. Across processes the document is still
/// last-write-wins; single-writer deployment is the safe assumption.
#[derive(Debug)]
pub struct Catalog {
    store: JsonStore,
    write_lock: Mutex<()>,
}

impl Catalog {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Full collection, stored order, unfiltered.
    pub async fn list_all(&self) -> Result<Vec<MediaRecord>> {
        self.store.load().await
    }

    /// Case-insensitive substring match against `Title` only. No match
    /// means an empty result, never an error.
    pub async fn search(&self, query: &str) -> Result<Vec<MediaRecord>> {
        let needle = query.to_lowercase();
        let records = self.store.load().await?;
        Ok(records
            .into_iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .collect())
    }

    /// Linear scan for an exact id match.
    pub async fn get(&self, id: &MediaId) -> Result<MediaRecord> {
        let records = self.store.load().await?;
        records
            .into_iter()
            .find(|m| m.id == *id)
            .ok_or_else(|| CatalogError::media_not_found(id))
    }

    /// Append a new record built from a validated draft and persist.
    pub async fn create(&self, draft: MediaDraft) -> Result<MediaRecord> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;
        let record =
            MediaRecord::new(draft.title, draft.year, draft.media_type);
        records.push(record.clone());
        self.store.save(&records).await?;
        info!(id = %record.id, title = %record.title, "created media record");
        Ok(record)
    }

    /// Shallow-merge supplied fields over the existing record; the
    /// server-assigned fields are untouched by construction of
    /// [`MediaPatch`]. Unknown id is a hard miss, not an implicit
    /// create.
    pub async fn update(
        &self,
        id: &MediaId,
        patch: MediaPatch,
    ) -> Result<MediaRecord> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;
        let record = records
            .iter_mut()
            .find(|m| m.id == *id)
            .ok_or_else(|| CatalogError::media_not_found(id))?;

        if let Some(title) = patch.title {
            record.title = title;
        }
        if let Some(year) = patch.year {
            record.year = year;
        }
        if let Some(media_type) = patch.media_type {
            record.media_type = media_type;
        }
        if let Some(poster) = patch.poster {
            record.poster = Some(poster);
        }

        let updated = record.clone();
        self.store.save(&records).await?;
        Ok(updated)
    }

    /// Remove exactly the record with the given id, keeping every
    /// other record in order. Unknown id reports a miss and leaves the
    /// document untouched.
    pub async fn delete(&self, id: &MediaId) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;
        let before = records.len();
        records.retain(|m| m.id != *id);
        if records.len() == before {
            return Err(CatalogError::media_not_found(id));
        }
        self.store.save(&records).await?;
        info!(id = %id, "deleted media record");
        Ok(())
    }

    /// Shared merge-and-persist tail of both poster-attach variants.
    pub async fn set_poster(
        &self,
        id: &MediaId,
        url: String,
    ) -> Result<MediaRecord> {
        self.update(id, MediaPatch::with_poster(url)).await
    }

    /// Embedded review list; empty when the record has none.
    pub async fn reviews(&self, id: &MediaId) -> Result<Vec<Review>> {
        Ok(self.get(id).await?.reviews)
    }

    /// Append a review built from a validated draft, binding its
    /// back-reference to the owning record.
    pub async fn add_review(
        &self,
        id: &MediaId,
        draft: ReviewDraft,
    ) -> Result<MediaRecord> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;
        let record = records
            .iter_mut()
            .find(|m| m.id == *id)
            .ok_or_else(|| CatalogError::media_not_found(id))?;

        record
            .reviews
            .push(Review::new(*id, draft.comment, draft.rate));

        let updated = record.clone();
        self.store.save(&records).await?;
        Ok(updated)
    }

    /// Remove the review with the matching `_id` from the record's
    /// list. A review id that matches nothing is a no-op success; only
    /// an unknown media id is a miss.
    pub async fn delete_review(
        &self,
        id: &MediaId,
        review_id: &ReviewId,
    ) -> Result<MediaRecord> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;
        let record = records
            .iter_mut()
            .find(|m| m.id == *id)
            .ok_or_else(|| CatalogError::media_not_found(id))?;

        record.reviews.retain(|r| r.id != *review_id);

        let updated = record.clone();
        self.store.save(&records).await?;
        Ok(updated)
    }
}
