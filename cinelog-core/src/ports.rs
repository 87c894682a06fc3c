//! Narrow contracts for the catalog's external collaborators.
//!
//! Poster storage and PDF rendering are I/O side effects the catalog
//! only needs through a functional signature, so they live behind
//! object-safe traits and tests substitute in-memory fakes.

use async_trait::async_trait;

use cinelog_model::{MediaId, MediaRecord};

use crate::error::Result;

/// Stores a poster image and returns the public URL clients should
/// use to fetch it.
#[async_trait]
pub trait PosterStore: Send + Sync {
    async fn store(
        &self,
        id: &MediaId,
        bytes: Vec<u8>,
        original_filename: &str,
    ) -> Result<String>;
}

/// Renders one record into a finished PDF byte buffer.
pub trait PdfRenderer: Send + Sync {
    fn render(&self, record: &MediaRecord) -> Result<Vec<u8>>;
}
