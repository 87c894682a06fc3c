//! Data model definitions shared across cinelog crates.
//!
//! The serialized field names (`Title`, `Year`, `Type`, `createdAt`,
//! `_id`, `elementId`) are part of the on-disk and wire contract and
//! must not change; Rust-side names follow normal conventions and map
//! through serde renames.

pub mod error;
pub mod ids;
pub mod media;
pub mod review;

pub use error::ParseIdError;
pub use ids::{MediaId, ReviewId};
pub use media::MediaRecord;
pub use review::Review;
