//! Catalog domain logic for the cinelog media catalog.
//!
//! The whole collection lives in one JSON document; every operation is
//! a load–mutate–save pass over it. [`Catalog`] serializes those passes
//! behind a process-wide mutex, [`JsonStore`] owns the document itself,
//! and the poster / PDF side effects sit behind the narrow ports in
//! [`ports`] so the catalog can be exercised with in-memory fakes.

pub mod catalog;
pub mod error;
pub mod pdf;
pub mod ports;
pub mod poster;
pub mod store;
pub mod validate;

pub use catalog::Catalog;
pub use error::{CatalogError, FieldError, Result};
pub use pdf::SheetRenderer;
pub use ports::{PdfRenderer, PosterStore};
pub use poster::{LocalPosterStore, RemotePosterStore};
pub use store::JsonStore;
pub use validate::{MediaDraft, MediaPatch, ReviewDraft};
