//! HTTP surface of the cinelog media catalog.
//!
//! Thin axum handlers over [`cinelog_core::Catalog`]: each request
//! loads the backing document, applies one mutation, persists, and
//! responds. Failures funnel through [`errors::AppError`] into JSON
//! error bodies.

pub mod app_state;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app_state::AppState;
pub use config::Config;
pub use routes::create_app;
