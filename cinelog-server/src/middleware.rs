use axum::{
    body::Body,
    extract::{Request, State},
    http::HeaderValue,
    http::header::ORIGIN,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::app_state::AppState;
use crate::config::Config;
use crate::errors::AppError;

/// Build the CORS layer (permissive in dev, allow-list otherwise).
pub fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.dev_mode {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

/// Reject requests whose `Origin` is present but not allow-listed.
/// Requests without an Origin header (curl, server-to-server) pass.
pub async fn origin_guard(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.config.dev_mode
        && let Some(origin) = req.headers().get(ORIGIN)
    {
        let origin = origin.to_str().unwrap_or_default();
        let allowed = state
            .config
            .cors_allowed_origins
            .iter()
            .any(|o| o == origin);
        if !allowed {
            warn!(origin, "rejected request from unlisted origin");
            return AppError::forbidden(format!(
                "Origin {origin} not allowed"
            ))
            .into_response();
        }
    }

    next.run(req).await
}
