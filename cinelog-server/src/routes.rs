use axum::{
    Json, Router,
    routing::{delete, get, put},
};
use serde_json::json;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    app_state::AppState,
    handlers::{media, posters, reviews},
    middleware::{build_cors_layer, origin_guard},
};

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Assemble the full application router.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config);
    let origin_layer = axum::middleware::from_fn_with_state(
        state.clone(),
        origin_guard,
    );

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/media",
            get(media::list_media_handler)
                .post(media::create_media_handler),
        )
        .route(
            "/media/search/{query}",
            get(media::search_media_handler),
        )
        .route(
            "/media/{id}",
            get(media::get_media_handler)
                .put(media::update_media_handler)
                .delete(media::delete_media_handler),
        )
        .route(
            "/media/{id}/uploadPoster",
            put(posters::upload_poster_handler),
        )
        .route("/media/{id}/poster", put(posters::remote_poster_handler))
        .route(
            "/media/{id}/reviews",
            get(reviews::list_reviews_handler)
                .post(reviews::add_review_handler),
        )
        .route(
            "/media/{id}/reviews/{review_id}",
            delete(reviews::delete_review_handler),
        )
        .route("/media/{id}/PDFDownload", get(media::export_pdf_handler))
        // Locally stored posters resolve through this static tree.
        .nest_service(
            "/public/img",
            ServeDir::new(&state.config.image_dir),
        )
        // CORS headers, origin allow-list and request tracing apply to
        // every route, the static tree included.
        .layer(cors_layer)
        .layer(origin_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
