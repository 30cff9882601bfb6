use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::{
    AppState,
    handlers::{
        admin::{
            create_artwork_handler, delete_artwork_handler,
            gallery_statistics_handler, update_artwork_handler,
        },
        artworks::{
            like_artwork_handler, list_artworks_handler, list_tags_handler,
            record_view_handler,
        },
    },
};

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        // Gallery browsing
        .route("/artworks", get(list_artworks_handler))
        .route("/tags", get(list_tags_handler))
        // Engagement counters (narrow RPCs, never full-record writes)
        .route("/artworks/{id}/views", post(record_view_handler))
        .route("/artworks/{id}/likes", post(like_artwork_handler))
        // Upload/admin mutations
        .route("/artworks", post(create_artwork_handler))
        .route("/artworks/{id}", patch(update_artwork_handler))
        .route("/artworks/{id}", delete(delete_artwork_handler))
        // Admin dashboard
        .route("/stats", get(gallery_statistics_handler))
}
