//! Public gallery handlers: browsing, searching, and engagement counters.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use galleria_core::query::{distinct_tags, filter};
use galleria_model::Artwork;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppState, errors::AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Free-text search over title, artist, description, and tags.
    #[serde(default)]
    pub search: String,
    /// Exact tag filter.
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Serialize)]
pub struct ArtworkListResponse {
    pub artworks: Vec<Artwork>,
    /// Records in the gallery, before filtering.
    pub total: usize,
    /// Records matching the current filters ("Found X of Y").
    pub matched: usize,
}

/// List the gallery, filtered by the optional search term and tag.
pub async fn list_artworks_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ArtworkListResponse>> {
    let all = state.catalog.list().await?;
    let visible = filter(&all, &params.search, &params.tag);
    let matched = visible.len();
    let artworks: Vec<Artwork> = visible.into_iter().cloned().collect();

    Ok(Json(ArtworkListResponse {
        artworks,
        total: all.len(),
        matched,
    }))
}

/// The tag vocabulary derived from the current gallery.
pub async fn list_tags_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<String>>> {
    let all = state.catalog.list().await?;
    Ok(Json(distinct_tags(&all)))
}

/// Record a view. Best-effort: opening an artwork must not fail because the
/// counter write did, so this always accepts once the id parses.
pub async fn record_view_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    state.catalog.record_view(id).await;
    StatusCode::ACCEPTED
}

/// Register a like via the store's toggle procedure.
pub async fn like_artwork_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.catalog.toggle_like(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
