//! Admin console handlers: CRUD over artwork records plus the statistics
//! dashboard.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use galleria_core::GalleryStats;
use galleria_model::{Artwork, ArtworkInput, ArtworkPatch};
use uuid::Uuid;

use crate::{AppState, errors::AppResult};

/// Create an artwork record (upload and admin-create flows).
pub async fn create_artwork_handler(
    State(state): State<AppState>,
    Json(input): Json<ArtworkInput>,
) -> AppResult<(StatusCode, Json<Artwork>)> {
    let artwork = state.catalog.create(input).await?;
    Ok((StatusCode::CREATED, Json(artwork)))
}

/// Apply a partial edit. Counter fields in the payload are ignored; they
/// have dedicated endpoints.
pub async fn update_artwork_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ArtworkPatch>,
) -> AppResult<Json<Artwork>> {
    let artwork = state.catalog.update(id, patch).await?;
    Ok(Json(artwork))
}

/// Permanently delete a record. No soft delete.
pub async fn delete_artwork_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.catalog.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Gallery-wide statistics for the admin dashboard.
pub async fn gallery_statistics_handler(
    State(state): State<AppState>,
) -> AppResult<Json<GalleryStats>> {
    let all = state.catalog.list().await?;
    Ok(Json(GalleryStats::collect(&all)))
}
