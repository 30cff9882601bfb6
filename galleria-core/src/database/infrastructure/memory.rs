use async_trait::async_trait;
use chrono::Utc;
use galleria_model::{Artwork, ArtworkInput, ArtworkPatch, dedup_tags};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::ports::ArtworkRepository;
use crate::error::{GalleryError, Result};

/// In-memory artwork store with the same contract as the Postgres adapter.
///
/// Backs the test suites and local demo wiring; nothing about it is
/// test-gated so the server can run against it without a database.
#[derive(Debug, Default)]
pub struct MemoryArtworkRepository {
    records: RwLock<Vec<Artwork>>,
}

impl MemoryArtworkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store, e.g. for demo fixtures.
    pub async fn seed(&self, artworks: Vec<Artwork>) {
        self.records.write().await.extend(artworks);
    }
}

#[async_trait]
impl ArtworkRepository for MemoryArtworkRepository {
    async fn list(&self) -> Result<Vec<Artwork>> {
        let records = self.records.read().await;
        // Newest first; reversing insertion order before the stable sort
        // keeps same-timestamp records in most-recently-created order.
        let mut items: Vec<Artwork> = records.iter().rev().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn create(&self, input: ArtworkInput) -> Result<Artwork> {
        input.validate()?;

        let now = Utc::now();
        let artwork = Artwork {
            id: Uuid::now_v7(),
            title: input.title,
            artist: input.artist,
            description: input.description,
            image_url: input.image_url,
            tags: dedup_tags(input.tags),
            likes: 0,
            views: 0,
            width: input.width,
            height: input.height,
            created_at: now,
            updated_at: now,
        };
        self.records.write().await.push(artwork.clone());
        Ok(artwork)
    }

    async fn update(&self, id: Uuid, patch: ArtworkPatch) -> Result<Artwork> {
        patch.validate()?;

        let mut records = self.records.write().await;
        let artwork = records
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| GalleryError::NotFound(id.to_string()))?;

        if let Some(title) = patch.title {
            artwork.title = title;
        }
        if let Some(artist) = patch.artist {
            artwork.artist = artist;
        }
        if let Some(description) = patch.description {
            artwork.description = description;
        }
        if let Some(image_url) = patch.image_url {
            artwork.image_url = image_url;
        }
        if let Some(tags) = patch.tags {
            artwork.tags = dedup_tags(tags);
        }
        if let Some(width) = patch.width {
            artwork.width = width;
        }
        if let Some(height) = patch.height {
            artwork.height = height;
        }
        artwork.updated_at = Utc::now();

        Ok(artwork.clone())
    }

    async fn remove(&self, id: Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|a| a.id != id);
        if records.len() == before {
            return Err(GalleryError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn increment_views(&self, id: Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        let artwork = records
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| GalleryError::NotFound(id.to_string()))?;
        // Counter bump only; updated_at stays put.
        artwork.views += 1;
        Ok(())
    }

    async fn toggle_like(&self, id: Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        let artwork = records
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| GalleryError::NotFound(id.to_string()))?;
        artwork.likes += 1;
        Ok(())
    }
}
