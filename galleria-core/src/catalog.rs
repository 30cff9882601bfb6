//! Catalog service: the repository plus an explicit list-cache contract.
//!
//! Callers read through [`ArtworkCatalog::list`]; every successful mutation
//! invalidates the cached snapshot, so the next read reflects the change.
//! At-least-once invalidation, no staleness guarantee beyond that.

use std::fmt;
use std::sync::Arc;

use galleria_model::{Artwork, ArtworkInput, ArtworkPatch};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::ports::ArtworkRepository;
use crate::error::Result;

pub struct ArtworkCatalog {
    repository: Arc<dyn ArtworkRepository>,
    cache: Mutex<Option<Arc<Vec<Artwork>>>>,
}

impl fmt::Debug for ArtworkCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtworkCatalog").finish_non_exhaustive()
    }
}

impl ArtworkCatalog {
    pub fn new(repository: Arc<dyn ArtworkRepository>) -> Self {
        Self {
            repository,
            cache: Mutex::new(None),
        }
    }

    /// The full artwork list, newest first.
    ///
    /// Serves the cached snapshot when one exists; otherwise fetches and
    /// caches. A failed fetch is never cached, so list errors carry no
    /// partial data and the next call retries the store.
    pub async fn list(&self) -> Result<Arc<Vec<Artwork>>> {
        let mut cache = self.cache.lock().await;
        if let Some(snapshot) = cache.as_ref() {
            return Ok(Arc::clone(snapshot));
        }
        let snapshot = Arc::new(self.repository.list().await?);
        debug!(count = snapshot.len(), "refreshed artwork list cache");
        *cache = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drop the cached snapshot; the next [`Self::list`] refetches.
    pub async fn invalidate(&self) {
        *self.cache.lock().await = None;
    }

    pub async fn create(&self, input: ArtworkInput) -> Result<Artwork> {
        let artwork = self.repository.create(input).await?;
        self.invalidate().await;
        Ok(artwork)
    }

    pub async fn update(&self, id: Uuid, patch: ArtworkPatch) -> Result<Artwork> {
        let artwork = self.repository.update(id, patch).await?;
        self.invalidate().await;
        Ok(artwork)
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        self.repository.remove(id).await?;
        self.invalidate().await;
        Ok(())
    }

    pub async fn toggle_like(&self, id: Uuid) -> Result<()> {
        self.repository.toggle_like(id).await?;
        self.invalidate().await;
        Ok(())
    }

    /// Best-effort view bump.
    ///
    /// Viewing an artwork must never fail because the counter write did:
    /// store failures are logged and swallowed here.
    pub async fn record_view(&self, id: Uuid) {
        match self.repository.increment_views(id).await {
            Ok(()) => self.invalidate().await,
            Err(err) => {
                warn!(artwork_id = %id, error = %err, "view increment failed");
            }
        }
    }
}
