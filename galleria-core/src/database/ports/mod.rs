use async_trait::async_trait;
use galleria_model::{Artwork, ArtworkInput, ArtworkPatch};
use uuid::Uuid;

use crate::error::Result;

/// Repository port for artwork persistence.
///
/// The sole gateway between application logic and the artwork store.
/// Infrastructure adapters own the mapping to store representations; the
/// application layer receives typed records and the [`crate::error::GalleryError`]
/// taxonomy, never raw driver errors. Handed around as `Arc<dyn ArtworkRepository>`
/// so callers can be exercised against a fake store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtworkRepository: Send + Sync {
    /// All records, newest first (`created_at` descending).
    async fn list(&self) -> Result<Vec<Artwork>>;

    /// Persist a new record. The adapter assigns the id, zeroes both
    /// counters, and stamps both timestamps.
    async fn create(&self, input: ArtworkInput) -> Result<Artwork>;

    /// Apply the supplied fields to an existing record and refresh
    /// `updated_at`. Counters are never touched by this operation.
    async fn update(&self, id: Uuid, patch: ArtworkPatch) -> Result<Artwork>;

    /// Hard-delete a record. Not idempotent: a second call for the same id
    /// fails with `NotFound`.
    async fn remove(&self, id: Uuid) -> Result<()>;

    /// Atomically add one view. Leaves `updated_at` alone.
    async fn increment_views(&self, id: Uuid) -> Result<()>;

    /// Register a like via the store's `toggle_like` procedure.
    ///
    /// There is no per-user identity in scope, so the procedure is a pure
    /// monotonic increment; the name is the store's.
    async fn toggle_like(&self, id: Uuid) -> Result<()>;
}
