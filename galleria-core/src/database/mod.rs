//! Artwork store access: the repository port and its adapters.

use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::error::{GalleryError, Result};

pub mod infrastructure;
pub mod ports;

pub use infrastructure::memory::MemoryArtworkRepository;
pub use infrastructure::postgres::PostgresArtworkRepository;
pub use ports::ArtworkRepository;

/// Open a connection pool against the hosted store.
///
/// Connection failure here is the canonical `StoreUnavailable` case.
pub async fn connect_pool(url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .test_before_acquire(true)
        .connect(url)
        .await
        .map_err(|e| {
            GalleryError::StoreUnavailable(format!("Database connection failed: {e}"))
        })?;

    info!(max_connections, "database pool initialized");
    Ok(pool)
}
