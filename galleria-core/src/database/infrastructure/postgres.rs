use async_trait::async_trait;
use chrono::{DateTime, Utc};
use galleria_model::{Artwork, ArtworkInput, ArtworkPatch, dedup_tags};
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::debug;
use uuid::Uuid;

use crate::database::ports::ArtworkRepository;
use crate::error::{GalleryError, Result};

const ARTWORK_COLUMNS: &str = "id, title, artist, description, image_url, \
     tags, likes, views, width, height, created_at, updated_at";

/// Postgres adapter for the artwork store.
///
/// Counter mutations go through the store's SQL procedures
/// (`increment_views`, `toggle_like`) so concurrent bumps never lose
/// updates; everything else is plain row DML.
#[derive(Debug, Clone)]
pub struct PostgresArtworkRepository {
    pool: PgPool,
}

impl PostgresArtworkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn map_row(row: &PgRow) -> Result<Artwork> {
        let id: Uuid = row
            .try_get("id")
            .map_err(|e| GalleryError::Store(format!("Failed to read artwork id: {e}")))?;
        let title: String = row
            .try_get("title")
            .map_err(|e| GalleryError::Store(format!("Failed to read title: {e}")))?;
        let artist: String = row
            .try_get("artist")
            .map_err(|e| GalleryError::Store(format!("Failed to read artist: {e}")))?;
        let description: String = row
            .try_get("description")
            .map_err(|e| GalleryError::Store(format!("Failed to read description: {e}")))?;
        let image_url: String = row
            .try_get("image_url")
            .map_err(|e| GalleryError::Store(format!("Failed to read image_url: {e}")))?;
        let tags: Vec<String> = row
            .try_get("tags")
            .map_err(|e| GalleryError::Store(format!("Failed to read tags: {e}")))?;
        let likes: i64 = row
            .try_get("likes")
            .map_err(|e| GalleryError::Store(format!("Failed to read likes: {e}")))?;
        let views: i64 = row
            .try_get("views")
            .map_err(|e| GalleryError::Store(format!("Failed to read views: {e}")))?;
        let width: i32 = row
            .try_get("width")
            .map_err(|e| GalleryError::Store(format!("Failed to read width: {e}")))?;
        let height: i32 = row
            .try_get("height")
            .map_err(|e| GalleryError::Store(format!("Failed to read height: {e}")))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| GalleryError::Store(format!("Failed to read created_at: {e}")))?;
        let updated_at: DateTime<Utc> = row
            .try_get("updated_at")
            .map_err(|e| GalleryError::Store(format!("Failed to read updated_at: {e}")))?;

        Ok(Artwork {
            id,
            title,
            artist,
            description,
            image_url,
            tags,
            likes,
            views,
            width,
            height,
            created_at,
            updated_at,
        })
    }

    /// Run one of the boolean-returning counter procedures and translate a
    /// `false` found-flag into `NotFound`.
    async fn call_counter_procedure(&self, procedure: &str, id: Uuid) -> Result<()> {
        let sql = format!("SELECT {procedure}($1) AS found");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_one(self.pool())
            .await
            .map_err(GalleryError::from)?;

        let found: bool = row
            .try_get("found")
            .map_err(|e| GalleryError::Store(format!("Failed to read {procedure} result: {e}")))?;
        if !found {
            return Err(GalleryError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArtworkRepository for PostgresArtworkRepository {
    async fn list(&self) -> Result<Vec<Artwork>> {
        let rows = sqlx::query(&format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(GalleryError::from)?;

        debug!(count = rows.len(), "listed artworks");
        rows.iter().map(Self::map_row).collect()
    }

    async fn create(&self, input: ArtworkInput) -> Result<Artwork> {
        input.validate()?;

        let id = Uuid::now_v7();
        let now = Utc::now();
        let tags = dedup_tags(input.tags);

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO artworks (
                id, title, artist, description, image_url,
                tags, width, height, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING {ARTWORK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(input.title)
        .bind(input.artist)
        .bind(input.description)
        .bind(input.image_url)
        .bind(tags)
        .bind(input.width)
        .bind(input.height)
        .bind(now)
        .fetch_one(self.pool())
        .await
        .map_err(GalleryError::from)?;

        debug!(artwork_id = %id, "created artwork");
        Self::map_row(&row)
    }

    async fn update(&self, id: Uuid, patch: ArtworkPatch) -> Result<Artwork> {
        patch.validate()?;

        let tags = patch.tags.map(dedup_tags);
        let now = Utc::now();

        // COALESCE keeps unsupplied columns untouched; counters are not in
        // the statement at all.
        let row = sqlx::query(&format!(
            r#"
            UPDATE artworks SET
                title = COALESCE($2, title),
                artist = COALESCE($3, artist),
                description = COALESCE($4, description),
                image_url = COALESCE($5, image_url),
                tags = COALESCE($6, tags),
                width = COALESCE($7, width),
                height = COALESCE($8, height),
                updated_at = $9
            WHERE id = $1
            RETURNING {ARTWORK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.artist)
        .bind(patch.description)
        .bind(patch.image_url)
        .bind(tags)
        .bind(patch.width)
        .bind(patch.height)
        .bind(now)
        .fetch_optional(self.pool())
        .await
        .map_err(GalleryError::from)?;

        match row {
            Some(row) => Self::map_row(&row),
            None => Err(GalleryError::NotFound(id.to_string())),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(GalleryError::from)?;

        if result.rows_affected() == 0 {
            return Err(GalleryError::NotFound(id.to_string()));
        }
        debug!(artwork_id = %id, "removed artwork");
        Ok(())
    }

    async fn increment_views(&self, id: Uuid) -> Result<()> {
        self.call_counter_procedure("increment_views", id).await
    }

    async fn toggle_like(&self, id: Uuid) -> Result<()> {
        self.call_counter_procedure("toggle_like", id).await
    }
}
