use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ModelError, Result};

/// Default intrinsic dimensions applied when an upload omits them.
///
/// These match the portrait card the gallery grid is laid out around.
pub const DEFAULT_WIDTH: i32 = 400;
pub const DEFAULT_HEIGHT: i32 = 600;

/// A persisted artwork record with its metadata and engagement counters.
///
/// Field names follow the store's snake_case row shape (`image_url`,
/// `created_at`, `updated_at`) so records serialize directly onto the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub likes: i64,
    pub views: i64,
    pub width: i32,
    pub height: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload for a new artwork.
///
/// `id`, counters, and timestamps are assigned by the repository; clients
/// never supply them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkInput {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

impl ArtworkInput {
    /// Validate required fields and dimension bounds.
    ///
    /// Whitespace-only text counts as empty. Tags are not validated here;
    /// they are normalized with [`dedup_tags`] at persistence time.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ModelError::MissingField("title"));
        }
        if self.artist.trim().is_empty() {
            return Err(ModelError::MissingField("artist"));
        }
        if self.image_url.trim().is_empty() {
            return Err(ModelError::MissingField("image_url"));
        }
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)?;
        Ok(())
    }
}

/// Partial update payload for an existing artwork.
///
/// Only supplied fields change. The engagement counters are deliberately not
/// representable here: they have dedicated store procedures, and unknown keys
/// in an incoming JSON payload (`likes`, `views`, ...) are dropped during
/// deserialization rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

impl ArtworkPatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.tags.is_none()
            && self.width.is_none()
            && self.height.is_none()
    }

    /// Validate supplied fields.
    ///
    /// An empty patch is an error: the caller sent an update that cannot
    /// change anything, which is always a client bug.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ModelError::InvalidField {
                field: "patch",
                reason: "no fields supplied".to_string(),
            });
        }
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err(ModelError::MissingField("title"));
        }
        if let Some(artist) = &self.artist
            && artist.trim().is_empty()
        {
            return Err(ModelError::MissingField("artist"));
        }
        if let Some(image_url) = &self.image_url
            && image_url.trim().is_empty()
        {
            return Err(ModelError::MissingField("image_url"));
        }
        if let Some(width) = self.width {
            validate_dimension("width", width)?;
        }
        if let Some(height) = self.height {
            validate_dimension("height", height)?;
        }
        Ok(())
    }
}

fn validate_dimension(field: &'static str, value: i32) -> Result<()> {
    if value <= 0 {
        return Err(ModelError::InvalidField {
            field,
            reason: format!("must be positive, got {value}"),
        });
    }
    Ok(())
}

/// Collapse duplicate tags, case-sensitively, preserving first-seen order.
///
/// Display order is insertion order; dedup must not reorder surviving tags.
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
