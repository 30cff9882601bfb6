//! Gallery-wide engagement statistics for the admin dashboard.

use std::collections::{HashMap, HashSet};

use galleria_model::Artwork;
use serde::Serialize;
use uuid::Uuid;

const TOP_ARTWORKS: usize = 5;
const RECENT_ARTWORKS: usize = 5;
const POPULAR_TAGS: usize = 10;

/// One row of the "top performing" list.
#[derive(Debug, Clone, Serialize)]
pub struct ArtworkHighlight {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub likes: i64,
    pub views: i64,
}

/// One row of the "recently added" list.
#[derive(Debug, Clone, Serialize)]
pub struct RecentArtwork {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Usage count for a single tag.
#[derive(Debug, Clone, Serialize)]
pub struct TagUsage {
    pub tag: String,
    pub count: usize,
}

/// Aggregate gallery statistics derived from the loaded artwork list.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryStats {
    pub total_artworks: usize,
    pub total_likes: i64,
    pub total_views: i64,
    pub total_artists: usize,
    pub top_artworks: Vec<ArtworkHighlight>,
    pub recent_artworks: Vec<RecentArtwork>,
    pub popular_tags: Vec<TagUsage>,
}

impl GalleryStats {
    /// Derive all aggregates in one pass over the list.
    ///
    /// Pure computation: the list is already resident, so there is no
    /// reason to push these aggregations down to the store.
    pub fn collect(artworks: &[Artwork]) -> Self {
        let total_likes = artworks.iter().map(|a| a.likes).sum();
        let total_views = artworks.iter().map(|a| a.views).sum();
        let total_artists = artworks
            .iter()
            .map(|a| a.artist.as_str())
            .collect::<HashSet<_>>()
            .len();

        let mut by_likes: Vec<&Artwork> = artworks.iter().collect();
        by_likes.sort_by(|a, b| b.likes.cmp(&a.likes));
        let top_artworks = by_likes
            .iter()
            .take(TOP_ARTWORKS)
            .map(|a| ArtworkHighlight {
                id: a.id,
                title: a.title.clone(),
                artist: a.artist.clone(),
                likes: a.likes,
                views: a.views,
            })
            .collect();

        let mut by_age: Vec<&Artwork> = artworks.iter().collect();
        by_age.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let recent_artworks = by_age
            .iter()
            .take(RECENT_ARTWORKS)
            .map(|a| RecentArtwork {
                id: a.id,
                title: a.title.clone(),
                artist: a.artist.clone(),
                created_at: a.created_at,
            })
            .collect();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for artwork in artworks {
            for tag in &artwork.tags {
                *counts.entry(tag.as_str()).or_default() += 1;
            }
        }
        let mut popular_tags: Vec<TagUsage> = counts
            .into_iter()
            .map(|(tag, count)| TagUsage {
                tag: tag.to_string(),
                count,
            })
            .collect();
        // Count descending, then name, so equal counts render stably.
        popular_tags.sort_by(|a, b| b.count.cmp(&a.count).then(a.tag.cmp(&b.tag)));
        popular_tags.truncate(POPULAR_TAGS);

        Self {
            total_artworks: artworks.len(),
            total_likes,
            total_views,
            total_artists,
            top_artworks,
            recent_artworks,
            popular_tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn artwork(title: &str, artist: &str, likes: i64, views: i64, tags: &[&str], age_days: i64) -> Artwork {
        let created = Utc::now() - Duration::days(age_days);
        Artwork {
            id: Uuid::now_v7(),
            title: title.to_string(),
            artist: artist.to_string(),
            description: String::new(),
            image_url: "https://img.example/a.jpg".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            likes,
            views,
            width: 400,
            height: 600,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn collect_aggregates_totals_and_rankings() {
        let artworks = vec![
            artwork("Ocean Dreams", "Sarah Chen", 234, 1205, &["Abstract", "Blue"], 3),
            artwork("Urban Symphony", "Marcus Rodriguez", 456, 2301, &["Urban"], 5),
            artwork("Echoes", "Sarah Chen", 100, 400, &["Abstract"], 1),
        ];

        let stats = GalleryStats::collect(&artworks);
        assert_eq!(stats.total_artworks, 3);
        assert_eq!(stats.total_likes, 790);
        assert_eq!(stats.total_views, 3906);
        assert_eq!(stats.total_artists, 2);

        assert_eq!(stats.top_artworks[0].title, "Urban Symphony");
        assert_eq!(stats.recent_artworks[0].title, "Echoes");

        assert_eq!(stats.popular_tags[0].tag, "Abstract");
        assert_eq!(stats.popular_tags[0].count, 2);
        // Equal counts fall back to name order.
        assert_eq!(stats.popular_tags[1].tag, "Blue");
        assert_eq!(stats.popular_tags[2].tag, "Urban");
    }

    #[test]
    fn collect_on_empty_gallery() {
        let stats = GalleryStats::collect(&[]);
        assert_eq!(stats.total_artworks, 0);
        assert_eq!(stats.total_artists, 0);
        assert!(stats.top_artworks.is_empty());
        assert!(stats.popular_tags.is_empty());
    }
}
