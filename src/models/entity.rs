//! Normalized entities
//!
//! Every provider record is mapped to an [`Entity`]: a string id, the
//! entity's attributes and its links to other entities. Both the
//! Standardized and the JSON:API shapes are built from these.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A mapped record: identity, attributes and links
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity<A> {
    pub id: String,
    #[serde(flatten)]
    pub attributes: A,
    #[serde(flatten)]
    pub links: Links,
}

impl<A> Entity<A> {
    pub fn new(id: impl Into<String>, attributes: A) -> Self {
        Self {
            id: id.into(),
            attributes,
            links: Links::default(),
        }
    }

    pub fn with_links(mut self, links: Links) -> Self {
        self.links = links;
        self
    }
}

/// References from one entity to others, by id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    /// Set only for a non-zero provider parent id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

/// Which catalogue a category belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Channel,
    Movie,
    Show,
}

// ============================================================================
// Account
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub password: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
    pub is_trial: bool,
    pub allowed_output_formats: Vec<String>,
    pub max_connections: Option<i64>,
    pub active_connections: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    /// `None` for accounts without expiry
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub xui: bool,
    pub version: Option<String>,
    pub revision: Option<String>,
    pub url: String,
    pub port: Option<String>,
    pub https_port: Option<String>,
    pub server_protocol: Option<String>,
    pub rtmp_port: Option<String>,
    pub timezone: Option<String>,
    pub time_now: Option<DateTime<Utc>>,
}

// ============================================================================
// Catalogue
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub number: Option<i64>,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub thumbnail: Option<String>,
    pub epg_id: Option<String>,
    pub tv_archive: bool,
    pub tv_archive_duration: Option<i64>,
    pub custom_sid: Option<String>,
    pub direct_source: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListing {
    pub name: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    pub vote_average: Option<f64>,
    /// Seconds
    pub duration: Option<i64>,
    pub release_date: Option<DateTime<Utc>>,
    pub youtube_id: Option<String>,
    pub genre: Vec<String>,
    pub cast: Vec<String>,
    pub director: Vec<String>,
    pub container_extension: Option<String>,
    pub custom_sid: Option<String>,
    pub direct_source: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rating {
    pub mpaa: Option<String>,
    pub age: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub name: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub original_name: Option<String>,
    pub information_url: Option<String>,
    pub tmdb_id: Option<String>,
    pub cover: Option<String>,
    pub poster: Option<String>,
    pub backdrops: Vec<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub youtube_id: Option<String>,
    pub director: Vec<String>,
    pub actors: Vec<String>,
    pub cast: Vec<String>,
    pub genre: Vec<String>,
    pub description: Option<String>,
    pub plot: Option<String>,
    pub country: Option<String>,
    pub rating: Rating,
    pub vote_average: Option<f64>,
    /// Seconds
    pub duration: Option<i64>,
    pub duration_formatted: Option<String>,
    pub bitrate: Option<i64>,
    pub subtitles: Vec<Value>,
    pub container_extension: Option<String>,
    pub custom_sid: Option<String>,
    pub direct_source: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Shared by the show listing and the show detail
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub name: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    pub cover: Option<String>,
    pub backdrops: Vec<String>,
    pub vote_average: Option<f64>,
    /// Seconds
    pub duration: Option<i64>,
    pub release_date: Option<DateTime<Utc>>,
    pub youtube_id: Option<String>,
    pub cast: Vec<String>,
    pub director: Vec<String>,
    pub genre: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub name: Option<String>,
    pub number: Option<i64>,
    pub overview: Option<String>,
    pub episode_count: Option<i64>,
    pub vote_average: Option<f64>,
    pub cover: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub number: Option<i64>,
    pub title: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    pub cover: Option<String>,
    pub vote_average: Option<f64>,
    pub tmdb_id: Option<String>,
    /// Seconds
    pub duration: Option<i64>,
    pub duration_formatted: Option<String>,
    pub bitrate: Option<i64>,
    pub release_date: Option<DateTime<Utc>>,
    pub container_extension: Option<String>,
    pub custom_sid: Option<String>,
    pub direct_source: Option<String>,
    pub subtitles: Vec<Value>,
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A show detail with its seasons and episodes, in provider order
#[derive(Debug, Clone, PartialEq)]
pub struct ShowGraph {
    pub show: Entity<Show>,
    pub seasons: Vec<Entity<Season>>,
    pub episodes: Vec<Entity<Episode>>,
}

// ============================================================================
// EPG
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpgListing {
    pub epg_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullEpgListing {
    #[serde(flatten)]
    pub listing: EpgListing,
    pub now_playing: bool,
    pub has_archive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_flattens_attributes_and_links() {
        let entity = Entity::new("7", Category { name: "News".to_string() }).with_links(Links {
            parent_id: Some("1".to_string()),
            ..Default::default()
        });

        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value, json!({ "id": "7", "name": "News", "parentId": "1" }));
    }

    #[test]
    fn test_absent_links_are_omitted() {
        let entity = Entity::new("7", Category { name: "News".to_string() });
        let value = serde_json::to_value(&entity).unwrap();
        assert!(value.get("parentId").is_none());
        assert!(value.get("categoryIds").is_none());
    }
}
