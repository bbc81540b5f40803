//! Xtream Codes API Types
//!
//! Type definitions for Xtream Codes Player API v2 responses.
//!
//! Not every panel version returns every field, and the same field can come
//! back as a string on one panel and as a number on another. Fields are
//! therefore optional and scalar fields with mixed encodings are kept as raw
//! `serde_json::Value` to be coerced by the mappers.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Credentials and base URL of an Xtream server
#[derive(Debug, Clone)]
pub struct XtreamCredentials {
    /// Server base URL without trailing slash (e.g., "http://example.com:8080")
    pub server: String,
    /// Username for authentication
    pub username: String,
    /// Password for authentication
    pub password: String,
}

impl XtreamCredentials {
    /// Build the player_api.php base URL
    pub fn api_url(&self) -> String {
        format!(
            "{}/player_api.php?username={}&password={}",
            self.server,
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}

// ============================================================================
// Deserialization helpers
// ============================================================================

/// Accept a string, number or bool as text; anything else is `None`
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Accept a list of strings/numbers, a single string, or null
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s],
        _ => Vec::new(),
    })
}

/// Accept a list of arbitrary values or null
fn value_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    })
}

/// Treat an explicit `null` list like an absent one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Some panels send `[]` instead of an object when there is nothing to say
fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        Some(object @ Value::Object(_)) => serde_json::from_value(object)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

// ============================================================================
// Profile Types
// ============================================================================

/// Response of get_profile / get_server_info (and the bare player_api.php)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct XtreamProfileResponse {
    pub user_info: XtreamUserProfile,
    #[serde(default)]
    pub server_info: Option<XtreamServerInfo>,
}

/// User account information
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamUserProfile {
    #[serde(default, deserialize_with = "optional_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub message: Option<String>,
    #[serde(default)]
    pub auth: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub status: Option<String>,
    #[serde(default)]
    pub exp_date: Option<Value>,
    #[serde(default)]
    pub is_trial: Option<Value>,
    #[serde(default)]
    pub active_cons: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub max_connections: Option<Value>,
    #[serde(default, deserialize_with = "string_list")]
    pub allowed_output_formats: Vec<String>,
}

/// Server information
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamServerInfo {
    #[serde(default)]
    pub xui: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub revision: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub port: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub https_port: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub server_protocol: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub rtmp_port: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub timezone: Option<String>,
    #[serde(default)]
    pub timestamp_now: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub time_now: Option<String>,
}

// ============================================================================
// Category Types
// ============================================================================

/// Category for live, VOD, or series
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct XtreamCategory {
    #[serde(default)]
    pub category_id: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub category_name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Value>,
}

// ============================================================================
// Live Stream Types
// ============================================================================

/// Live stream (channel) information
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct XtreamChannel {
    #[serde(default)]
    pub num: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub stream_type: Option<String>,
    #[serde(default)]
    pub stream_id: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub stream_icon: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub epg_channel_id: Option<String>,
    #[serde(default)]
    pub added: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub category_ids: Vec<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub custom_sid: Option<String>,
    #[serde(default)]
    pub tv_archive: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub direct_source: Option<String>,
    #[serde(default)]
    pub tv_archive_duration: Option<Value>,
    /// Playable URL attached by the client
    #[serde(default)]
    pub url: Option<String>,
}

// ============================================================================
// VOD Types
// ============================================================================

/// VOD (movie) listing entry from get_vod_streams
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct XtreamMovieListing {
    #[serde(default)]
    pub num: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub stream_type: Option<String>,
    #[serde(default)]
    pub stream_id: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub stream_icon: Option<String>,
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default)]
    pub rating_5based: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub genre: Option<String>,
    #[serde(default)]
    pub added: Option<Value>,
    /// Runtime in minutes
    #[serde(default)]
    pub episode_run_time: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub category_ids: Vec<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub container_extension: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub custom_sid: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub direct_source: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub cast: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub plot: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub youtube_trailer: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Detailed VOD information (from get_vod_info)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct XtreamMovie {
    /// `None` when the panel answers `"info": []` for an unknown movie
    #[serde(default, deserialize_with = "object_or_none")]
    pub info: Option<XtreamMovieInfo>,
    pub movie_data: XtreamMovieData,
    #[serde(default)]
    pub url: Option<String>,
}

/// Stream side of a movie detail (identity, categories, container)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct XtreamMovieData {
    #[serde(default)]
    pub stream_id: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub year: Option<String>,
    #[serde(default)]
    pub added: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub category_ids: Vec<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub container_extension: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub custom_sid: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub direct_source: Option<String>,
}

/// Descriptive side of a movie detail
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamMovieInfo {
    #[serde(default, deserialize_with = "optional_text")]
    pub kinopoisk_url: Option<String>,
    #[serde(default)]
    pub tmdb_id: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub o_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub cover_big: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub movie_image: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub releasedate: Option<String>,
    #[serde(default)]
    pub episode_run_time: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub youtube_trailer: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub actors: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub cast: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub plot: Option<String>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub mpaa_rating: Option<String>,
    #[serde(default)]
    pub rating_count_kinopoisk: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub backdrop_path: Vec<String>,
    #[serde(default)]
    pub duration_secs: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub duration: Option<String>,
    #[serde(default)]
    pub bitrate: Option<Value>,
    #[serde(default, deserialize_with = "value_list")]
    pub subtitles: Vec<Value>,
    #[serde(default)]
    pub rating: Option<Value>,
}

// ============================================================================
// Series Types
// ============================================================================

/// Series information from get_series, also the `info` block of get_series_info
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamShowListing {
    #[serde(default)]
    pub num: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub year: Option<String>,
    /// Absent from get_series_info unless injected by the client
    #[serde(default)]
    pub series_id: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub stream_type: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub plot: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub cast: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub release_date: Option<String>,
    #[serde(default, rename = "releaseDate", deserialize_with = "optional_text")]
    pub release_date_camel: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub releasedate: Option<String>,
    #[serde(default)]
    pub last_modified: Option<Value>,
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default)]
    pub rating_5based: Option<Value>,
    #[serde(default, deserialize_with = "string_list")]
    pub backdrop_path: Vec<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub youtube_trailer: Option<String>,
    /// Average episode runtime in minutes
    #[serde(default)]
    pub episode_run_time: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub category_ids: Vec<String>,
}

/// The `info` block of get_series_info has the listing's fields
pub type XtreamShowInfo = XtreamShowListing;

/// Detailed series information (from get_series_info)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct XtreamShow {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub seasons: Vec<XtreamSeason>,
    pub info: XtreamShowInfo,
    /// Episodes grouped by season number
    #[serde(default)]
    pub episodes: EpisodeGroups,
}

/// Season information
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamSeason {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default)]
    pub episode_count: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub air_date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub cover_big: Option<String>,
    /// Some panels rename `cover_big`
    #[serde(default, deserialize_with = "optional_text")]
    pub cover_tmdb: Option<String>,
    #[serde(default)]
    pub season_number: Option<Value>,
    #[serde(default)]
    pub vote_average: Option<Value>,
}

/// Episode information
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamEpisode {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub episode_num: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub container_extension: Option<String>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub info: Option<XtreamEpisodeInfo>,
    #[serde(default, deserialize_with = "optional_text")]
    pub custom_sid: Option<String>,
    #[serde(default)]
    pub added: Option<Value>,
    #[serde(default)]
    pub season: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub direct_source: Option<String>,
    #[serde(default, deserialize_with = "value_list")]
    pub subtitles: Vec<Value>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Episode metadata
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamEpisodeInfo {
    #[serde(default, deserialize_with = "optional_text")]
    pub air_date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub releasedate: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub plot: Option<String>,
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub movie_image: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub cover_big: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub duration: Option<String>,
    #[serde(default)]
    pub tmdb_id: Option<Value>,
    #[serde(default)]
    pub video: Option<Value>,
    #[serde(default)]
    pub audio: Option<Value>,
    #[serde(default)]
    pub bitrate: Option<Value>,
    #[serde(default)]
    pub season: Option<Value>,
}

impl XtreamEpisodeInfo {
    /// First non-empty of the release date spellings
    pub fn release_date(&self) -> Option<&str> {
        [&self.release_date, &self.releasedate, &self.air_date]
            .into_iter()
            .filter_map(|d| d.as_deref())
            .find(|d| !d.trim().is_empty())
    }
}

/// Episodes keyed by season, in JavaScript object-key order
///
/// The provider sends `{"1": [...], "2": [...]}`, but also `[]` when a show
/// has no episodes and occasionally a bare array of per-season arrays.
/// Canonical integer keys come first in ascending numeric order, followed by
/// any other keys in the order the provider sent them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EpisodeGroups(pub Vec<(String, Vec<XtreamEpisode>)>);

impl EpisodeGroups {
    /// Iterate groups in key order
    pub fn iter(&self) -> impl Iterator<Item = &(String, Vec<XtreamEpisode>)> {
        self.0.iter()
    }

    fn sort_like_object_keys(&mut self) {
        // stable: non-index keys keep their insertion order
        self.0.sort_by_key(|(key, _)| match array_index(key) {
            Some(index) => (0, index),
            None => (1, 0),
        });
    }
}

/// A key JavaScript treats as an array index ("0", "12", but not "01")
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    key.parse::<u32>().ok().filter(|n| *n < u32::MAX)
}

impl<'de> Deserialize<'de> for EpisodeGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let mut groups = EpisodeGroups::default();

        match value {
            Some(Value::Object(map)) => {
                for (key, episodes) in map {
                    let episodes: Vec<XtreamEpisode> = match episodes {
                        Value::Array(_) => serde_json::from_value(episodes).map_err(D::Error::custom)?,
                        _ => Vec::new(),
                    };
                    groups.0.push((key, episodes));
                }
            }
            Some(Value::Array(items)) => {
                for (index, item) in items.into_iter().enumerate() {
                    let episodes: Vec<XtreamEpisode> = match item {
                        Value::Array(_) => serde_json::from_value(item).map_err(D::Error::custom)?,
                        Value::Object(_) => vec![serde_json::from_value(item).map_err(D::Error::custom)?],
                        _ => continue,
                    };
                    let key = episodes
                        .first()
                        .and_then(|e| crate::services::coerce::to_integer(e.season.as_ref()))
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| (index + 1).to_string());

                    match groups.0.iter_mut().find(|(k, _)| *k == key) {
                        Some((_, existing)) => existing.extend(episodes),
                        None => groups.0.push((key, episodes)),
                    }
                }
            }
            _ => {}
        }

        groups.sort_like_object_keys();
        Ok(groups)
    }
}

// ============================================================================
// EPG Types
// ============================================================================

/// Short EPG entry (from get_short_epg)
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamEpgListing {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub epg_id: Option<String>,
    /// Base64 encoded
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub lang: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub start: Option<String>,
    /// Epoch seconds on get_short_epg, a date string on get_simple_data_table
    #[serde(default, deserialize_with = "optional_text")]
    pub end: Option<String>,
    /// Base64 encoded
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub start_timestamp: Option<Value>,
    #[serde(default)]
    pub stop_timestamp: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub stop: Option<String>,
}

/// Full EPG entry (from get_simple_data_table)
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamFullEpgListing {
    #[serde(flatten)]
    pub listing: XtreamEpgListing,
    #[serde(default)]
    pub now_playing: Option<Value>,
    #[serde(default)]
    pub has_archive: Option<Value>,
}

/// EPG listings container
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(bound(deserialize = "L: Deserialize<'de>"))]
pub struct XtreamEpgListings<L> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub epg_listings: Vec<L>,
}
