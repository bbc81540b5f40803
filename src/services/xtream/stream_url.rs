//! Playable stream URLs
//!
//! ```text
//! {server}/live/{user}/{pass}/{stream_id}.{format}
//! {server}/timeshift/{user}/{pass}/{minutes}/{YYYY-MM-DD:HH-MM}/{stream_id}.{format}
//! {server}/movie/{user}/{pass}/{stream_id}.{extension}
//! {server}/series/{user}/{pass}/{episode_id}.{extension}
//! ```

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

use super::types::XtreamCredentials;
use crate::services::coerce::to_id;

/// Catch-up window of a live channel
#[derive(Debug, Clone, PartialEq)]
pub struct Timeshift {
    pub start: DateTime<Utc>,
    pub duration_minutes: u32,
}

/// What to build a URL for
#[derive(Debug, Clone, PartialEq)]
pub enum StreamDescriptor {
    Channel {
        id: String,
        timeshift: Option<Timeshift>,
    },
    Movie {
        id: String,
        extension: String,
    },
    Episode {
        id: String,
        extension: String,
    },
}

impl StreamDescriptor {
    /// From a get_live_streams entry
    pub fn from_channel(channel: &Value) -> Option<Self> {
        Some(StreamDescriptor::Channel {
            id: to_id(channel.get("stream_id"))?,
            timeshift: None,
        })
    }

    /// From a get_vod_streams entry
    pub fn from_movie_listing(movie: &Value) -> Option<Self> {
        Some(StreamDescriptor::Movie {
            id: to_id(movie.get("stream_id"))?,
            extension: extension(movie.get("container_extension"))?,
        })
    }

    /// From a get_vod_info payload
    pub fn from_movie(movie: &Value) -> Option<Self> {
        let data = movie.get("movie_data")?;
        Some(StreamDescriptor::Movie {
            id: to_id(data.get("stream_id"))?,
            extension: extension(data.get("container_extension"))?,
        })
    }

    /// From an episode of a get_series_info payload
    pub fn from_episode(episode: &Value) -> Option<Self> {
        Some(StreamDescriptor::Episode {
            id: to_id(episode.get("id"))?,
            extension: extension(episode.get("container_extension"))?,
        })
    }
}

fn extension(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
}

/// Pick the live output format
///
/// The preferred format is used when the account allows it (or when the
/// account lists no formats); otherwise the first allowed format. `rtmp`
/// is served as `ts`.
pub fn output_format(preferred: &str, allowed: &[String]) -> String {
    let format = if allowed.is_empty() || allowed.iter().any(|f| f == preferred) {
        preferred
    } else {
        warn!(
            "Output format '{}' not allowed for this account, using '{}'",
            preferred, allowed[0]
        );
        allowed[0].as_str()
    };

    if format == "rtmp" {
        "ts".to_string()
    } else {
        format.to_string()
    }
}

impl XtreamCredentials {
    /// Build the playable URL of a stream
    pub fn stream_url(
        &self,
        stream: &StreamDescriptor,
        preferred_format: &str,
        allowed_formats: &[String],
    ) -> String {
        match stream {
            StreamDescriptor::Channel { id, timeshift } => {
                let format = output_format(preferred_format, allowed_formats);
                match timeshift {
                    Some(shift) => format!(
                        "{}/timeshift/{}/{}/{}/{}/{}.{}",
                        self.server,
                        self.username,
                        self.password,
                        shift.duration_minutes,
                        shift.start.format("%Y-%m-%d:%H-%M"),
                        id,
                        format
                    ),
                    None => format!(
                        "{}/live/{}/{}/{}.{}",
                        self.server, self.username, self.password, id, format
                    ),
                }
            }
            StreamDescriptor::Movie { id, extension } => format!(
                "{}/movie/{}/{}/{}.{}",
                self.server, self.username, self.password, id, extension
            ),
            StreamDescriptor::Episode { id, extension } => format!(
                "{}/series/{}/{}/{}.{}",
                self.server, self.username, self.password, id, extension
            ),
        }
    }
}
