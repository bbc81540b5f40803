//! Output shapes
//!
//! A [`Serializer`] turns the raw payload of each provider call into one
//! output shape. The client is generic over it, so the output type of every
//! call is known statically.
//!
//! # Example
//!
//! ```rust,ignore
//! use xtream_api::{JsonApiSerializer, XtreamClient, XtreamCredentials};
//!
//! let client = XtreamClient::with_serializer(credentials, JsonApiSerializer)?;
//! let document = client.get_show("3001").await?;
//! println!("{} seasons", document.data.relationship("seasons").map_or(0, |r| r.ids().len()));
//! ```

mod camelcase;
mod jsonapi;
mod raw;
mod standardized;

pub use camelcase::CamelCaseSerializer;
pub use jsonapi::JsonApiSerializer;
pub use raw::RawSerializer;
pub use standardized::StandardizedSerializer;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::MapError;

/// One output shape for every provider call
///
/// Each method receives the provider payload of the matching call (after
/// pagination and stream URL attachment) and returns the shaped output.
pub trait Serializer: Send + Sync + 'static {
    /// Shape name (e.g., "none", "JSON:API")
    const NAME: &'static str;

    type Profile: Serialize + Send;
    type ServerInfo: Serialize + Send;
    type Categories: Serialize + Send;
    type Channels: Serialize + Send;
    type Movies: Serialize + Send;
    type Movie: Serialize + Send;
    type Shows: Serialize + Send;
    type Show: Serialize + Send;
    type ShortEpg: Serialize + Send;
    type FullEpg: Serialize + Send;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// `user_info` of get_profile
    fn profile(&self, input: Value) -> Result<Self::Profile, MapError>;

    /// `server_info` of get_profile
    fn server_info(&self, input: Value) -> Result<Self::ServerInfo, MapError>;

    fn channel_categories(&self, input: Value) -> Result<Self::Categories, MapError>;

    fn movie_categories(&self, input: Value) -> Result<Self::Categories, MapError>;

    fn show_categories(&self, input: Value) -> Result<Self::Categories, MapError>;

    fn channels(&self, input: Value) -> Result<Self::Channels, MapError>;

    fn movies(&self, input: Value) -> Result<Self::Movies, MapError>;

    fn movie(&self, input: Value) -> Result<Self::Movie, MapError>;

    fn shows(&self, input: Value) -> Result<Self::Shows, MapError>;

    fn show(&self, input: Value) -> Result<Self::Show, MapError>;

    fn short_epg(&self, input: Value) -> Result<Self::ShortEpg, MapError>;

    fn full_epg(&self, input: Value) -> Result<Self::FullEpg, MapError>;
}

/// Shape selected at runtime (config, CLI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializerKind {
    #[default]
    Raw,
    CamelCase,
    Standardized,
    JsonApi,
}

impl SerializerKind {
    pub fn name(&self) -> &'static str {
        match self {
            SerializerKind::Raw => RawSerializer::NAME,
            SerializerKind::CamelCase => CamelCaseSerializer::NAME,
            SerializerKind::Standardized => StandardizedSerializer::NAME,
            SerializerKind::JsonApi => JsonApiSerializer::NAME,
        }
    }
}

impl fmt::Display for SerializerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SerializerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "raw" => Ok(SerializerKind::Raw),
            "camelcase" | "camel-case" | "camel case" => Ok(SerializerKind::CamelCase),
            "standardized" => Ok(SerializerKind::Standardized),
            "jsonapi" | "json:api" | "json-api" => Ok(SerializerKind::JsonApi),
            other => Err(format!("Unknown serializer: {}", other)),
        }
    }
}
