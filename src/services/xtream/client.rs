//! Xtream Codes API Client
//!
//! HTTP client for making requests to Xtream Codes Player API v2.
//!
//! The client is generic over a [`Serializer`]: every call fetches the raw
//! provider payload, attaches stream URLs, applies pagination and hands the
//! result to the serializer.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error};

use super::filter::Filter;
use super::stream_url::StreamDescriptor;
use super::types::*;
use crate::config::Config;
use crate::error::{MapError, Result, XtreamError};
use crate::services::serializers::{RawSerializer, Serializer};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// VLC user agent avoids IPTV server blocks
const DEFAULT_USER_AGENT: &str = "VLC/3.0.20 LibVLC/3.0.20";

/// Actions that need the user profile (allowed output formats) first
const PROFILE_ACTIONS: [&str; 4] = [
    "get_live_streams",
    "get_vod_streams",
    "get_vod_info",
    "get_series_info",
];

/// Xtream API Client
///
/// Provides methods for all Xtream Player API v2 endpoints.
pub struct XtreamClient<S: Serializer = RawSerializer> {
    http: Client,
    credentials: XtreamCredentials,
    api_url: String,
    preferred_format: String,
    serializer: S,
    user_profile: RwLock<Option<XtreamUserProfile>>,
}

impl XtreamClient<RawSerializer> {
    /// Create a client returning provider payloads unchanged
    pub fn new(credentials: XtreamCredentials) -> Result<Self> {
        Self::with_serializer(credentials, RawSerializer)
    }
}

impl<S: Serializer> XtreamClient<S> {
    /// Create a client with an output shape
    pub fn with_serializer(credentials: XtreamCredentials, serializer: S) -> Result<Self> {
        Self::build(
            credentials,
            serializer,
            "ts",
            DEFAULT_TIMEOUT_SECS,
            DEFAULT_USER_AGENT,
        )
    }

    /// Create from configuration
    pub fn from_config(config: &Config, serializer: S) -> Result<Self> {
        let credentials = XtreamCredentials {
            server: config.url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        };
        Self::build(
            credentials,
            serializer,
            &config.preferred_format,
            config.timeout_secs,
            &config.user_agent,
        )
    }

    fn build(
        credentials: XtreamCredentials,
        serializer: S,
        preferred_format: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self> {
        let server = credentials.server.trim();
        if server.is_empty() {
            return Err(XtreamError::Config("The Xtream URL is required".to_string()));
        }

        let username = credentials.username.trim();
        let password = credentials.password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(XtreamError::Config(
                "The authentication credentials are required".to_string(),
            ));
        }

        let server = server.trim_end_matches('/');
        url::Url::parse(server).map_err(|e| {
            XtreamError::Config(format!("Invalid Xtream URL '{}': {}", server, e))
        })?;

        let credentials = XtreamCredentials {
            server: server.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            http,
            api_url: credentials.api_url(),
            credentials,
            preferred_format: preferred_format.trim().to_string(),
            serializer,
            user_profile: RwLock::new(None),
        })
    }

    /// Name of the output shape
    pub fn serializer_name(&self) -> &'static str {
        S::NAME
    }

    pub fn credentials(&self) -> &XtreamCredentials {
        &self.credentials
    }

    /// Make a GET request for an action, prefetching the profile when needed
    async fn request(&self, action: &str) -> Result<Value> {
        let name = action.split('&').next().unwrap_or(action);
        if PROFILE_ACTIONS.contains(&name) {
            self.ensure_profile().await?;
        }
        self.fetch(action).await
    }

    async fn fetch(&self, action: &str) -> Result<Value> {
        let url = format!("{}&action={}", self.api_url, action);

        debug!("Xtream API request: {}", action);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(XtreamError::Http {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("HTTP error")
                    .to_string(),
            });
        }

        let text = response.text().await?;

        // Some panels answer an empty body instead of an empty list
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            error!(
                "Failed to parse Xtream response for action '{}': {}",
                action, e
            );
            debug!("Response text: {}", text.chars().take(500).collect::<String>());
            XtreamError::Parse(e.to_string())
        })
    }

    /// Fetch and cache the user profile once
    async fn ensure_profile(&self) -> Result<()> {
        if self.user_profile.read().await.is_some() {
            return Ok(());
        }

        let mut cached = self.user_profile.write().await;
        if cached.is_none() {
            let response = self.fetch("get_profile").await?;
            *cached = Some(user_profile(&response)?);
            debug!("Xtream user profile cached");
        }
        Ok(())
    }

    async fn allowed_formats(&self) -> Vec<String> {
        self.user_profile
            .read()
            .await
            .as_ref()
            .map(|p| p.allowed_output_formats.clone())
            .unwrap_or_default()
    }

    fn url_for(&self, stream: &StreamDescriptor, allowed_formats: &[String]) -> String {
        self.credentials
            .stream_url(stream, &self.preferred_format, allowed_formats)
    }

    /// Playable URL of a stream, honoring the account's allowed formats
    pub async fn stream_url(&self, stream: &StreamDescriptor) -> Result<String> {
        if matches!(stream, StreamDescriptor::Channel { .. }) {
            self.ensure_profile().await?;
        }
        let allowed = self.allowed_formats().await;
        Ok(self.url_for(stream, &allowed))
    }

    /// Fetch a listing, paginate it and attach stream URLs
    async fn listing(
        &self,
        action: &str,
        entity: &'static str,
        filter: &Filter,
        descriptor: Option<fn(&Value) -> Option<StreamDescriptor>>,
    ) -> Result<Value> {
        let response = self.request(action).await?;
        let items = match response {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            _ => {
                return Err(MapError::UnexpectedShape {
                    entity,
                    expected: "a list",
                }
                .into())
            }
        };

        let mut items = filter.paginate(items);

        if let Some(descriptor) = descriptor {
            let allowed = self.allowed_formats().await;
            for item in &mut items {
                if let Some(stream) = descriptor(item) {
                    attach_url(item, self.url_for(&stream, &allowed));
                }
            }
        }

        Ok(Value::Array(items))
    }

    // ========================================================================
    // Account
    // ========================================================================

    /// Get the user profile
    pub async fn get_profile(&self) -> Result<S::Profile> {
        let mut response = self.request("get_profile").await?;

        if let Ok(profile) = user_profile(&response) {
            *self.user_profile.write().await = Some(profile);
        }

        Ok(self.serializer.profile(take_field(&mut response, "user_info"))?)
    }

    /// Get server information
    pub async fn get_server_info(&self) -> Result<S::ServerInfo> {
        let mut response = self.request("get_server_info").await?;
        Ok(self
            .serializer
            .server_info(take_field(&mut response, "server_info"))?)
    }

    // ========================================================================
    // Categories
    // ========================================================================

    /// Get live stream categories
    pub async fn get_channel_categories(&self) -> Result<S::Categories> {
        let response = self.request("get_live_categories").await?;
        Ok(self.serializer.channel_categories(response)?)
    }

    /// Get VOD categories
    pub async fn get_movie_categories(&self) -> Result<S::Categories> {
        let response = self.request("get_vod_categories").await?;
        Ok(self.serializer.movie_categories(response)?)
    }

    /// Get series categories
    pub async fn get_show_categories(&self) -> Result<S::Categories> {
        let response = self.request("get_series_categories").await?;
        Ok(self.serializer.show_categories(response)?)
    }

    // ========================================================================
    // Live Streams
    // ========================================================================

    /// Get live streams, optionally by category and page
    pub async fn get_channels(&self, filter: &Filter) -> Result<S::Channels> {
        let action = format!("get_live_streams{}", filter.category_param());
        let channels = self
            .listing(&action, "channel", filter, Some(StreamDescriptor::from_channel))
            .await?;
        Ok(self.serializer.channels(channels)?)
    }

    // ========================================================================
    // VOD (Movies)
    // ========================================================================

    /// Get VOD streams, optionally by category and page
    pub async fn get_movies(&self, filter: &Filter) -> Result<S::Movies> {
        let action = format!("get_vod_streams{}", filter.category_param());
        let movies = self
            .listing(&action, "movie", filter, Some(StreamDescriptor::from_movie_listing))
            .await?;
        Ok(self.serializer.movies(movies)?)
    }

    /// Get detailed VOD info
    pub async fn get_movie(&self, movie_id: &str) -> Result<S::Movie> {
        let action = format!("get_vod_info&vod_id={}", urlencoding::encode(movie_id.trim()));
        let mut movie = self.request(&action).await?;

        let missing = match movie.get("info") {
            None | Some(Value::Null) => true,
            Some(Value::Array(info)) => info.is_empty(),
            Some(_) => false,
        };
        if missing {
            return Err(XtreamError::NotFound("Movie"));
        }

        if let Some(stream) = StreamDescriptor::from_movie(&movie) {
            let allowed = self.allowed_formats().await;
            attach_url(&mut movie, self.url_for(&stream, &allowed));
        }

        Ok(self.serializer.movie(movie)?)
    }

    // ========================================================================
    // Series
    // ========================================================================

    /// Get series, optionally by category and page
    pub async fn get_shows(&self, filter: &Filter) -> Result<S::Shows> {
        let action = format!("get_series{}", filter.category_param());
        let shows = self.listing(&action, "show", filter, None).await?;
        Ok(self.serializer.shows(shows)?)
    }

    /// Get detailed series info with seasons and episodes
    pub async fn get_show(&self, show_id: &str) -> Result<S::Show> {
        let show_id = show_id.trim();
        let action = format!("get_series_info&series_id={}", urlencoding::encode(show_id));
        let mut show = self.request(&action).await?;

        let found = matches!(
            show.get("info"),
            Some(Value::Object(info)) if !matches!(info.get("name"), Some(Value::Null))
        );
        if !found {
            return Err(XtreamError::NotFound("Show"));
        }

        if let Some(episodes) = show.get_mut("episodes") {
            let allowed = self.allowed_formats().await;
            for_each_episode(episodes, |episode| {
                if let Some(stream) = StreamDescriptor::from_episode(episode) {
                    attach_url(episode, self.url_for(&stream, &allowed));
                }
            });
        }

        Ok(self.serializer.show(show)?)
    }

    // ========================================================================
    // EPG
    // ========================================================================

    /// Get short EPG for a stream (next few programmes)
    pub async fn get_short_epg(&self, channel_id: &str, limit: Option<u32>) -> Result<S::ShortEpg> {
        let mut action = format!(
            "get_short_epg&stream_id={}",
            urlencoding::encode(channel_id.trim())
        );
        if let Some(l) = limit {
            action.push_str(&format!("&limit={}", l));
        }
        let epg = self.request(&action).await?;
        Ok(self.serializer.short_epg(epg)?)
    }

    /// Get the full EPG for a stream
    pub async fn get_full_epg(&self, channel_id: &str) -> Result<S::FullEpg> {
        let action = format!(
            "get_simple_data_table&stream_id={}",
            urlencoding::encode(channel_id.trim())
        );
        let epg = self.request(&action).await?;
        Ok(self.serializer.full_epg(epg)?)
    }
}

fn user_profile(response: &Value) -> std::result::Result<XtreamUserProfile, MapError> {
    let profile: XtreamProfileResponse = serde_json::from_value(response.clone())?;
    Ok(profile.user_info)
}

fn take_field(value: &mut Value, field: &str) -> Value {
    value.get_mut(field).map(Value::take).unwrap_or(Value::Null)
}

fn attach_url(item: &mut Value, url: String) {
    if let Value::Object(object) = item {
        object.insert("url".to_string(), Value::String(url));
    }
}

/// Visit every episode of an `episodes` payload (keyed object or arrays)
fn for_each_episode<F>(episodes: &mut Value, mut visit: F)
where
    F: FnMut(&mut Value),
{
    fn walk<F: FnMut(&mut Value)>(value: &mut Value, visit: &mut F) {
        if matches!(value, Value::Object(map) if map.contains_key("id")) {
            visit(value);
            return;
        }
        match value {
            Value::Object(groups) => {
                for group in groups.values_mut() {
                    walk(group, visit);
                }
            }
            Value::Array(items) => {
                for item in items {
                    walk(item, visit);
                }
            }
            _ => {}
        }
    }
    walk(episodes, &mut visit);
}
