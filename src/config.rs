use std::env;

use crate::services::serializers::SerializerKind;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Provider
    pub url: String,
    pub username: String,
    pub password: String,

    // Output
    pub preferred_format: String,
    pub serializer: SerializerKind,

    // HTTP
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            // Provider
            url: lookup("XTREAM_URL").unwrap_or_default(),
            username: lookup("XTREAM_USERNAME").unwrap_or_default(),
            password: lookup("XTREAM_PASSWORD").unwrap_or_default(),

            // Output
            preferred_format: lookup("XTREAM_FORMAT").unwrap_or_else(|| "ts".to_string()),
            serializer: lookup("XTREAM_SERIALIZER")
                .unwrap_or_else(|| "none".to_string())
                .parse()
                .unwrap_or_default(),

            // HTTP
            timeout_secs: lookup("XTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .unwrap_or(30),

            // Use VLC user agent to avoid IPTV server blocks
            user_agent: lookup("XTREAM_USER_AGENT")
                .unwrap_or_else(|| "VLC/3.0.20 LibVLC/3.0.20".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
