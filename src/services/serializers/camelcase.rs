use serde_json::Value;

use super::Serializer;
use crate::error::MapError;
use crate::services::keys::normalize_keys;

/// Provider payloads with camelCase keys
///
/// Lists and account records are converted one level deep; detail and EPG
/// payloads are converted recursively. Values are left as sent (EPG text
/// stays base64).
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseSerializer;

impl Serializer for CamelCaseSerializer {
    const NAME: &'static str = "Camel Case";

    type Profile = Value;
    type ServerInfo = Value;
    type Categories = Value;
    type Channels = Value;
    type Movies = Value;
    type Movie = Value;
    type Shows = Value;
    type Show = Value;
    type ShortEpg = Value;
    type FullEpg = Value;

    fn profile(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, false))
    }

    fn server_info(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, false))
    }

    fn channel_categories(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, false))
    }

    fn movie_categories(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, false))
    }

    fn show_categories(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, false))
    }

    fn channels(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, false))
    }

    fn movies(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, false))
    }

    fn movie(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, true))
    }

    fn shows(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, false))
    }

    fn show(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, true))
    }

    fn short_epg(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, true))
    }

    fn full_epg(&self, input: Value) -> Result<Value, MapError> {
        Ok(normalize_keys(input, true))
    }
}
