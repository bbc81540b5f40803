use serde_json::Value;

use super::Serializer;
use crate::error::MapError;

/// Provider payloads returned unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct RawSerializer;

impl Serializer for RawSerializer {
    const NAME: &'static str = "none";

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
        Ok(input)
    }

    fn server_info(&self, input: Value) -> Result<Value, MapError> {
        Ok(input)
    }

    fn channel_categories(&self, input: Value) -> Result<Value, MapError> {
        Ok(input)
    }

    fn movie_categories(&self, input: Value) -> Result<Value, MapError> {
        Ok(input)
    }

    fn show_categories(&self, input: Value) -> Result<Value, MapError> {
        Ok(input)
    }

    fn channels(&self, input: Value) -> Result<Value, MapError> {
        Ok(input)
    }

    fn movies(&self, input: Value) -> Result<Value, MapError> {
        Ok(input)
    }

    fn movie(&self, input: Value) -> Result<Value, MapError> {
        Ok(input)
    }

    fn shows(&self, input: Value) -> Result<Value, MapError> {
        Ok(input)
    }

    fn show(&self, input: Value) -> Result<Value, MapError> {
        Ok(input)
    }

    fn short_epg(&self, input: Value) -> Result<Value, MapError> {
        Ok(input)
    }

    fn full_epg(&self, input: Value) -> Result<Value, MapError> {
        Ok(input)
    }
}
