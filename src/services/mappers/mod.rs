//! Entity mappers
//!
//! Turn provider records into [`Entity`](crate::models::Entity) values.
//! Descriptive fields are coerced leniently; a missing identity field is the
//! only thing that fails a mapping.

mod account;
mod category;
mod channel;
mod epg;
mod movie;
mod show;

pub use account::{map_profile, map_server_info};
pub use category::map_category;
pub use channel::map_channel;
pub use epg::{map_full_epg_listing, map_short_epg_listing};
pub use movie::{map_movie, map_movie_listing};
pub use show::{map_show, map_show_listing, synthesize_seasons};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::MapError;
use crate::services::coerce::to_id;

/// Decode a single provider object
pub fn decode<T: DeserializeOwned>(entity: &'static str, payload: Value) -> Result<T, MapError> {
    match payload {
        Value::Object(_) => Ok(serde_json::from_value(payload)?),
        _ => Err(MapError::UnexpectedShape {
            entity,
            expected: "an object",
        }),
    }
}

/// Decode a provider list; `null` (or an empty body) is an empty list
pub fn decode_list<T: DeserializeOwned>(
    entity: &'static str,
    payload: Value,
) -> Result<Vec<T>, MapError> {
    match payload {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => Ok(serde_json::from_value(payload)?),
        _ => Err(MapError::UnexpectedShape {
            entity,
            expected: "a list",
        }),
    }
}

/// Mandatory id of an entity
pub(crate) fn identity(
    entity: &'static str,
    field: &'static str,
    value: Option<&Value>,
) -> Result<String, MapError> {
    to_id(value).ok_or(MapError::MissingIdentity { entity, field })
}

/// Category ids of a stream, falling back to its single category id
pub(crate) fn category_ids(category_ids: &[String], category_id: Option<&str>) -> Vec<String> {
    if !category_ids.is_empty() {
        return category_ids.to_vec();
    }
    category_id
        .filter(|id| !id.trim().is_empty())
        .map(|id| vec![id.trim().to_string()])
        .unwrap_or_default()
}

/// Minutes to seconds
pub(crate) fn minutes_to_seconds(minutes: Option<&Value>) -> Option<i64> {
    crate::services::coerce::to_number(minutes).map(|m| (m * 60.0).round() as i64)
}
