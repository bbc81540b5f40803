use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::MapError;
use crate::models::{Entity, EpgListing, FullEpgListing, Links};
use crate::services::coerce::{decode_base64_text, epoch_str_to_date, non_empty, to_bool, to_date, to_epoch_date};
use crate::services::xtream::types::{XtreamEpgListing, XtreamFullEpgListing};

use super::identity;

/// Short EPG entry; title and description are base64 on the wire
pub fn map_short_epg_listing(listing: XtreamEpgListing) -> Result<Entity<EpgListing>, MapError> {
    let id = identity("EPG listing", "id", listing.id.as_ref())?;
    let channel_id = non_empty(listing.channel_id.clone());

    Ok(Entity::new(id, listing_attributes(listing, EndEncoding::Epoch)).with_links(Links {
        channel_id,
        ..Default::default()
    }))
}

/// Full EPG entry with playing/archive flags
pub fn map_full_epg_listing(
    listing: XtreamFullEpgListing,
) -> Result<Entity<FullEpgListing>, MapError> {
    let XtreamFullEpgListing {
        listing,
        now_playing,
        has_archive,
    } = listing;

    let id = identity("EPG listing", "id", listing.id.as_ref())?;
    let channel_id = non_empty(listing.channel_id.clone());

    let attributes = FullEpgListing {
        listing: listing_attributes(listing, EndEncoding::Date),
        now_playing: to_bool(now_playing.as_ref()),
        has_archive: to_bool(has_archive.as_ref()),
    };

    Ok(Entity::new(id, attributes).with_links(Links {
        channel_id,
        ..Default::default()
    }))
}

/// How an endpoint encodes the listing `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EndEncoding {
    /// get_short_epg: epoch seconds
    Epoch,
    /// get_simple_data_table: date string
    Date,
}

fn listing_attributes(listing: XtreamEpgListing, encoding: EndEncoding) -> EpgListing {
    let end = match encoding {
        EndEncoding::Epoch => epoch_str_to_date(listing.end.as_deref()),
        EndEncoding::Date => to_date(listing.end.as_deref()),
    };

    EpgListing {
        start: with_fallback(
            to_date(listing.start.as_deref()),
            listing.start.as_deref(),
            listing.start_timestamp.as_ref(),
        ),
        end: with_fallback(end, listing.end.as_deref(), listing.stop_timestamp.as_ref()),
        epg_id: non_empty(listing.epg_id),
        title: listing.title.map(|t| decode_base64_text(&t)),
        description: listing.description.map(|d| decode_base64_text(&d)),
        language: non_empty(listing.lang),
    }
}

/// The `*_timestamp` field stands in only when the text field is absent
fn with_fallback(
    parsed: Option<DateTime<Utc>>,
    text: Option<&str>,
    timestamp: Option<&Value>,
) -> Option<DateTime<Utc>> {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => parsed,
        _ => to_epoch_date(timestamp),
    }
}
