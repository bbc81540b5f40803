use serde_json::Value;

use super::Serializer;
use crate::error::MapError;
use crate::models::standardized::{
    StandardCategory, StandardChannel, StandardFullEpgListing, StandardEpgListing, StandardMovie,
    StandardMovieListing, StandardProfile, StandardServerInfo, StandardShow, StandardShowListing,
};
use crate::services::mappers::{self, decode, decode_list};
use crate::services::xtream::types::{
    XtreamCategory, XtreamEpgListings, XtreamFullEpgListing, XtreamEpgListing,
};

/// Flat camelCase records with typed values
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardizedSerializer;

impl StandardizedSerializer {
    fn categories(input: Value) -> Result<Vec<StandardCategory>, MapError> {
        decode_list::<XtreamCategory>("category", input)?
            .into_iter()
            .map(mappers::map_category)
            .collect()
    }
}

impl Serializer for StandardizedSerializer {
    const NAME: &'static str = "Standardized";

    type Profile = StandardProfile;
    type ServerInfo = StandardServerInfo;
    type Categories = Vec<StandardCategory>;
    type Channels = Vec<StandardChannel>;
    type Movies = Vec<StandardMovieListing>;
    type Movie = StandardMovie;
    type Shows = Vec<StandardShowListing>;
    type Show = StandardShow;
    type ShortEpg = Vec<StandardEpgListing>;
    type FullEpg = Vec<StandardFullEpgListing>;

    fn profile(&self, input: Value) -> Result<Self::Profile, MapError> {
        mappers::map_profile(decode("profile", input)?)
    }

    fn server_info(&self, input: Value) -> Result<Self::ServerInfo, MapError> {
        mappers::map_server_info(decode("server info", input)?)
    }

    fn channel_categories(&self, input: Value) -> Result<Self::Categories, MapError> {
        Self::categories(input)
    }

    fn movie_categories(&self, input: Value) -> Result<Self::Categories, MapError> {
        Self::categories(input)
    }

    fn show_categories(&self, input: Value) -> Result<Self::Categories, MapError> {
        Self::categories(input)
    }

    fn channels(&self, input: Value) -> Result<Self::Channels, MapError> {
        decode_list("channel", input)?
            .into_iter()
            .map(mappers::map_channel)
            .collect()
    }

    fn movies(&self, input: Value) -> Result<Self::Movies, MapError> {
        decode_list("movie", input)?
            .into_iter()
            .map(mappers::map_movie_listing)
            .collect()
    }

    fn movie(&self, input: Value) -> Result<Self::Movie, MapError> {
        mappers::map_movie(decode("movie", input)?)
    }

    fn shows(&self, input: Value) -> Result<Self::Shows, MapError> {
        decode_list("show", input)?
            .into_iter()
            .map(mappers::map_show_listing)
            .collect()
    }

    fn show(&self, input: Value) -> Result<Self::Show, MapError> {
        Ok(mappers::map_show(decode("show", input)?)?.into())
    }

    fn short_epg(&self, input: Value) -> Result<Self::ShortEpg, MapError> {
        let listings: XtreamEpgListings<XtreamEpgListing> = decode("EPG", input)?;
        listings
            .epg_listings
            .into_iter()
            .map(mappers::map_short_epg_listing)
            .collect()
    }

    fn full_epg(&self, input: Value) -> Result<Self::FullEpg, MapError> {
        let listings: XtreamEpgListings<XtreamFullEpgListing> = decode("EPG", input)?;
        listings
            .epg_listings
            .into_iter()
            .map(mappers::map_full_epg_listing)
            .collect()
    }
}
