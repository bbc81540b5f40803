use serde_json::Value;

use super::Serializer;
use crate::error::MapError;
use crate::models::jsonapi::{Document, IncludedResource, Relationship, Resource, ResourceType};
use crate::models::{
    Category, CategoryKind, Channel, Entity, EpgListing, FullEpgListing, Links, Movie,
    MovieListing, Profile, ServerInfo, Show, ShowGraph,
};
use crate::services::mappers::{self, decode, decode_list};
use crate::services::xtream::types::{
    XtreamCategory, XtreamEpgListing, XtreamEpgListings, XtreamFullEpgListing,
};

/// JSON:API documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonApiSerializer;

impl CategoryKind {
    fn resource_type(self) -> ResourceType {
        match self {
            CategoryKind::Channel => ResourceType::ChannelCategory,
            CategoryKind::Movie => ResourceType::MovieCategory,
            CategoryKind::Show => ResourceType::ShowCategory,
        }
    }
}

/// `categories` relationship, absent when the entity has none
fn categories(kind: CategoryKind, links: &Links) -> Option<Relationship> {
    links
        .category_ids
        .as_ref()
        .filter(|ids| !ids.is_empty())
        .map(|ids| Relationship::many(kind.resource_type(), ids.iter().cloned()))
}

fn category_resources(
    kind: CategoryKind,
    input: Value,
) -> Result<Document<Vec<Resource<Category>>>, MapError> {
    let resource_type = kind.resource_type();
    let data = decode_list::<XtreamCategory>("category", input)?
        .into_iter()
        .map(|category| {
            let Entity {
                id,
                attributes,
                links,
            } = mappers::map_category(category)?;

            Ok(Resource::new(resource_type, id, attributes).relate(
                "parent",
                links.parent_id.map(|parent| Relationship::one(resource_type, parent)),
            ))
        })
        .collect::<Result<Vec<_>, MapError>>()?;

    Ok(Document::new(data))
}

fn show_resource(show: Entity<Show>) -> Resource<Show> {
    let relationship = categories(CategoryKind::Show, &show.links);
    Resource::new(ResourceType::Show, show.id, show.attributes).relate("categories", relationship)
}

fn show_document(graph: ShowGraph) -> Document<Resource<Show>> {
    let ShowGraph {
        show,
        seasons,
        episodes,
    } = graph;
    let show_id = show.id.clone();

    let season_ids: Vec<String> = seasons.iter().map(|s| s.id.clone()).collect();
    let episode_ids: Vec<String> = episodes.iter().map(|e| e.id.clone()).collect();

    let data = show_resource(show)
        .relate("seasons", Some(Relationship::many(ResourceType::Season, season_ids)))
        .relate("episodes", Some(Relationship::many(ResourceType::Episode, episode_ids)));

    let mut included = Vec::with_capacity(seasons.len() + episodes.len());

    for season in seasons {
        let season_episodes = episodes
            .iter()
            .filter(|e| e.links.season_id.as_deref() == Some(season.id.as_str()))
            .map(|e| e.id.clone());

        let resource = Resource::new(ResourceType::Season, season.id.clone(), season.attributes)
            .relate("show", Some(Relationship::one(ResourceType::Show, show_id.clone())))
            .relate("episodes", Some(Relationship::many(ResourceType::Episode, season_episodes)));
        included.push(IncludedResource::Season(resource));
    }

    for episode in episodes {
        let season = episode
            .links
            .season_id
            .map(|id| Relationship::one(ResourceType::Season, id));

        let resource = Resource::new(ResourceType::Episode, episode.id, episode.attributes)
            .relate("season", season)
            .relate("show", Some(Relationship::one(ResourceType::Show, show_id.clone())));
        included.push(IncludedResource::Episode(resource));
    }

    Document::with_included(data, included)
}

fn epg_resource<A>(listing: Entity<A>) -> Resource<A> {
    let channel = listing
        .links
        .channel_id
        .map(|id| Relationship::one(ResourceType::Channel, id));
    Resource::new(ResourceType::EpgListing, listing.id, listing.attributes).relate("channel", channel)
}

impl Serializer for JsonApiSerializer {
    const NAME: &'static str = "JSON:API";

    type Profile = Document<Resource<Profile>>;
    type ServerInfo = Document<Resource<ServerInfo>>;
    type Categories = Document<Vec<Resource<Category>>>;
    type Channels = Document<Vec<Resource<Channel>>>;
    type Movies = Document<Vec<Resource<MovieListing>>>;
    type Movie = Document<Resource<Movie>>;
    type Shows = Document<Vec<Resource<Show>>>;
    type Show = Document<Resource<Show>>;
    type ShortEpg = Document<Vec<Resource<EpgListing>>>;
    type FullEpg = Document<Vec<Resource<FullEpgListing>>>;

    fn profile(&self, input: Value) -> Result<Self::Profile, MapError> {
        let profile = mappers::map_profile(decode("profile", input)?)?;
        Ok(Document::new(Resource::new(
            ResourceType::UserProfile,
            profile.id,
            profile.attributes,
        )))
    }

    fn server_info(&self, input: Value) -> Result<Self::ServerInfo, MapError> {
        let server = mappers::map_server_info(decode("server info", input)?)?;
        Ok(Document::new(Resource::new(
            ResourceType::ServerInfo,
            server.id,
            server.attributes,
        )))
    }

    fn channel_categories(&self, input: Value) -> Result<Self::Categories, MapError> {
        category_resources(CategoryKind::Channel, input)
    }

    fn movie_categories(&self, input: Value) -> Result<Self::Categories, MapError> {
        category_resources(CategoryKind::Movie, input)
    }

    fn show_categories(&self, input: Value) -> Result<Self::Categories, MapError> {
        category_resources(CategoryKind::Show, input)
    }

    fn channels(&self, input: Value) -> Result<Self::Channels, MapError> {
        let data = decode_list("channel", input)?
            .into_iter()
            .map(|raw| {
                let channel = mappers::map_channel(raw)?;
                let relationship = categories(CategoryKind::Channel, &channel.links);
                Ok(Resource::new(ResourceType::Channel, channel.id, channel.attributes)
                    .relate("categories", relationship))
            })
            .collect::<Result<Vec<_>, MapError>>()?;
        Ok(Document::new(data))
    }

    fn movies(&self, input: Value) -> Result<Self::Movies, MapError> {
        let data = decode_list("movie", input)?
            .into_iter()
            .map(|raw| {
                let movie = mappers::map_movie_listing(raw)?;
                let relationship = categories(CategoryKind::Movie, &movie.links);
                Ok(Resource::new(ResourceType::Movie, movie.id, movie.attributes)
                    .relate("categories", relationship))
            })
            .collect::<Result<Vec<_>, MapError>>()?;
        Ok(Document::new(data))
    }

    fn movie(&self, input: Value) -> Result<Self::Movie, MapError> {
        let movie = mappers::map_movie(decode("movie", input)?)?;
        let relationship = categories(CategoryKind::Movie, &movie.links);
        Ok(Document::new(
            Resource::new(ResourceType::Movie, movie.id, movie.attributes)
                .relate("categories", relationship),
        ))
    }

    fn shows(&self, input: Value) -> Result<Self::Shows, MapError> {
        let data = decode_list("show", input)?
            .into_iter()
            .map(|raw| Ok(show_resource(mappers::map_show_listing(raw)?)))
            .collect::<Result<Vec<_>, MapError>>()?;
        Ok(Document::new(data))
    }

    fn show(&self, input: Value) -> Result<Self::Show, MapError> {
        Ok(show_document(mappers::map_show(decode("show", input)?)?))
    }

    fn short_epg(&self, input: Value) -> Result<Self::ShortEpg, MapError> {
        let listings: XtreamEpgListings<XtreamEpgListing> = decode("EPG", input)?;
        let data = listings
            .epg_listings
            .into_iter()
            .map(|raw| Ok(epg_resource(mappers::map_short_epg_listing(raw)?)))
            .collect::<Result<Vec<_>, MapError>>()?;
        Ok(Document::new(data))
    }

    fn full_epg(&self, input: Value) -> Result<Self::FullEpg, MapError> {
        let listings: XtreamEpgListings<XtreamFullEpgListing> = decode("EPG", input)?;
        let data = listings
            .epg_listings
            .into_iter()
            .map(|raw| Ok(epg_resource(mappers::map_full_epg_listing(raw)?)))
            .collect::<Result<Vec<_>, MapError>>()?;
        Ok(Document::new(data))
    }
}
