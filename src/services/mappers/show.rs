use serde_json::Value;

use crate::error::MapError;
use crate::models::{Entity, Episode, Links, Season, Show, ShowGraph};
use crate::services::coerce::{
    non_empty, split_list, to_date, to_epoch_date, to_id, to_integer, to_number,
};
use crate::services::keys::normalize_keys;
use crate::services::xtream::types::{
    EpisodeGroups, XtreamEpisode, XtreamSeason, XtreamShow, XtreamShowListing,
};

use super::{category_ids, identity, minutes_to_seconds};

/// Series listing entry
pub fn map_show_listing(show: XtreamShowListing) -> Result<Entity<Show>, MapError> {
    let id = identity("show", "series_id", show.series_id.as_ref())?;
    let categories = category_ids(&show.category_ids, show.category_id.as_deref());

    Ok(Entity::new(id, show_attributes(show)).with_links(Links {
        category_ids: Some(categories),
        ..Default::default()
    }))
}

/// Series detail with its seasons and episodes
///
/// When the provider sends no seasons they are synthesized from the episode
/// groups, see [`synthesize_seasons`]. Each episode is linked to the season
/// whose number matches its own, or to its bare season number when no
/// season matches.
pub fn map_show(show: XtreamShow) -> Result<ShowGraph, MapError> {
    let XtreamShow {
        seasons,
        info,
        episodes,
    } = show;

    let show = map_show_listing(info)?;
    let show_id = show.id.clone();

    let raw_seasons = if seasons.is_empty() {
        synthesize_seasons(&episodes)
    } else {
        seasons
    };

    let mut seasons = raw_seasons
        .into_iter()
        .map(|season| map_season(season, &show_id))
        .collect::<Result<Vec<_>, _>>()?;
    seasons.sort_by_key(|season| season.attributes.number.unwrap_or(i64::MAX));

    let episodes = episodes
        .0
        .into_iter()
        .flat_map(|(key, group)| group.into_iter().map(move |episode| (key.clone(), episode)))
        .map(|(key, episode)| map_episode(episode, &key, &show_id, &seasons))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ShowGraph {
        show,
        seasons,
        episodes,
    })
}

/// Build one season per non-empty episode group
///
/// The season number (and id) is the group key; cover, air date and rating
/// are taken from the group's first episode.
pub fn synthesize_seasons(episodes: &EpisodeGroups) -> Vec<XtreamSeason> {
    episodes
        .iter()
        .filter(|(_, group)| !group.is_empty())
        .map(|(key, group)| {
            let donor = group.first().and_then(|e| e.info.as_ref());
            let number = key
                .trim()
                .parse::<i64>()
                .ok()
                .or_else(|| group.first().and_then(|e| to_integer(e.season.as_ref())));

            XtreamSeason {
                id: Some(number.map(Value::from).unwrap_or_else(|| Value::from(key.clone()))),
                name: Some(format!("Season {}", key)),
                episode_count: Some(Value::from(group.len())),
                overview: Some(String::new()),
                air_date: donor.and_then(|i| i.release_date()).map(str::to_string),
                cover: donor.and_then(|i| i.movie_image.clone()),
                cover_big: donor.and_then(|i| i.movie_image.clone()),
                cover_tmdb: None,
                season_number: number.map(Value::from),
                vote_average: donor.and_then(|i| i.rating.clone()),
            }
        })
        .collect()
}

fn show_attributes(show: XtreamShowListing) -> Show {
    let release_date = [
        show.release_date.as_deref(),
        show.release_date_camel.as_deref(),
        show.releasedate.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|d| !d.trim().is_empty());

    Show {
        release_date: to_date(release_date),
        name: show.name,
        title: show.title,
        year: non_empty(show.year),
        plot: non_empty(show.plot),
        poster: non_empty(show.cover),
        cover: show.backdrop_path.first().cloned(),
        backdrops: show.backdrop_path,
        vote_average: to_number(show.rating.as_ref()),
        duration: minutes_to_seconds(show.episode_run_time.as_ref()),
        youtube_id: non_empty(show.youtube_trailer),
        cast: split_list(show.cast.as_deref()),
        director: split_list(show.director.as_deref()),
        genre: split_list(show.genre.as_deref()),
        updated_at: to_epoch_date(show.last_modified.as_ref()),
    }
}

fn map_season(season: XtreamSeason, show_id: &str) -> Result<Entity<Season>, MapError> {
    let number = to_integer(season.season_number.as_ref());
    let id = to_id(season.id.as_ref())
        .or_else(|| number.map(|n| n.to_string()))
        .ok_or(MapError::MissingIdentity {
            entity: "season",
            field: "id",
        })?;

    let cover = non_empty(season.cover_big)
        .or(non_empty(season.cover_tmdb))
        .or(non_empty(season.cover));

    let attributes = Season {
        name: season.name,
        number,
        overview: season.overview,
        episode_count: to_integer(season.episode_count.as_ref()),
        vote_average: to_number(season.vote_average.as_ref()),
        cover,
        release_date: to_date(season.air_date.as_deref()),
    };

    Ok(Entity::new(id, attributes).with_links(Links {
        show_id: Some(show_id.to_string()),
        ..Default::default()
    }))
}

fn map_episode(
    episode: XtreamEpisode,
    group_key: &str,
    show_id: &str,
    seasons: &[Entity<Season>],
) -> Result<Entity<Episode>, MapError> {
    let id = identity("episode", "id", episode.id.as_ref())?;
    let info = episode.info.unwrap_or_default();

    let season_number = to_integer(episode.season.as_ref())
        .or_else(|| to_integer(info.season.as_ref()))
        .or_else(|| group_key.trim().parse().ok());

    let season_id = season_number
        .and_then(|n| seasons.iter().find(|s| s.attributes.number == Some(n)))
        .map(|s| s.id.clone())
        .or_else(|| season_number.map(|n| n.to_string()))
        .unwrap_or_else(|| group_key.to_string());

    let attributes = Episode {
        number: to_integer(episode.episode_num.as_ref()),
        title: episode.title,
        release_date: to_date(info.release_date()),
        plot: non_empty(info.plot),
        poster: non_empty(info.movie_image),
        cover: non_empty(info.cover_big),
        vote_average: to_number(info.rating.as_ref()),
        tmdb_id: to_id(info.tmdb_id.as_ref()),
        duration: to_integer(info.duration_secs.as_ref()),
        duration_formatted: non_empty(info.duration),
        bitrate: to_integer(info.bitrate.as_ref()),
        container_extension: non_empty(episode.container_extension),
        custom_sid: non_empty(episode.custom_sid),
        direct_source: non_empty(episode.direct_source),
        subtitles: episode.subtitles,
        url: episode.url,
        video: info.video.map(|v| normalize_keys(v, true)),
        audio: info.audio.map(|v| normalize_keys(v, true)),
        created_at: to_epoch_date(episode.added.as_ref()),
    };

    Ok(Entity::new(id, attributes).with_links(Links {
        show_id: Some(show_id.to_string()),
        season_id: Some(season_id),
        ..Default::default()
    }))
}
