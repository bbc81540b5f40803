use crate::error::MapError;
use crate::models::{Entity, Links, Movie, MovieListing, Rating};
use crate::services::coerce::{non_empty, split_list, to_date, to_epoch_date, to_id, to_integer, to_number};
use crate::services::xtream::types::{XtreamMovie, XtreamMovieListing};

use super::{category_ids, identity, minutes_to_seconds};

/// VOD listing entry
pub fn map_movie_listing(movie: XtreamMovieListing) -> Result<Entity<MovieListing>, MapError> {
    let id = identity("movie", "stream_id", movie.stream_id.as_ref())?;
    let categories = category_ids(&movie.category_ids, movie.category_id.as_deref());

    let attributes = MovieListing {
        name: movie.name,
        title: movie.title,
        year: non_empty(movie.year),
        plot: non_empty(movie.plot),
        poster: non_empty(movie.stream_icon),
        vote_average: to_number(movie.rating.as_ref()),
        duration: minutes_to_seconds(movie.episode_run_time.as_ref()),
        release_date: to_date(movie.release_date.as_deref()),
        youtube_id: non_empty(movie.youtube_trailer),
        genre: split_list(movie.genre.as_deref()),
        cast: split_list(movie.cast.as_deref()),
        director: split_list(movie.director.as_deref()),
        container_extension: non_empty(movie.container_extension),
        custom_sid: non_empty(movie.custom_sid),
        direct_source: non_empty(movie.direct_source),
        url: movie.url,
        created_at: to_epoch_date(movie.added.as_ref()),
    };

    Ok(Entity::new(id, attributes).with_links(Links {
        category_ids: Some(categories),
        ..Default::default()
    }))
}

/// VOD detail
///
/// `movie_data` owns identity, categories and container; `info` owns the
/// descriptive fields and wins where both carry the same one.
pub fn map_movie(movie: XtreamMovie) -> Result<Entity<Movie>, MapError> {
    let data = movie.movie_data;
    let info = movie.info.unwrap_or_default();

    let id = identity("movie", "movie_data.stream_id", data.stream_id.as_ref())?;
    let categories = category_ids(&data.category_ids, data.category_id.as_deref());

    let release_date = [info.release_date.as_deref(), info.releasedate.as_deref()]
        .into_iter()
        .flatten()
        .find(|d| !d.trim().is_empty());

    let attributes = Movie {
        name: non_empty(info.name).or(data.name),
        title: non_empty(info.title).or(data.title),
        year: non_empty(info.year).or(non_empty(data.year)),
        original_name: non_empty(info.o_name),
        information_url: non_empty(info.kinopoisk_url),
        tmdb_id: to_id(info.tmdb_id.as_ref()),
        cover: non_empty(info.cover_big),
        poster: non_empty(info.movie_image),
        backdrops: info.backdrop_path,
        release_date: to_date(release_date),
        youtube_id: non_empty(info.youtube_trailer),
        director: split_list(info.director.as_deref()),
        actors: split_list(info.actors.as_deref()),
        cast: split_list(info.cast.as_deref()),
        genre: split_list(info.genre.as_deref()),
        description: non_empty(info.description),
        plot: non_empty(info.plot),
        country: non_empty(info.country),
        rating: Rating {
            mpaa: non_empty(info.mpaa_rating),
            age: to_integer(info.age.as_ref()),
        },
        vote_average: to_number(info.rating.as_ref()),
        duration: to_integer(info.duration_secs.as_ref()),
        duration_formatted: non_empty(info.duration),
        bitrate: to_integer(info.bitrate.as_ref()),
        subtitles: info.subtitles,
        container_extension: non_empty(data.container_extension),
        custom_sid: non_empty(data.custom_sid),
        direct_source: non_empty(data.direct_source),
        url: movie.url,
        created_at: to_epoch_date(data.added.as_ref()),
    };

    Ok(Entity::new(id, attributes).with_links(Links {
        category_ids: Some(categories),
        ..Default::default()
    }))
}
