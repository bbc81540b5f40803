//! Standardized output records
//!
//! Flat camelCase records: the entity id, its attributes and its link ids
//! side by side. A show detail nests its seasons, and each season nests the
//! episodes that belong to it.

use serde::Serialize;

use super::entity::{
    Category, Channel, Entity, EpgListing, Episode, FullEpgListing, Movie, MovieListing, Profile,
    Season, ServerInfo, Show, ShowGraph,
};

pub type StandardProfile = Entity<Profile>;
pub type StandardServerInfo = Entity<ServerInfo>;
pub type StandardCategory = Entity<Category>;
pub type StandardChannel = Entity<Channel>;
pub type StandardMovieListing = Entity<MovieListing>;
pub type StandardMovie = Entity<Movie>;
pub type StandardShowListing = Entity<Show>;
pub type StandardEpisode = Entity<Episode>;
pub type StandardEpgListing = Entity<EpgListing>;
pub type StandardFullEpgListing = Entity<FullEpgListing>;

/// Show detail with seasons nested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardShow {
    #[serde(flatten)]
    pub show: Entity<Show>,
    pub seasons: Vec<StandardSeason>,
}

/// Season with its episodes nested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardSeason {
    #[serde(flatten)]
    pub season: Entity<Season>,
    pub episodes: Vec<StandardEpisode>,
}

/// Episodes are nested under the season whose id equals their `season_id`;
/// an episode whose season id matches no season is left out.
impl From<ShowGraph> for StandardShow {
    fn from(graph: ShowGraph) -> Self {
        let ShowGraph {
            show,
            seasons,
            episodes,
        } = graph;

        let seasons = seasons
            .into_iter()
            .map(|season| {
                let episodes = episodes
                    .iter()
                    .filter(|e| e.links.season_id.as_deref() == Some(season.id.as_str()))
                    .cloned()
                    .collect();
                StandardSeason { season, episodes }
            })
            .collect();

        Self { show, seasons }
    }
}
