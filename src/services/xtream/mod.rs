//! Xtream Codes Integration
//!
//! This module provides integration with Xtream Codes Player API v2.
//!
//! # Overview
//!
//! - **API Client**: Make requests to all Xtream Player API endpoints and
//!   shape the responses through a [`Serializer`](crate::services::serializers::Serializer)
//! - **Stream URLs**: Build playable live, timeshift, movie and episode URLs
//! - **Filters**: Category filter and pagination of listings
//!
//! # Usage
//!
//! ```rust,ignore
//! use xtream_api::services::xtream::{Filter, XtreamClient, XtreamCredentials};
//! use xtream_api::services::serializers::StandardizedSerializer;
//!
//! let client = XtreamClient::with_serializer(credentials, StandardizedSerializer)?;
//! let channels = client.get_channels(&Filter::category("4").page(1, 50)).await?;
//! ```
//!
//! The player_api.php endpoint looks like:
//! ```text
//! http://server:port/player_api.php?username=X&password=Y&action=get_live_streams
//! ```

pub mod client;
pub mod filter;
pub mod stream_url;
pub mod types;

// Re-exports for convenience
pub use client::XtreamClient;
pub use filter::Filter;
pub use stream_url::{StreamDescriptor, Timeshift};
pub use types::{
    EpisodeGroups, XtreamCategory, XtreamChannel, XtreamCredentials, XtreamEpgListing,
    XtreamEpgListings, XtreamEpisode, XtreamEpisodeInfo, XtreamFullEpgListing, XtreamMovie,
    XtreamMovieData, XtreamMovieInfo, XtreamMovieListing, XtreamProfileResponse, XtreamSeason,
    XtreamServerInfo, XtreamShow, XtreamShowInfo, XtreamShowListing, XtreamUserProfile,
};
