//! Xtream Codes Player API client
//!
//! Fetches the provider's catalogue (live channels, movies, shows, EPG) and
//! returns it in one of four shapes: the raw provider payload, the payload
//! with camelCase keys, flat standardized records, or JSON:API documents.
//!
//! ```rust,ignore
//! use xtream_api::{Filter, JsonApiSerializer, XtreamClient, XtreamCredentials};
//!
//! let credentials = XtreamCredentials {
//!     server: "http://example.com:8080".to_string(),
//!     username: "user".to_string(),
//!     password: "pass".to_string(),
//! };
//! let client = XtreamClient::with_serializer(credentials, JsonApiSerializer)?;
//! let movies = client.get_movies(&Filter::default().page(1, 20)).await?;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{MapError, Result, XtreamError};
pub use services::serializers::{
    CamelCaseSerializer, JsonApiSerializer, RawSerializer, Serializer, SerializerKind,
    StandardizedSerializer,
};
pub use services::xtream::{Filter, StreamDescriptor, Timeshift, XtreamClient, XtreamCredentials};
