//! Error types
//!
//! `MapError` is raised by the response mappers, `XtreamError` by the HTTP
//! client. Mappers never translate errors; the client wraps them.

use thiserror::Error;

/// Result alias for client operations
pub type Result<T> = std::result::Result<T, XtreamError>;

/// Errors raised while shaping a provider payload
#[derive(Debug, Error)]
pub enum MapError {
    /// Payload did not match the provider schema at all
    #[error("Failed to decode provider payload: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// A mandatory identity field is absent
    #[error("{entity} is missing its identity field `{field}`")]
    MissingIdentity {
        entity: &'static str,
        field: &'static str,
    },

    /// Payload has the wrong top-level JSON type
    #[error("Unexpected {entity} payload, expected {expected}")]
    UnexpectedShape {
        entity: &'static str,
        expected: &'static str,
    },
}

/// Xtream API client errors
#[derive(Debug, Error)]
pub enum XtreamError {
    /// Invalid client configuration
    #[error("{0}")]
    Config(String),

    /// Network/connection error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP error (non-2xx status)
    #[error("{reason}")]
    Http { status: u16, reason: String },

    /// Response body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// The provider answered with its not-found signal
    #[error("{0} Not Found")]
    NotFound(&'static str),

    /// The payload could not be shaped
    #[error(transparent)]
    Map(#[from] MapError),
}
