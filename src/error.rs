use thiserror::Error;

use crate::graph::Endpoint;

/// Main error type for postgraph
#[derive(Error, Debug)]
pub enum PostgraphError {
    /// A relationship endpoint does not resolve to any stored entity
    #[error("Could not find ({endpoint}) entity from graph with id: {id}")]
    DanglingReference {
        /// Which side of the relationship failed to resolve
        endpoint: Endpoint,
        /// The id that was looked up
        id: String,
    },

    /// An entity type string outside the closed enumeration
    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    /// HTTP transport or JSON decode errors from the REST API
    #[error("API request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph verification failed against the reference data
    #[error("Verification failed: {0}")]
    Verification(String),
}

/// Convenient Result type using PostgraphError
pub type Result<T> = std::result::Result<T, PostgraphError>;
