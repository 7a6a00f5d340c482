//! Error types for the statechain SDK

use thiserror::Error;

/// Errors that can occur when talking to a graph store
#[derive(Error, Debug)]
pub enum SdkError {
    /// The store rejected a statement or mutation
    #[error("Query error: {0}")]
    QueryError(String),

    /// The store could not be reached or refused the credentials
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The store answered, but not in a shape we understand
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
