//! Errors that abort a loader run

use statechain_sdk::SdkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    /// Invalid command-line or environment settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// The graph store failed a call
    #[error(transparent)]
    Client(#[from] SdkError),

    /// Reading the prompt answer or writing console output failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LoaderResult<T> = Result<T, LoaderError>;
