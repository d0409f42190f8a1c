//! Error types for the terminal front end

use td_rest_client::RestClientError;
use thiserror::Error;

/// Errors that can occur while running the terminal client
#[derive(Debug, Error)]
pub enum TuiError {
    #[error("REST client error: {0}")]
    RestClient(#[from] RestClientError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("event handling error: {0}")]
    Event(String),
}

/// Result type alias for terminal client operations
pub type TuiResult<T> = Result<T, TuiError>;
