//! Error types for the REST API client

use reqwest::StatusCode;
use td_client_api::ClientApiError;
use thiserror::Error;

/// Errors that can occur when talking to the TaskDeck service
#[derive(Debug, Error)]
pub enum RestClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("API contract error: {0}")]
    ApiContract(#[from] td_api_contract::ApiContractError),

    /// The service answered a non-success status with an `{"error": ...}` body
    #[error("server returned error status {status}: {message}")]
    Server { status: StatusCode, message: String },

    /// The body was not the shape the contract promises (e.g. `null` or an
    /// error object where an array was expected)
    #[error("unexpected response format: {0}")]
    UnexpectedResponse(String),
}

/// Result type alias for REST client operations
pub type RestClientResult<T> = Result<T, RestClientError>;

impl From<RestClientError> for ClientApiError {
    fn from(err: RestClientError) -> Self {
        match err {
            RestClientError::Server { message, .. } => ClientApiError::Server(message),
            other => ClientApiError::Unexpected(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_keep_the_service_text() {
        let err = RestClientError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "translation failed".to_string(),
        };
        match ClientApiError::from(err) {
            ClientApiError::Server(message) => assert_eq!(message, "translation failed"),
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn format_failures_map_to_unexpected() {
        let err = RestClientError::UnexpectedResponse("null".to_string());
        assert!(matches!(
            ClientApiError::from(err),
            ClientApiError::Unexpected(_)
        ));
    }
}
