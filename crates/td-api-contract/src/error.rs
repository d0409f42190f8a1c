//! Contract-level errors

use thiserror::Error;

/// Errors raised while building or validating contract types
#[derive(Debug, Error)]
pub enum ApiContractError {
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}
