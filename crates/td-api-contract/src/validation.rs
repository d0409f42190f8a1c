//! Request validation helpers

use validator::Validate;

use crate::error::ApiContractError;

/// Validate a request body before it goes on the wire
pub fn validate<T: Validate>(request: &T) -> Result<(), ApiContractError> {
    request.validate().map_err(ApiContractError::from)
}
