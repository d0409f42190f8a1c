//! TaskDeck REST API contract types and validation
//!
//! This crate defines the schema types shared between the REST client,
//! the mock client, and the engine: tasks, workers, request/response
//! bodies, and the translation language enumeration.

pub mod error;
pub mod types;
pub mod validation;

pub use error::*;
pub use types::*;
