//! REST API client for the TaskDeck service
//!
//! This crate provides the HTTP gateway to the remote task store and
//! translation service. It is a thin request/response wrapper: typed
//! methods per endpoint, uniform response handling, no business logic.

pub mod client;
pub mod error;

pub use client::*;
pub use error::*;
