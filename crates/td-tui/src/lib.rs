//! Terminal client for the TaskDeck task tracker
//!
//! The engine modules (store, draft, session, model, msg, viewmodel) own
//! all task/worker state and talk to the remote service through the
//! `ClientApi` trait; they perform no terminal I/O and are fully testable
//! headless. The remaining modules (app, event, ui) are the ratatui front
//! end that renders engine state and forwards user intents.

pub mod app;
pub mod draft;
pub mod error;
pub mod event;
pub mod model;
pub mod msg;
pub mod session;
pub mod store;
pub mod ui;
pub mod viewmodel;

pub use app::*;
pub use draft::*;
pub use error::*;
pub use model::*;
pub use msg::*;
pub use session::*;
pub use store::*;
pub use viewmodel::*;
