//! AdStudio TUI - terminal campaign brief editor
//!
//! Edits a campaign brief field by field, submits it to the recommendation
//! service in the background and renders the returned plan with mock ad
//! previews, built with ratatui.

pub mod app;
pub mod events;
pub mod form;
pub mod state;
pub mod submit;
pub mod ui;

pub use app::{App, KeyOutcome};
pub use state::AppState;
