//! State management for the feed app.

pub mod app_state;

pub use app_state::*;
