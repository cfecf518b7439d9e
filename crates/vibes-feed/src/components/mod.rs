//! UI components for the feed app.

mod app;
mod feed_item;

pub use app::*;
pub use feed_item::*;
