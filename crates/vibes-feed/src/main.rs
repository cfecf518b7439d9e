//! Entry point for the Vibes feed.
//!
//! Loads the feed (a JSON file or the bundled mock posts) and launches the
//! Dioxus desktop window.

use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use vibes_core::Feed;
use vibes_feed::components::App;
use vibes_feed::config::{Args, ViewerConfig};
use vibes_feed::feed_source::load_feed;
use vibes_feed::logging::init_logging;
use vibes_feed::state::AppState;
use vibes_ui::{Theme, CURRENT_THEME, SHARED_CSS};

/// App-specific CSS embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Feed loaded before launch.
static INITIAL_FEED: OnceLock<Feed> = OnceLock::new();

/// Theme chosen on the command line.
static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let config = ViewerConfig::from(Args::parse());

    init_logging(&config.log_level);
    tracing::info!("Starting Vibes feed");

    let feed = load_feed(config.feed.as_deref()).context("Failed to load feed")?;
    INITIAL_FEED.set(feed).ok();
    INITIAL_THEME.set(config.theme).ok();

    let (width, height) = config.window_size;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Vibes")
                        .with_inner_size(LogicalSize::new(width, height)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    SHARED_CSS, STYLES_CSS
                )),
        )
        .launch(RootApp);

    Ok(())
}

/// Root application component that owns the app state.
#[component]
fn RootApp() -> Element {
    let state = use_signal(|| {
        let feed = INITIAL_FEED.get().cloned().unwrap_or_else(Feed::mock);
        AppState::new(feed)
    });

    use_hook(|| {
        if let Some(theme) = INITIAL_THEME.get() {
            *CURRENT_THEME.write() = *theme;
        }
    });

    use_drop(|| {
        tracing::info!("Shutting down Vibes feed");
    });

    rsx! {
        App { state }
    }
}
