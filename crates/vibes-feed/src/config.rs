//! Command line arguments and the resolved viewer configuration.

use std::path::PathBuf;

use clap::Parser;
use vibes_ui::Theme;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "vibes-feed")]
#[command(about = "Social feed with animated likes, bookmarks, and emoji reactions")]
pub struct Args {
    /// Path to a JSON array of posts (uses the built-in mock posts if not provided)
    #[arg(short, long)]
    pub feed: Option<PathBuf>,

    /// Color theme: dusk or daylight
    #[arg(short, long, default_value = "dusk")]
    pub theme: Theme,

    /// Default log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 720)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 960)]
    pub height: u32,
}

/// Settings the app runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub feed: Option<PathBuf>,
    pub theme: Theme,
    pub log_level: String,
    pub window_size: (u32, u32),
}

impl From<Args> for ViewerConfig {
    fn from(args: Args) -> Self {
        Self {
            feed: args.feed,
            theme: args.theme,
            log_level: args.log_level,
            window_size: (args.width.max(320), args.height.max(480)),
        }
    }
}
