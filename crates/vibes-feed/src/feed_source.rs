//! Loading the feed from a JSON file or the bundled mock posts.

use std::path::{Path, PathBuf};

use thiserror::Error;
use vibes_core::{Feed, FeedError, PostView};

/// Errors raised while loading a feed file.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read feed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse feed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid feed: {0}")]
    Feed(#[from] FeedError),
}

/// Parses a JSON array of posts.
pub fn parse_posts(json: &str, path: &Path) -> Result<Vec<PostView>, SourceError> {
    serde_json::from_str(json).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a JSON array of posts from a file.
pub fn load_posts(path: &Path) -> Result<Vec<PostView>, SourceError> {
    let json = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_posts(&json, path)
}

/// Builds the feed from `path`, or from the mock posts when no path is given.
pub fn load_feed(path: Option<&Path>) -> Result<Feed, SourceError> {
    match path {
        Some(path) => {
            tracing::info!("Loading feed from {:?}", path);
            let posts = load_posts(path)?;
            let feed = Feed::new(posts)?;
            tracing::info!("Loaded {} posts", feed.len());
            Ok(feed)
        }
        None => {
            tracing::info!("No feed file given, using mock posts");
            Ok(Feed::mock())
        }
    }
}
