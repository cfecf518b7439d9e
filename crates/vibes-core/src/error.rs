//! Error types for feed composition.
//!
//! Engagement transitions themselves are total; errors only arise where a
//! collaborator hands the feed bad input or addresses a post that is not there.

use thiserror::Error;

use crate::post::PostId;

/// Errors raised while composing or addressing a feed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("Duplicate post id in feed: {0}")]
    DuplicatePost(PostId),

    #[error("Post not found in feed: {0}")]
    UnknownPost(PostId),
}
