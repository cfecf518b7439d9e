//! Immutable post data supplied by the feed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a post, unique within one feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post as handed to an engagement cell.
///
/// Cells read this but never write it back; like/bookmark/reaction state
/// lives in [`crate::EngagementState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: PostId,
    /// Avatar image URL.
    pub avatar: String,
    /// Display name.
    pub username: String,
    /// Handle without the leading `@`.
    pub handle: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    /// Relative timestamp, e.g. "2h".
    pub timestamp: String,
}

impl PostView {
    /// Returns the "@handle · 2h" byline.
    pub fn byline(&self) -> String {
        format!("@{} · {}", self.handle, self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_image() {
        let json = r#"{
            "id": 7,
            "avatar": "https://example.com/a.png",
            "username": "Sam",
            "handle": "sam",
            "content": "hello",
            "likes": 3,
            "comments": 1,
            "shares": 0,
            "timestamp": "5m"
        }"#;
        let post: PostView = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, PostId(7));
        assert!(post.image.is_none());
        assert_eq!(post.byline(), "@sam · 5m");
    }

    #[test]
    fn test_negative_counts_rejected() {
        let json = r#"{
            "id": 1, "avatar": "", "username": "", "handle": "", "content": "",
            "likes": -1, "comments": 0, "shares": 0, "timestamp": ""
        }"#;
        assert!(serde_json::from_str::<PostView>(json).is_err());
    }
}
