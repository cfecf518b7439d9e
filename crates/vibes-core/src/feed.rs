//! Feed composition: one engagement cell per post, addressable by id.

use std::collections::HashMap;

use crate::engagement::{CellAction, CellChange, EngagementCell};
use crate::error::FeedError;
use crate::mock::mock_posts;
use crate::post::{PostId, PostView};

/// An ordered list of engagement cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    cells: Vec<EngagementCell>,
    index: HashMap<PostId, usize>,
}

impl Feed {
    /// Mounts a cell for every post, keeping the given order.
    pub fn new(posts: Vec<PostView>) -> Result<Self, FeedError> {
        let mut cells = Vec::with_capacity(posts.len());
        let mut index = HashMap::with_capacity(posts.len());
        for post in posts {
            let id = post.id;
            if index.insert(id, cells.len()).is_some() {
                return Err(FeedError::DuplicatePost(id));
            }
            cells.push(EngagementCell::new(post));
        }
        tracing::debug!(posts = cells.len(), "Feed composed");
        Ok(Self { cells, index })
    }

    /// Feed built from the bundled mock posts.
    pub fn mock() -> Self {
        let posts = mock_posts();
        let index = posts
            .iter()
            .enumerate()
            .map(|(i, post)| (post.id, i))
            .collect();
        Self {
            cells: posts.into_iter().map(EngagementCell::new).collect(),
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in feed order.
    pub fn cells(&self) -> &[EngagementCell] {
        &self.cells
    }

    pub fn cell(&self, id: PostId) -> Option<&EngagementCell> {
        self.index.get(&id).map(|&i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, id: PostId) -> Option<&mut EngagementCell> {
        self.index.get(&id).map(|&i| &mut self.cells[i])
    }

    /// Position of a post in the feed, used to stagger entrances.
    pub fn stagger_index(&self, id: PostId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Routes one input to the addressed cell.
    pub fn apply(&mut self, id: PostId, action: CellAction) -> Result<CellChange, FeedError> {
        let cell = self.cell_mut(id).ok_or(FeedError::UnknownPost(id))?;
        let change = cell.apply(action);
        tracing::debug!(post = %id, ?change, "Engagement changed");
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reaction::{PickerEvent, Reaction};

    #[test]
    fn test_mock_feed_order() {
        let feed = Feed::mock();
        assert_eq!(feed.len(), 5);
        let names: Vec<_> = feed.cells().iter().map(|c| c.post().username.as_str()).collect();
        assert_eq!(
            names,
            ["Sarah Chen", "Alex Rivera", "Maya Johnson", "David Kim", "Emma Wilson"]
        );
        assert_eq!(feed.stagger_index(PostId(3)), Some(2));
        assert_eq!(Feed::new(mock_posts()).unwrap(), feed);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut posts = mock_posts();
        posts[1].id = posts[0].id;
        assert_eq!(Feed::new(posts), Err(FeedError::DuplicatePost(PostId(1))));
    }

    #[test]
    fn test_empty_feed() {
        let feed = Feed::new(Vec::new()).unwrap();
        assert!(feed.is_empty());
        assert!(feed.cell(PostId(1)).is_none());
    }

    #[test]
    fn test_unknown_post() {
        let mut feed = Feed::mock();
        assert_eq!(
            feed.apply(PostId(99), CellAction::ToggleLike),
            Err(FeedError::UnknownPost(PostId(99)))
        );
    }

    #[test]
    fn test_cells_are_isolated() {
        let mut feed = Feed::mock();
        let untouched = feed.cell(PostId(2)).unwrap().clone();

        feed.apply(PostId(1), CellAction::ToggleLike).unwrap();
        feed.apply(PostId(1), CellAction::ToggleBookmark).unwrap();
        feed.apply(PostId(1), CellAction::Picker(PickerEvent::PointerEnter)).unwrap();
        feed.apply(PostId(1), CellAction::Picker(PickerEvent::Select(Reaction::Wow)))
            .unwrap();

        assert_eq!(feed.cell(PostId(2)).unwrap(), &untouched);
        let first = feed.cell(PostId(1)).unwrap().state();
        assert!(first.liked());
        assert_eq!(first.like_count(), 235);
    }
}
