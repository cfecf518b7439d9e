//! Main application state for the feed app.

use vibes_core::{CellAction, CellChange, Feed, LoginOverlay, PostId};

/// Main application state.
///
/// Engagement stays inside the feed's cells and is not reported anywhere
/// else; it lasts for the session only.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// One engagement cell per post.
    pub feed: Feed,

    /// Login dialog.
    pub login: LoginOverlay,
}

impl AppState {
    /// Creates the application state around a composed feed.
    pub fn new(feed: Feed) -> Self {
        Self {
            feed,
            login: LoginOverlay::new(),
        }
    }

    /// Routes one input to the addressed post.
    pub fn apply(&mut self, id: PostId, action: CellAction) -> Option<CellChange> {
        match self.feed.apply(id, action) {
            Ok(change) => {
                if let CellChange::Liked { liked, like_count } = change {
                    tracing::info!("Post {} {} ({} likes)", id, if liked { "liked" } else { "unliked" }, like_count);
                }
                Some(change)
            }
            Err(e) => {
                tracing::warn!("Dropping {:?}: {}", action, e);
                None
            }
        }
    }

    pub fn open_login(&mut self) {
        tracing::debug!("Login dialog opened");
        self.login.open();
    }

    pub fn set_login_open(&mut self, open: bool) {
        self.login.set_open(open);
    }

    pub fn submit_login(&mut self) {
        self.login.submit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibes_core::{PickerEvent, Reaction};

    #[test]
    fn test_apply_routes_to_post() {
        let mut state = AppState::new(Feed::mock());
        let change = state.apply(PostId(1), CellAction::ToggleLike);
        assert_eq!(change, Some(CellChange::Liked { liked: true, like_count: 235 }));
        state.apply(PostId(1), CellAction::ToggleLike);
        assert_eq!(state.feed.cell(PostId(1)).unwrap().state().like_count(), 234);
    }

    #[test]
    fn test_apply_unknown_post() {
        let mut state = AppState::new(Feed::mock());
        let before = state.feed.clone();
        assert_eq!(state.apply(PostId(42), CellAction::ToggleBookmark), None);
        assert_eq!(state.feed, before);
    }

    #[test]
    fn test_reaction_scenario() {
        let mut state = AppState::new(Feed::mock());
        let laugh = CellAction::Picker(PickerEvent::Select(Reaction::Laugh));
        state.apply(PostId(2), CellAction::Picker(PickerEvent::PointerEnter));
        assert_eq!(state.apply(PostId(2), laugh), Some(CellChange::Reacted(Some(Reaction::Laugh))));
        assert_eq!(state.apply(PostId(2), laugh), Some(CellChange::Reacted(None)));
        assert!(!state.feed.cell(PostId(2)).unwrap().picker().is_open());
    }

    #[test]
    fn test_login_flow() {
        let mut state = AppState::default();
        state.open_login();
        assert!(state.login.is_open());
        state.login.set_email("you@example.com");
        state.submit_login();
        assert!(!state.login.is_open());

        state.open_login();
        state.set_login_open(false);
        assert!(!state.login.is_open());
    }
}
