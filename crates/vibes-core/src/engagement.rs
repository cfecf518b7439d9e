//! Per-post engagement state and the cell that owns it.
//!
//! An [`EngagementCell`] pairs one immutable [`PostView`] with the viewer's
//! like/bookmark/reaction toggles and the cell's own [`ReactionPicker`].
//! Every input goes through [`EngagementCell::apply`]; rendering reads
//! [`EngagementCell::view`].

use crate::post::PostView;
use crate::reaction::{PaletteEntry, PickerEvent, Reaction, ReactionPicker, Selection, TriggerView};

/// The viewer's interaction state for one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementState {
    liked: bool,
    bookmarked: bool,
    selected_reaction: Option<Reaction>,
    initial_likes: u64,
}

impl EngagementState {
    /// Seeds state from a post's like count, with nothing toggled.
    pub fn new(initial_likes: u64) -> Self {
        Self {
            liked: false,
            bookmarked: false,
            selected_reaction: None,
            initial_likes,
        }
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn bookmarked(&self) -> bool {
        self.bookmarked
    }

    pub fn selected_reaction(&self) -> Option<Reaction> {
        self.selected_reaction
    }

    /// Like count including the viewer's own like. Saturates at `u64::MAX`.
    pub fn like_count(&self) -> u64 {
        self.initial_likes.saturating_add(u64::from(self.liked))
    }

    /// Flips the like flag; the count follows.
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    pub fn toggle_bookmark(&mut self) {
        self.bookmarked = !self.bookmarked;
    }

    /// Stores a reaction value as given. Toggle resolution happens in the picker.
    pub fn set_reaction(&mut self, value: Option<Reaction>) {
        self.selected_reaction = value;
    }
}

/// Icon fill for a toggle affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Filled,
    Outline,
}

impl Fill {
    fn from_flag(on: bool) -> Self {
        if on { Fill::Filled } else { Fill::Outline }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Fill::Filled)
    }
}

/// Identity of the heart element. A change of key swaps the element out
/// rather than restyling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeartKey {
    Liked,
    NotLiked,
}

impl HeartKey {
    pub fn from_liked(liked: bool) -> Self {
        if liked { HeartKey::Liked } else { HeartKey::NotLiked }
    }

    /// Element key used by the renderer.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeartKey::Liked => "liked",
            HeartKey::NotLiked => "not-liked",
        }
    }
}

/// A discrete input aimed at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAction {
    ToggleLike,
    ToggleBookmark,
    Picker(PickerEvent),
}

/// What an action changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellChange {
    Liked { liked: bool, like_count: u64 },
    Bookmarked(bool),
    Reacted(Option<Reaction>),
    /// Only the picker's disclosure state moved.
    Disclosure { open: bool },
}

/// Everything a renderer needs for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub like_text: String,
    pub heart: Fill,
    pub heart_key: HeartKey,
    pub bookmark: Fill,
    pub comments_text: String,
    pub shares_text: String,
    pub trigger: TriggerView,
    pub picker_open: bool,
    pub palette: Vec<PaletteEntry>,
}

/// One post together with its engagement state and reaction picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngagementCell {
    post: PostView,
    state: EngagementState,
    picker: ReactionPicker,
}

impl EngagementCell {
    /// Mounts a cell for a post.
    pub fn new(post: PostView) -> Self {
        let state = EngagementState::new(post.likes);
        Self {
            post,
            state,
            picker: ReactionPicker::new(),
        }
    }

    pub fn post(&self) -> &PostView {
        &self.post
    }

    pub fn state(&self) -> &EngagementState {
        &self.state
    }

    pub fn picker(&self) -> &ReactionPicker {
        &self.picker
    }

    pub fn toggle_like(&mut self) {
        self.state.toggle_like();
    }

    pub fn toggle_bookmark(&mut self) {
        self.state.toggle_bookmark();
    }

    pub fn set_reaction(&mut self, value: Option<Reaction>) {
        self.state.set_reaction(value);
    }

    /// Applies one input and reports what changed.
    pub fn apply(&mut self, action: CellAction) -> CellChange {
        match action {
            CellAction::ToggleLike => {
                self.toggle_like();
                CellChange::Liked {
                    liked: self.state.liked(),
                    like_count: self.state.like_count(),
                }
            }
            CellAction::ToggleBookmark => {
                self.toggle_bookmark();
                CellChange::Bookmarked(self.state.bookmarked())
            }
            CellAction::Picker(event) => {
                match self.picker.handle(self.state.selected_reaction(), event) {
                    Some(Selection(value)) => {
                        self.set_reaction(value);
                        CellChange::Reacted(value)
                    }
                    None => CellChange::Disclosure {
                        open: self.picker.is_open(),
                    },
                }
            }
        }
    }

    /// Derives the display fields from the current state.
    pub fn view(&self) -> CellView {
        let selected = self.state.selected_reaction();
        CellView {
            like_text: self.state.like_count().to_string(),
            heart: Fill::from_flag(self.state.liked()),
            heart_key: HeartKey::from_liked(self.state.liked()),
            bookmark: Fill::from_flag(self.state.bookmarked()),
            comments_text: self.post.comments.to_string(),
            shares_text: self.post.shares.to_string(),
            trigger: ReactionPicker::trigger(selected),
            picker_open: self.picker.is_open(),
            palette: self.picker.palette(selected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_posts;
    use crate::reaction::PickerKey;
    use proptest::prelude::*;

    fn cell_with_likes(likes: u64) -> EngagementCell {
        let mut post = mock_posts().remove(0);
        post.likes = likes;
        EngagementCell::new(post)
    }

    #[test]
    fn test_defaults() {
        let cell = cell_with_likes(10);
        let state = cell.state();
        assert!(!state.liked());
        assert!(!state.bookmarked());
        assert_eq!(state.selected_reaction(), None);
        assert_eq!(state.like_count(), 10);
        assert!(!cell.picker().is_open());
    }

    #[test]
    fn test_like_scenario() {
        let mut cell = cell_with_likes(234);

        let change = cell.apply(CellAction::ToggleLike);
        assert_eq!(change, CellChange::Liked { liked: true, like_count: 235 });
        assert_eq!(cell.view().like_text, "235");

        let change = cell.apply(CellAction::ToggleLike);
        assert_eq!(change, CellChange::Liked { liked: false, like_count: 234 });
        assert_eq!(cell.view().like_text, "234");
    }

    #[test]
    fn test_like_at_max_count_saturates() {
        let mut cell = cell_with_likes(u64::MAX);
        let change = cell.apply(CellAction::ToggleLike);
        assert_eq!(change, CellChange::Liked { liked: true, like_count: u64::MAX });
        assert_eq!(cell.view().like_text, u64::MAX.to_string());

        let change = cell.apply(CellAction::ToggleLike);
        assert_eq!(change, CellChange::Liked { liked: false, like_count: u64::MAX });
    }

    #[test]
    fn test_bookmark_touches_nothing_else() {
        let mut cell = cell_with_likes(5);
        cell.toggle_like();
        cell.set_reaction(Some(Reaction::Wow));
        let before = *cell.state();

        assert_eq!(cell.apply(CellAction::ToggleBookmark), CellChange::Bookmarked(true));
        assert!(cell.state().bookmarked());
        assert_eq!(cell.state().liked(), before.liked());
        assert_eq!(cell.state().like_count(), before.like_count());
        assert_eq!(cell.state().selected_reaction(), before.selected_reaction());

        cell.apply(CellAction::ToggleBookmark);
        assert_eq!(*cell.state(), before);
    }

    #[test]
    fn test_reselect_through_picker_clears() {
        let mut cell = cell_with_likes(0);
        let laugh = CellAction::Picker(PickerEvent::Select(Reaction::Laugh));

        assert_eq!(cell.apply(laugh), CellChange::Reacted(Some(Reaction::Laugh)));
        assert_eq!(cell.state().selected_reaction(), Some(Reaction::Laugh));

        assert_eq!(cell.apply(laugh), CellChange::Reacted(None));
        assert_eq!(cell.state().selected_reaction(), None);
    }

    #[test]
    fn test_switch_reaction_directly() {
        let mut cell = cell_with_likes(0);
        cell.apply(CellAction::Picker(PickerEvent::Select(Reaction::Heart)));
        let change = cell.apply(CellAction::Picker(PickerEvent::Select(Reaction::Angry)));
        assert_eq!(change, CellChange::Reacted(Some(Reaction::Angry)));
    }

    #[test]
    fn test_set_reaction_is_unconditional() {
        let mut cell = cell_with_likes(0);
        cell.set_reaction(Some(Reaction::Sad));
        cell.set_reaction(Some(Reaction::Sad));
        assert_eq!(cell.state().selected_reaction(), Some(Reaction::Sad));
    }

    #[test]
    fn test_hover_then_select_closes() {
        let mut cell = cell_with_likes(0);
        let change = cell.apply(CellAction::Picker(PickerEvent::PointerEnter));
        assert_eq!(change, CellChange::Disclosure { open: true });
        assert!(cell.view().picker_open);

        cell.apply(CellAction::Picker(PickerEvent::Select(Reaction::ThumbsUp)));
        assert!(!cell.view().picker_open);
    }

    #[test]
    fn test_keyboard_reaction_through_cell() {
        let mut cell = cell_with_likes(0);
        cell.apply(CellAction::Picker(PickerEvent::Key(PickerKey::Activate)));
        cell.apply(CellAction::Picker(PickerEvent::Key(PickerKey::Last)));
        let change = cell.apply(CellAction::Picker(PickerEvent::Key(PickerKey::Activate)));
        assert_eq!(change, CellChange::Reacted(Some(Reaction::ThumbsUp)));
    }

    #[test]
    fn test_focus_through_cell_moves_highlight() {
        let mut cell = cell_with_likes(0);
        cell.apply(CellAction::Picker(PickerEvent::PointerEnter));
        let change = cell.apply(CellAction::Picker(PickerEvent::Focus(Reaction::Sad)));
        assert_eq!(change, CellChange::Disclosure { open: true });
        assert!(cell.view().palette[Reaction::Sad.index()].highlighted);

        let change = cell.apply(CellAction::Picker(PickerEvent::Key(PickerKey::Activate)));
        assert_eq!(change, CellChange::Reacted(Some(Reaction::Sad)));
    }

    #[test]
    fn test_view_derivation() {
        let mut cell = cell_with_likes(234);
        let view = cell.view();
        assert_eq!(view.heart, Fill::Outline);
        assert_eq!(view.heart_key, HeartKey::NotLiked);
        assert_eq!(view.bookmark, Fill::Outline);
        assert_eq!(view.comments_text, "45");
        assert_eq!(view.shares_text, "12");
        assert_eq!(view.trigger.label, "React");
        assert_eq!(view.palette.len(), 6);

        cell.toggle_like();
        cell.toggle_bookmark();
        cell.set_reaction(Some(Reaction::Heart));
        let view = cell.view();
        assert!(view.heart.is_filled());
        assert_eq!(view.heart_key.as_str(), "liked");
        assert!(view.bookmark.is_filled());
        assert_eq!(view.trigger.label, "You reacted");
        assert!(view.palette[0].active);
    }

    #[test]
    fn test_post_is_never_mutated() {
        let mut cell = cell_with_likes(234);
        let original = cell.post().clone();
        cell.apply(CellAction::ToggleLike);
        cell.apply(CellAction::ToggleBookmark);
        cell.apply(CellAction::Picker(PickerEvent::Select(Reaction::Wow)));
        assert_eq!(cell.post(), &original);
    }

    proptest! {
        #[test]
        fn prop_like_count_tracks_liked(initial in 0u64..1_000_000, toggles in 0usize..40) {
            let mut state = EngagementState::new(initial);
            for _ in 0..toggles {
                state.toggle_like();
                let expected = initial + if state.liked() { 1 } else { 0 };
                prop_assert_eq!(state.like_count(), expected);
            }
        }

        #[test]
        fn prop_toggle_like_involution(initial in 0u64..1_000_000, pre in 0usize..5) {
            let mut state = EngagementState::new(initial);
            for _ in 0..pre {
                state.toggle_like();
            }
            let before = state;
            state.toggle_like();
            state.toggle_like();
            prop_assert_eq!(state, before);
        }
    }
}
