//! Headless state for the Vibes social feed.
//!
//! Everything here is plain data plus synchronous transitions: one call per
//! discrete user input, run to completion before the next one. The Dioxus
//! components in `vibes-ui` render the derived views and forward events back.
//!
//! # Quick Start
//!
//! ```
//! use vibes_core::{CellAction, Feed, PickerEvent, PostId, Reaction};
//!
//! let mut feed = Feed::mock();
//! let id = PostId(1);
//!
//! feed.apply(id, CellAction::ToggleLike).unwrap();
//! feed.apply(id, CellAction::Picker(PickerEvent::Select(Reaction::Laugh))).unwrap();
//!
//! let cell = feed.cell(id).unwrap();
//! assert_eq!(cell.state().like_count(), 235);
//! assert_eq!(cell.state().selected_reaction(), Some(Reaction::Laugh));
//! ```

pub mod engagement;
pub mod error;
pub mod feed;
pub mod login;
pub mod mock;
pub mod post;
pub mod presence;
pub mod reaction;

pub use engagement::{CellAction, CellChange, CellView, EngagementCell, EngagementState, Fill, HeartKey};
pub use error::FeedError;
pub use feed::Feed;
pub use login::LoginOverlay;
pub use mock::mock_posts;
pub use post::{PostId, PostView};
pub use presence::{KeyedPresence, Presence, Spring, Stage, Tween};
pub use reaction::{
    PaletteEntry, PickerEvent, PickerKey, Reaction, ReactionPicker, Selection, TriggerView,
};
