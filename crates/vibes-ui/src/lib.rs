//! Shared UI components for the Vibes social feed.
//!
//! Components are presentational: they render values from `vibes-core` and
//! report user input through event handlers. The only state they keep is
//! animation presence, which never feeds back into engagement.

pub mod icons;
pub mod login_modal;
pub mod navbar;
pub mod post_card;
pub mod reaction_picker;
pub mod theme;

pub use icons::{Icon, IconKind};
pub use login_modal::LoginModal;
pub use navbar::Navbar;
pub use post_card::PostCard;
pub use reaction_picker::ReactionPicker;
pub use theme::{Theme, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing design tokens, theme definitions, and animations.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
