//! One feed entry wired to the shared app state.

use dioxus::prelude::*;

use vibes_core::{EngagementCell, PostView};
use vibes_ui::PostCard;

use crate::state::AppState;

/// Renders the post card for `post` and routes its input back into the feed.
///
/// The memo only changes when this post's cell changes, so toggling one
/// card does not re-render the others.
#[component]
pub fn FeedItem(mut state: Signal<AppState>, post: PostView, stagger: usize) -> Element {
    let post_id = post.id;
    let cell = use_memo(move || {
        state
            .read()
            .feed
            .cell(post_id)
            .cloned()
            .unwrap_or_else(|| EngagementCell::new(post.clone()))
    });

    rsx! {
        PostCard {
            cell,
            stagger,
            on_action: move |action| {
                state.write().apply(post_id, action);
            },
            on_share: move |_| tracing::debug!("Share requested for post {}", post_id),
        }
    }
}
