//! Post card: one post with its like, reaction, comment, share, and bookmark
//! affordances.

use dioxus::prelude::*;

use vibes_core::{CellAction, EngagementCell, HeartKey, KeyedPresence, Spring, Tween};

use crate::icons::{Icon, IconKind};
use crate::reaction_picker::ReactionPicker;

/// A single post card.
///
/// Renders `cell.view()` and reports like/bookmark/picker input through
/// `on_action`. Comment, share, and overflow buttons change nothing here; they
/// call their optional handlers when a caller wires them.
#[component]
pub fn PostCard(
    cell: ReadSignal<EngagementCell>,
    /// Feed position, used to stagger the entrance.
    #[props(default)]
    stagger: usize,
    on_action: EventHandler<CellAction>,
    #[props(optional)]
    on_comment: Option<EventHandler<()>>,
    #[props(optional)]
    on_share: Option<EventHandler<()>>,
    #[props(optional)]
    on_more: Option<EventHandler<()>>,
) -> Element {
    let mut heart = use_signal(|| KeyedPresence::new(cell.peek().view().heart_key));
    let picker_open = use_memo(move || cell.read().view().picker_open);

    use_effect(move || {
        let key = cell.read().view().heart_key;
        heart.write().set(key);
    });

    let card = cell.read();
    let post = card.post();
    let view = card.view();

    let (heart_key, heart_stage) = {
        let presence = heart.read();
        let (key, stage) = presence.stage();
        (*key, stage)
    };
    // The icon follows the element on screen, which lags the state while the
    // old heart is still exiting.
    let heart_filled = heart_key == HeartKey::Liked;
    let on_heart_animation_end = move |evt: AnimationEvent| {
        if evt.data().animation_name().starts_with("heart-") {
            heart.write().animation_end();
        }
    };
    let like_class = if view.heart.is_filled() {
        "post-action post-action-like liked"
    } else {
        "post-action post-action-like"
    };
    let bookmark_class = if view.bookmark.is_filled() {
        "post-bookmark bookmarked"
    } else {
        "post-bookmark"
    };
    let timing = format!(
        "{} {} animation-delay: {}ms;",
        Spring::CARD.css_var("card"),
        Spring::HEART.css_var("heart"),
        Tween::CARD_STAGGER.stagger_delay_ms(stagger),
    );

    rsx! {
        article {
            class: "post-card glass",
            style: "{timing}",
            "data-post-id": "{post.id}",

            // Header
            div {
                class: "post-header",
                div {
                    class: "post-author",
                    div {
                        class: "post-avatar",
                        img {
                            src: "{post.avatar}",
                            alt: "{post.username}",
                        }
                        span { class: "post-online-dot" }
                    }
                    div {
                        h3 { class: "post-username", "{post.username}" }
                        p { class: "post-byline", "{post.byline()}" }
                    }
                }
                button {
                    class: "icon-button",
                    r#type: "button",
                    title: "More",
                    onclick: move |_| {
                        if let Some(handler) = &on_more {
                            handler.call(());
                        }
                    },
                    Icon { kind: IconKind::More }
                }
            }

            // Content
            p { class: "post-content", "{post.content}" }

            if let Some(ref image) = post.image {
                div {
                    class: "post-image",
                    img { src: "{image}", alt: "Post content" }
                }
            }

            // Reaction
            div {
                class: "post-reaction",
                ReactionPicker {
                    trigger: view.trigger,
                    palette: view.palette.clone(),
                    open: picker_open,
                    on_event: move |event| on_action.call(CellAction::Picker(event)),
                }
            }

            // Actions
            div {
                class: "post-actions",
                div {
                    class: "post-actions-left",

                    button {
                        class: "{like_class}",
                        r#type: "button",
                        onclick: move |_| on_action.call(CellAction::ToggleLike),
                        // Separate branches so a key change replaces the element.
                        if heart_filled {
                            div {
                                class: "heart heart-liked {heart_stage.css_class()}",
                                "data-key": "{heart_key.as_str()}",
                                onanimationend: on_heart_animation_end,
                                Icon { kind: IconKind::Heart, filled: true }
                            }
                        } else {
                            div {
                                class: "heart heart-not-liked {heart_stage.css_class()}",
                                "data-key": "{heart_key.as_str()}",
                                onanimationend: on_heart_animation_end,
                                Icon { kind: IconKind::Heart, filled: false }
                            }
                        }
                        span { class: "post-count", "{view.like_text}" }
                    }

                    button {
                        class: "post-action",
                        r#type: "button",
                        onclick: move |_| {
                            if let Some(handler) = &on_comment {
                                handler.call(());
                            }
                        },
                        Icon { kind: IconKind::Comment }
                        span { class: "post-count", "{view.comments_text}" }
                    }

                    button {
                        class: "post-action",
                        r#type: "button",
                        onclick: move |_| {
                            if let Some(handler) = &on_share {
                                handler.call(());
                            }
                        },
                        Icon { kind: IconKind::Share }
                        span { class: "post-count", "{view.shares_text}" }
                    }
                }

                button {
                    class: "{bookmark_class}",
                    r#type: "button",
                    onclick: move |_| on_action.call(CellAction::ToggleBookmark),
                    Icon { kind: IconKind::Bookmark, filled: view.bookmark.is_filled() }
                }
            }
        }
    }
}
