//! Root application component for the feed app.

use dioxus::prelude::*;

use vibes_ui::{LoginModal, Navbar, ThemedRoot};

use crate::state::AppState;

use super::FeedItem;

/// Root application component.
#[component]
pub fn App(mut state: Signal<AppState>) -> Element {
    rsx! {
        ThemedRoot {
            div {
                class: "vibes-app",

                Navbar {
                    on_login: move |_| state.write().open_login(),
                }

                main {
                    class: "feed-main",

                    // Welcome header
                    div {
                        class: "feed-header",
                        h1 { class: "feed-title text-gradient", "Your Feed" }
                        p { class: "feed-subtitle", "See what's vibing today" }
                    }

                    FeedList { state }
                }

                Login { state }
            }
        }
    }
}

/// The post list, one card per feed cell.
#[component]
fn FeedList(state: Signal<AppState>) -> Element {
    let posts: Vec<_> = state
        .read()
        .feed
        .cells()
        .iter()
        .map(|cell| cell.post().clone())
        .collect();

    if posts.is_empty() {
        return rsx! {
            div { class: "feed-empty", "No posts yet." }
        };
    }

    rsx! {
        div {
            class: "feed-list",
            for (index, post) in posts.into_iter().enumerate() {
                FeedItem {
                    key: "{post.id}",
                    state,
                    post,
                    stagger: index,
                }
            }
        }
    }
}

/// Login dialog wired to the app state.
#[component]
fn Login(mut state: Signal<AppState>) -> Element {
    let overlay = use_memo(move || state.read().login.clone());

    rsx! {
        LoginModal {
            overlay,
            on_open_change: move |open| state.write().set_login_open(open),
            on_email: move |email: String| state.write().login.set_email(email),
            on_password: move |password: String| state.write().login.set_password(password),
            on_submit: move |_| state.write().submit_login(),
        }
    }
}
