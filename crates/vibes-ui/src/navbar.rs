//! Top navigation bar.

use dioxus::prelude::*;

use vibes_core::Spring;

use crate::icons::{Icon, IconKind};

/// Fixed top bar with the brand mark and the login button.
#[component]
pub fn Navbar(on_login: EventHandler<()>) -> Element {
    let timing = Spring::NAVBAR.css_var("navbar");

    rsx! {
        nav {
            class: "navbar glass",
            style: "{timing}",
            div {
                class: "navbar-inner",
                div {
                    class: "navbar-brand",
                    div {
                        class: "brand-mark gradient-primary",
                        Icon { kind: IconKind::Sparkles }
                    }
                    span { class: "brand-name text-gradient", "Vibes" }
                }
                div {
                    class: "navbar-right",
                    button {
                        class: "btn-primary gradient-primary",
                        r#type: "button",
                        onclick: move |_| on_login.call(()),
                        "Login"
                    }
                }
            }
        }
    }
}
