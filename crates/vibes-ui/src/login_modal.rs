//! Login dialog overlay.
//!
//! Follows the usual overlay pattern: backdrop click closes, clicks inside the
//! dialog stop propagation, a close button and Escape also close. Submitting
//! performs no authentication.

use dioxus::prelude::*;

use vibes_core::{LoginOverlay, Presence, Spring};

use crate::icons::{Icon, IconKind};

/// Login dialog driven by a [`LoginOverlay`] signal.
#[component]
pub fn LoginModal(
    overlay: ReadSignal<LoginOverlay>,
    /// Fires with the requested visibility.
    on_open_change: EventHandler<bool>,
    on_email: EventHandler<String>,
    on_password: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let mut presence = use_signal(Presence::default);

    use_effect(move || {
        let open = overlay.read().is_open();
        presence.write().sync(open);
    });

    let Some(stage) = presence.read().stage() else {
        return rsx! {};
    };

    let form = overlay.read();
    let timing = Spring::DIALOG.css_var("dialog");

    rsx! {
        div {
            class: "login-overlay {stage.css_class()}",
            style: "{timing}",
            onclick: move |_| on_open_change.call(false),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_open_change.call(false);
                }
            },
            onanimationend: move |evt: AnimationEvent| {
                if evt.data().animation_name().starts_with("dialog-") {
                    presence.write().animation_end();
                }
            },

            div {
                class: "login-dialog glass",
                role: "dialog",
                aria_modal: "true",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "login-close",
                    r#type: "button",
                    title: "Close",
                    onclick: move |_| on_open_change.call(false),
                    Icon { kind: IconKind::Close }
                }

                div {
                    class: "login-header",
                    div {
                        class: "login-mark gradient-primary",
                        Icon { kind: IconKind::Sparkles, class: "icon icon-lg" }
                    }
                    h2 { class: "login-title text-gradient", "Welcome Back" }
                    p { class: "login-subtitle", "Sign in to continue sharing vibes" }
                }

                form {
                    class: "login-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(());
                    },

                    div {
                        class: "login-field",
                        label { r#for: "email", "Email" }
                        div {
                            class: "login-input",
                            Icon { kind: IconKind::Mail, class: "icon icon-sm" }
                            input {
                                id: "email",
                                r#type: "email",
                                placeholder: "you@example.com",
                                value: "{form.email()}",
                                oninput: move |evt| on_email.call(evt.value()),
                            }
                        }
                    }

                    div {
                        class: "login-field",
                        label { r#for: "password", "Password" }
                        div {
                            class: "login-input",
                            Icon { kind: IconKind::Lock, class: "icon icon-sm" }
                            input {
                                id: "password",
                                r#type: "password",
                                placeholder: "••••••••",
                                value: "{form.password()}",
                                oninput: move |evt| on_password.call(evt.value()),
                            }
                        }
                    }

                    button {
                        class: "btn-primary gradient-primary login-submit",
                        r#type: "submit",
                        "Sign In"
                    }

                    p {
                        class: "login-footer",
                        "Don't have an account? "
                        button { class: "link-button", r#type: "button", "Sign up" }
                    }
                }
            }
        }
    }
}
