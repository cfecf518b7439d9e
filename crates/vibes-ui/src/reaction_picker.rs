//! Hover-disclosed emoji reaction picker.

use dioxus::prelude::*;

use vibes_core::{PaletteEntry, PickerEvent, PickerKey, Presence, Spring, TriggerView, Tween};

/// Maps a key press to a picker key, if the picker handles it.
fn picker_key(key: &Key) -> Option<PickerKey> {
    match key {
        Key::Enter => Some(PickerKey::Activate),
        Key::Character(c) if c == " " => Some(PickerKey::Activate),
        Key::Escape => Some(PickerKey::Escape),
        Key::ArrowRight => Some(PickerKey::Next),
        Key::ArrowLeft => Some(PickerKey::Previous),
        Key::Home => Some(PickerKey::First),
        Key::End => Some(PickerKey::Last),
        _ => None,
    }
}

/// Reaction trigger plus the palette it discloses.
///
/// Renders the owner's derived `trigger` and `palette` and forwards every
/// input through `on_event`. The palette's enter/exit presence is local and
/// follows `open`.
#[component]
pub fn ReactionPicker(
    trigger: TriggerView,
    palette: Vec<PaletteEntry>,
    open: ReadSignal<bool>,
    on_event: EventHandler<PickerEvent>,
) -> Element {
    let mut presence = use_signal(Presence::default);

    use_effect(move || {
        let open = open();
        presence.write().sync(open);
    });

    let glyph_class = if trigger.floating {
        "reaction-trigger-glyph floating"
    } else {
        "reaction-trigger-glyph"
    };
    let timing = format!(
        "{} {} --palette-exit-duration: {}ms; --float-duration: {}ms;",
        Spring::PALETTE.css_var("palette"),
        Spring::GLYPH.css_var("glyph"),
        Tween::PALETTE_EXIT.duration_ms,
        Tween::FLOAT_LOOP.duration_ms,
    );

    rsx! {
        div {
            class: "reaction-picker",
            style: "{timing}",
            onmouseenter: move |_| on_event.call(PickerEvent::PointerEnter),
            onmouseleave: move |_| on_event.call(PickerEvent::PointerLeave),
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(key) = picker_key(&evt.key()) {
                    evt.prevent_default();
                    on_event.call(PickerEvent::Key(key));
                }
            },

            button {
                class: "reaction-trigger",
                r#type: "button",
                aria_haspopup: "true",
                aria_expanded: "{open()}",
                span { class: "{glyph_class}", "{trigger.glyph}" }
                span { class: "reaction-trigger-label", "{trigger.label}" }
            }

            if let Some(stage) = presence.read().stage() {
                div {
                    class: "reaction-palette {stage.css_class()}",
                    role: "listbox",
                    onanimationend: move |evt: AnimationEvent| {
                        if evt.data().animation_name().starts_with("palette-") {
                            presence.write().animation_end();
                        }
                    },
                    for entry in palette {
                        {
                            let reaction = entry.reaction;
                            let mut class = String::from("reaction-option");
                            if entry.active {
                                class.push_str(" active");
                            }
                            if entry.highlighted {
                                class.push_str(" highlighted");
                            }
                            let delay = Tween::GLYPH_STAGGER.stagger_delay_ms(entry.stagger);
                            rsx! {
                                button {
                                    key: "{reaction.glyph()}",
                                    class: "{class}",
                                    r#type: "button",
                                    role: "option",
                                    aria_selected: "{entry.active}",
                                    style: "animation-delay: {delay}ms;",
                                    onfocus: move |_| on_event.call(PickerEvent::Focus(reaction)),
                                    onclick: move |_| on_event.call(PickerEvent::Select(reaction)),
                                    "{reaction.glyph()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_key_mapping() {
        assert_eq!(picker_key(&Key::Enter), Some(PickerKey::Activate));
        assert_eq!(picker_key(&Key::Character(" ".to_string())), Some(PickerKey::Activate));
        assert_eq!(picker_key(&Key::Escape), Some(PickerKey::Escape));
        assert_eq!(picker_key(&Key::ArrowLeft), Some(PickerKey::Previous));
        assert_eq!(picker_key(&Key::End), Some(PickerKey::Last));
        assert_eq!(picker_key(&Key::Character("a".to_string())), None);
        assert_eq!(picker_key(&Key::Tab), None);
    }
}
