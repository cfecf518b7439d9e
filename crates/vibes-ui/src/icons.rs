//! Inline stroke icons (24x24 grid, 2px stroke).

use dioxus::prelude::*;

/// Icons used by the feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Heart,
    Comment,
    Share,
    Bookmark,
    More,
    Mail,
    Lock,
    Sparkles,
    Close,
}

/// A single icon. `filled` fills the shape with the current color.
#[component]
pub fn Icon(
    kind: IconKind,
    #[props(default)] filled: bool,
    #[props(default = "icon".to_string())] class: String,
) -> Element {
    let fill = if filled { "currentColor" } else { "none" };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {icon_body(kind)}
        }
    }
}

fn icon_body(kind: IconKind) -> Element {
    match kind {
        IconKind::Heart => rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
        IconKind::Comment => rsx! {
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
        },
        IconKind::Share => rsx! {
            circle { cx: "18", cy: "5", r: "3" }
            circle { cx: "6", cy: "12", r: "3" }
            circle { cx: "18", cy: "19", r: "3" }
            line { x1: "8.59", y1: "13.51", x2: "15.42", y2: "17.49" }
            line { x1: "15.41", y1: "6.51", x2: "8.59", y2: "10.49" }
        },
        IconKind::Bookmark => rsx! {
            path { d: "m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z" }
        },
        IconKind::More => rsx! {
            circle { cx: "12", cy: "12", r: "1" }
            circle { cx: "19", cy: "12", r: "1" }
            circle { cx: "5", cy: "12", r: "1" }
        },
        IconKind::Mail => rsx! {
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        IconKind::Lock => rsx! {
            rect { x: "3", y: "11", width: "18", height: "11", rx: "2", ry: "2" }
            path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
        },
        IconKind::Sparkles => rsx! {
            path { d: "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" }
        },
        IconKind::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    }
}
