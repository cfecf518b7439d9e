//! Reaction palette and the picker's disclosure state.
//!
//! The picker owns only whether its palette is showing (and, for keyboard
//! use, which slot is highlighted). The current reaction belongs to the
//! owner and is passed in on every call; the picker answers with a
//! [`Selection`] that the owner stores as-is.

use std::fmt;

/// Placeholder glyph shown on the trigger when nothing is selected.
pub const PLACEHOLDER_GLYPH: &str = "😊";

/// One entry of the fixed reaction palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reaction {
    Heart,
    Laugh,
    Wow,
    Sad,
    Angry,
    ThumbsUp,
}

impl Reaction {
    /// The palette, in display order.
    pub const ALL: [Reaction; 6] = [
        Reaction::Heart,
        Reaction::Laugh,
        Reaction::Wow,
        Reaction::Sad,
        Reaction::Angry,
        Reaction::ThumbsUp,
    ];

    /// Returns the emoji for this reaction.
    pub fn glyph(&self) -> &'static str {
        match self {
            Reaction::Heart => "❤️",
            Reaction::Laugh => "😂",
            Reaction::Wow => "😮",
            Reaction::Sad => "😢",
            Reaction::Angry => "😡",
            Reaction::ThumbsUp => "👍",
        }
    }

    /// Parses an emoji back into a palette entry.
    pub fn from_glyph(glyph: &str) -> Option<Reaction> {
        Reaction::ALL.into_iter().find(|r| r.glyph() == glyph)
    }

    /// Position of this reaction in [`Reaction::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Reaction::Heart => 0,
            Reaction::Laugh => 1,
            Reaction::Wow => 2,
            Reaction::Sad => 3,
            Reaction::Angry => 4,
            Reaction::ThumbsUp => 5,
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Resolved outcome of a palette choice: the value the owner should store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection(pub Option<Reaction>);

/// Keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    /// Enter or Space.
    Activate,
    Escape,
    Next,
    Previous,
    First,
    Last,
}

/// A discrete input aimed at the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    PointerEnter,
    PointerLeave,
    /// A palette option received input focus.
    Focus(Reaction),
    Select(Reaction),
    Key(PickerKey),
}

/// What the trigger button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerView {
    pub glyph: &'static str,
    pub label: &'static str,
    /// Whether the glyph runs the continuous float loop.
    pub floating: bool,
}

/// One palette slot as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub reaction: Reaction,
    /// Equal to the owner's current reaction.
    pub active: bool,
    /// Highlighted by keyboard navigation.
    pub highlighted: bool,
    /// Slot position, used to stagger the entrance.
    pub stagger: usize,
}

/// Disclosure state of one reaction picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionPicker {
    open: bool,
    focused: Option<usize>,
}

impl ReactionPicker {
    /// Creates a closed picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the palette is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the keyboard-highlighted reaction, if any.
    pub fn focused(&self) -> Option<Reaction> {
        self.focused.map(|i| Reaction::ALL[i])
    }

    /// Pointer entered the control. Always opens.
    pub fn pointer_enter(&mut self) {
        self.open = true;
    }

    /// Pointer left the control. Always closes.
    pub fn pointer_leave(&mut self) {
        self.close();
    }

    /// Moves the highlight to the option that holds input focus, so a later
    /// `Activate` picks what the user is on. Ignored while closed.
    pub fn focus(&mut self, reaction: Reaction) {
        if self.open {
            self.focused = Some(reaction.index());
        }
    }

    /// Resolves a palette choice against the owner's current reaction.
    ///
    /// Choosing the active reaction clears it; choosing any other replaces
    /// it. The palette closes either way.
    pub fn select(&mut self, selected: Option<Reaction>, chosen: Reaction) -> Selection {
        let value = if selected == Some(chosen) {
            None
        } else {
            Some(chosen)
        };
        self.close();
        Selection(value)
    }

    /// Handles a key press on the trigger or palette.
    pub fn key(&mut self, selected: Option<Reaction>, key: PickerKey) -> Option<Selection> {
        let len = Reaction::ALL.len();
        match key {
            PickerKey::Activate => {
                if !self.open {
                    self.open = true;
                    self.focused = Some(selected.map(|r| r.index()).unwrap_or(0));
                    return None;
                }
                match self.focused {
                    Some(i) => Some(self.select(selected, Reaction::ALL[i])),
                    None => {
                        self.close();
                        None
                    }
                }
            }
            PickerKey::Escape => {
                self.close();
                None
            }
            PickerKey::Next if self.open => {
                self.focused = Some(self.focused.map(|i| (i + 1) % len).unwrap_or(0));
                None
            }
            PickerKey::Previous if self.open => {
                self.focused = Some(self.focused.map(|i| (i + len - 1) % len).unwrap_or(len - 1));
                None
            }
            PickerKey::First if self.open => {
                self.focused = Some(0);
                None
            }
            PickerKey::Last if self.open => {
                self.focused = Some(len - 1);
                None
            }
            _ => None,
        }
    }

    /// Dispatches one event. Returns a selection when the event chose a reaction.
    pub fn handle(&mut self, selected: Option<Reaction>, event: PickerEvent) -> Option<Selection> {
        match event {
            PickerEvent::PointerEnter => {
                self.pointer_enter();
                None
            }
            PickerEvent::PointerLeave => {
                self.pointer_leave();
                None
            }
            PickerEvent::Focus(reaction) => {
                self.focus(reaction);
                None
            }
            PickerEvent::Select(chosen) => Some(self.select(selected, chosen)),
            PickerEvent::Key(key) => self.key(selected, key),
        }
    }

    /// Trigger display for the given current reaction.
    pub fn trigger(selected: Option<Reaction>) -> TriggerView {
        match selected {
            Some(reaction) => TriggerView {
                glyph: reaction.glyph(),
                label: "You reacted",
                floating: true,
            },
            None => TriggerView {
                glyph: PLACEHOLDER_GLYPH,
                label: "React",
                floating: false,
            },
        }
    }

    /// Palette slots for the given current reaction.
    pub fn palette(&self, selected: Option<Reaction>) -> Vec<PaletteEntry> {
        Reaction::ALL
            .iter()
            .enumerate()
            .map(|(i, &reaction)| PaletteEntry {
                reaction,
                active: selected == Some(reaction),
                highlighted: self.focused == Some(i),
                stagger: i,
            })
            .collect()
    }

    fn close(&mut self) {
        self.open = false;
        self.focused = None;
    }
}
