//! Enter/exit sequencing for animated elements.
//!
//! These types are driven by the renderer (state changes in, animation-end
//! notifications in) and only decide which element is on screen and in which
//! animation stage. Nothing here reads or writes engagement state.

/// Animation stage of the element currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Enter,
    Steady,
    Exit,
}

impl Stage {
    /// CSS modifier class for this stage.
    pub fn css_class(&self) -> &'static str {
        match self {
            Stage::Enter => "presence-enter",
            Stage::Steady => "presence-steady",
            Stage::Exit => "presence-exit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyedPhase<K> {
    Entering(K),
    Settled(K),
    Exiting { leaving: K, pending: K },
}

/// Swaps between mutually exclusive elements identified by key.
///
/// Only one element is on screen at a time: when the key changes the old
/// element plays its exit animation and is removed, and only then does the
/// new element mount and play its entrance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedPresence<K> {
    phase: KeyedPhase<K>,
}

impl<K: Clone + PartialEq> KeyedPresence<K> {
    /// Mounts `key`, starting with its entrance.
    pub fn new(key: K) -> Self {
        Self {
            phase: KeyedPhase::Entering(key),
        }
    }

    /// The key that will be on screen once pending animations finish.
    pub fn target(&self) -> &K {
        match &self.phase {
            KeyedPhase::Entering(k) | KeyedPhase::Settled(k) => k,
            KeyedPhase::Exiting { pending, .. } => pending,
        }
    }

    /// Requests that `key` be shown.
    pub fn set(&mut self, key: K) {
        if *self.target() == key {
            return;
        }
        self.phase = match std::mem::replace(&mut self.phase, KeyedPhase::Entering(key.clone())) {
            KeyedPhase::Entering(current) | KeyedPhase::Settled(current) => KeyedPhase::Exiting {
                leaving: current,
                pending: key,
            },
            KeyedPhase::Exiting { leaving, .. } => KeyedPhase::Exiting {
                leaving,
                pending: key,
            },
        };
    }

    /// The on-screen element finished its current animation.
    pub fn animation_end(&mut self) {
        let placeholder = KeyedPhase::Entering(self.target().clone());
        self.phase = match std::mem::replace(&mut self.phase, placeholder) {
            KeyedPhase::Exiting { pending, .. } => KeyedPhase::Entering(pending),
            KeyedPhase::Entering(k) | KeyedPhase::Settled(k) => KeyedPhase::Settled(k),
        };
    }

    /// The element on screen and its stage.
    pub fn stage(&self) -> (&K, Stage) {
        match &self.phase {
            KeyedPhase::Entering(k) => (k, Stage::Enter),
            KeyedPhase::Settled(k) => (k, Stage::Steady),
            KeyedPhase::Exiting { leaving, .. } => (leaving, Stage::Exit),
        }
    }
}

/// Mount state of an element that animates in and out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    Hidden,
    Entering,
    Visible,
    Exiting,
}

impl Presence {
    pub fn show(&mut self) {
        if matches!(self, Presence::Hidden | Presence::Exiting) {
            *self = Presence::Entering;
        }
    }

    pub fn hide(&mut self) {
        if matches!(self, Presence::Entering | Presence::Visible) {
            *self = Presence::Exiting;
        }
    }

    /// Shows or hides to match `visible`.
    pub fn sync(&mut self, visible: bool) {
        if visible { self.show() } else { self.hide() }
    }

    pub fn animation_end(&mut self) {
        *self = match *self {
            Presence::Entering => Presence::Visible,
            Presence::Exiting => Presence::Hidden,
            other => other,
        };
    }

    /// Whether the element is in the tree at all.
    pub fn is_mounted(&self) -> bool {
        !matches!(self, Presence::Hidden)
    }

    /// Stage of the mounted element, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Presence::Hidden => None,
            Presence::Entering => Some(Stage::Enter),
            Presence::Visible => Some(Stage::Steady),
            Presence::Exiting => Some(Stage::Exit),
        }
    }
}

/// Spring timing for a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    /// Heart icon pop on like/unlike.
    pub const HEART: Spring = Spring { stiffness: 500.0, damping: 10.0 };
    /// Reaction palette container.
    pub const PALETTE: Spring = Spring { stiffness: 400.0, damping: 25.0 };
    /// Individual palette glyphs.
    pub const GLYPH: Spring = Spring { stiffness: 500.0, damping: 25.0 };
    /// Post card entrance.
    pub const CARD: Spring = Spring { stiffness: 300.0, damping: 30.0 };
    /// Login dialog.
    pub const DIALOG: Spring = Spring { stiffness: 300.0, damping: 30.0 };
    /// Navigation bar slide-in.
    pub const NAVBAR: Spring = Spring { stiffness: 100.0, damping: 20.0 };

    /// Approximate settle time in milliseconds for unit mass.
    ///
    /// Uses four time constants of the envelope `exp(-damping / 2 * t)`,
    /// clamped so very stiff or very loose springs stay perceptible.
    pub fn settle_ms(&self) -> u32 {
        let decay = (self.damping / 2.0).max(1.0);
        let secs = 4.0 / decay;
        let natural = 2.0 * std::f32::consts::PI / self.stiffness.max(1.0).sqrt();
        ((secs.min(natural * 3.0)) * 1000.0).clamp(120.0, 900.0) as u32
    }

    /// Renders `--{name}-duration` for use in inline styles.
    pub fn css_var(&self, name: &str) -> String {
        format!("--{}-duration: {}ms;", name, self.settle_ms())
    }
}

/// Fixed-duration timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tween {
    pub duration_ms: u32,
}

impl Tween {
    /// Palette exit.
    pub const PALETTE_EXIT: Tween = Tween { duration_ms: 150 };
    /// Delay between consecutive palette glyphs.
    pub const GLYPH_STAGGER: Tween = Tween { duration_ms: 50 };
    /// Delay between consecutive feed cards.
    pub const CARD_STAGGER: Tween = Tween { duration_ms: 100 };
    /// One period of the selected-reaction float loop.
    pub const FLOAT_LOOP: Tween = Tween { duration_ms: 1500 };

    /// Delay for the item at `index` when this tween is used as a stagger step.
    pub fn stagger_delay_ms(&self, index: usize) -> u32 {
        self.duration_ms.saturating_mul(index as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_wait_sequence() {
        let mut heart = KeyedPresence::new("not-liked");
        assert_eq!(heart.stage(), (&"not-liked", Stage::Enter));
        heart.animation_end();
        assert_eq!(heart.stage(), (&"not-liked", Stage::Steady));

        heart.set("liked");
        // Old element stays until its exit finishes.
        assert_eq!(heart.stage(), (&"not-liked", Stage::Exit));
        assert_eq!(heart.target(), &"liked");

        heart.animation_end();
        assert_eq!(heart.stage(), (&"liked", Stage::Enter));
        heart.animation_end();
        assert_eq!(heart.stage(), (&"liked", Stage::Steady));
    }

    #[test]
    fn test_keyed_same_key_is_noop() {
        let mut heart = KeyedPresence::new(1);
        heart.animation_end();
        heart.set(1);
        assert_eq!(heart.stage(), (&1, Stage::Steady));
    }

    #[test]
    fn test_keyed_change_while_exiting_replaces_pending() {
        let mut heart = KeyedPresence::new("a");
        heart.set("b");
        heart.set("c");
        assert_eq!(heart.stage(), (&"a", Stage::Exit));
        heart.animation_end();
        assert_eq!(heart.stage(), (&"c", Stage::Enter));
    }

    #[test]
    fn test_keyed_double_toggle_reenters_original() {
        let mut heart = KeyedPresence::new(false);
        heart.animation_end();
        heart.set(true);
        heart.set(false);
        assert_eq!(heart.target(), &false);
        heart.animation_end();
        assert_eq!(heart.stage(), (&false, Stage::Enter));
    }

    #[test]
    fn test_presence_lifecycle() {
        let mut palette = Presence::default();
        assert!(!palette.is_mounted());
        assert_eq!(palette.stage(), None);

        palette.show();
        assert_eq!(palette.stage(), Some(Stage::Enter));
        palette.animation_end();
        assert_eq!(palette, Presence::Visible);

        palette.hide();
        assert!(palette.is_mounted());
        assert_eq!(palette.stage(), Some(Stage::Exit));
        palette.animation_end();
        assert!(!palette.is_mounted());
    }

    #[test]
    fn test_presence_reshow_during_exit() {
        let mut palette = Presence::default();
        palette.sync(true);
        palette.animation_end();
        palette.sync(false);
        palette.sync(true);
        assert_eq!(palette, Presence::Entering);

        // Hiding a hidden element does nothing.
        let mut hidden = Presence::Hidden;
        hidden.hide();
        hidden.animation_end();
        assert_eq!(hidden, Presence::Hidden);
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(Tween::GLYPH_STAGGER.stagger_delay_ms(0), 0);
        assert_eq!(Tween::GLYPH_STAGGER.stagger_delay_ms(5), 250);
        assert_eq!(Tween::CARD_STAGGER.stagger_delay_ms(3), 300);
    }

    #[test]
    fn test_spring_settle_bounds() {
        for spring in [Spring::HEART, Spring::PALETTE, Spring::GLYPH, Spring::CARD, Spring::NAVBAR] {
            let ms = spring.settle_ms();
            assert!((120..=900).contains(&ms), "{spring:?} -> {ms}");
        }
        assert!(Spring::CARD.css_var("card").starts_with("--card-duration: "));
    }
}
