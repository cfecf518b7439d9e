//! Theme system for the feed.
//!
//! Provides 2 themes: Dusk (dark glass, the default) and Daylight. The theme
//! is chosen at launch with `--theme`.

use std::str::FromStr;

use dioxus::prelude::*;

/// Available themes for the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dusk,
    Daylight,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Dusk => "dusk",
            Theme::Daylight => "daylight",
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Dusk, Theme::Daylight]
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.css_value().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown theme '{s}' (expected dusk or daylight)"))
    }
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!("dusk".parse::<Theme>(), Ok(Theme::Dusk));
        assert_eq!("Daylight".parse::<Theme>(), Ok(Theme::Daylight));
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn test_css_values_roundtrip() {
        for t in Theme::all() {
            assert_eq!(t.css_value().parse::<Theme>(), Ok(*t));
        }
    }
}
