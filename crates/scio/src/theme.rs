//! The two-value color theme shared by the frontend provider and anything
//! that needs to reason about the persisted flag.
//!
//! The persisted representation is the string `"dark"` or `"light"` under the
//! [`THEME_STORAGE_KEY`] key in the client's local storage. Anything else,
//! including an absent key, falls back to dark.

use std::fmt;

/// Local storage key the theme is persisted under.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The persisted string form of the theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parses a persisted theme string. Only `"light"` selects the light
    /// theme; every other value is treated as dark.
    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn only_light_parses_as_light() {
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Dark);
        assert_eq!(Theme::parse("solarized"), Theme::Dark);
    }

    #[test]
    fn round_trips_through_persisted_form() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
    }

    #[test]
    fn dark_mode_flag_maps_to_theme() {
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
        assert_eq!(Theme::from_dark_mode(false).as_str(), "light");
    }
}
