#![forbid(unsafe_code)]

//! Theme values: light/dark mode and accent palette.
//!
//! These are plain values. The observable context that owns the current
//! theme and persists it lives in `tessera-runtime`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class name applied to the document root.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Accent palettes offered by the color selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    #[default]
    Teal,
    Mintteal,
    Blue,
    Purple,
    Orange,
}

impl AccentColor {
    /// All accents in selector order.
    pub const ALL: [AccentColor; 5] = [
        AccentColor::Teal,
        AccentColor::Mintteal,
        AccentColor::Blue,
        AccentColor::Purple,
        AccentColor::Orange,
    ];

    /// Short label, also used as the `data-accent` attribute value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Teal => "teal",
            Self::Mintteal => "mintteal",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }

    /// Next accent in selector order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown accent name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAccent(pub String);

impl fmt::Display for UnknownAccent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown accent color {:?}", self.0)
    }
}

impl std::error::Error for UnknownAccent {}

impl FromStr for AccentColor {
    type Err = UnknownAccent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAccent(s.to_string()))
    }
}

/// Complete theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub accent: AccentColor,
}

impl ThemeState {
    /// Create a theme state.
    #[must_use]
    pub const fn new(mode: ThemeMode, accent: AccentColor) -> Self {
        Self { mode, accent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn accent_cycle_wraps() {
        let mut accent = AccentColor::Teal;
        for _ in 0..AccentColor::ALL.len() {
            accent = accent.next();
        }
        assert_eq!(accent, AccentColor::Teal);
        assert_eq!(AccentColor::Purple.next(), AccentColor::Orange);
        assert_eq!(AccentColor::Orange.next(), AccentColor::Teal);
    }

    #[test]
    fn accent_parse() {
        assert_eq!("Blue".parse::<AccentColor>(), Ok(AccentColor::Blue));
        assert_eq!(
            "magenta".parse::<AccentColor>(),
            Err(UnknownAccent("magenta".into()))
        );
    }

    #[test]
    fn default_theme_is_light_teal() {
        let state = ThemeState::default();
        assert_eq!(state.mode, ThemeMode::Light);
        assert_eq!(state.accent, AccentColor::Teal);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"mode":"light","accent":"teal"}"#);
    }
}
