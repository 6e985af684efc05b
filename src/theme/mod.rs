// SPDX-License-Identifier: MPL-2.0
//! Theme preference resolution.
//!
//! A persisted [`ThemeMode`] records what the user asked for; the derived
//! [`EffectiveTheme`] is what actually gets applied to the presentation
//! layer. `System` intent follows the OS appearance signal, everything
//! else pins the theme.

pub mod resolver;
pub mod signal;

pub use resolver::ThemeResolver;
pub use signal::{AppearanceSignal, DesktopAppearance, ManualAppearance, SignalToken};

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Persisted theme intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Advances the intent cyclically: light, dark, system, light.
    ///
    /// The order is an observable behavior, chosen so repeated toggling
    /// walks through all three states predictably.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Error> {
        match raw.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(Error::Preference(format!("invalid theme_mode: {}", other))),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete theme actually applied to the presentation layer.
///
/// Never persisted; recomputed whenever the intent changes or, while the
/// intent is `System`, whenever the OS signal changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl EffectiveTheme {
    /// Returns true if the effective theme is dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, EffectiveTheme::Dark)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EffectiveTheme::Light => "light",
            EffectiveTheme::Dark => "dark",
        }
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation-layer side effect issued by the resolver.
///
/// The core calls this but does not implement it; the embedding
/// application decides what "applying a theme" means.
pub trait ThemeApplicator {
    fn apply_theme(&mut self, theme: EffectiveTheme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_light_dark_system() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::System);
        assert_eq!(ThemeMode::System.toggled(), ThemeMode::Light);
    }

    #[test]
    fn toggle_three_times_returns_to_start() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(mode.toggled().toggled().toggled(), mode);
        }
    }

    #[test]
    fn from_str_accepts_known_modes() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("system".parse::<ThemeMode>().unwrap(), ThemeMode::System);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
    }

    #[test]
    fn from_str_rejects_unknown_mode() {
        assert!("blue".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn serde_form_matches_stored_form() {
        // The persisted strings and the serde representation must agree,
        // so preferences written by either path stay readable.
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }

        let parsed: Wrapper = toml::from_str("mode = \"dark\"").unwrap();
        assert_eq!(parsed.mode, ThemeMode::Dark);
        assert_eq!(parsed.mode.as_str(), "dark");
    }

    #[test]
    fn effective_theme_is_dark() {
        assert!(EffectiveTheme::Dark.is_dark());
        assert!(!EffectiveTheme::Light.is_dark());
    }
}
