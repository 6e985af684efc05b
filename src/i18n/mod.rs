// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the platform.
//!
//! This module tracks the active language and resolves dotted string keys
//! against a static per-language catalog. String tables are embedded at
//! build time; lookup is total and silently degrades through the fallback
//! chain so rendering never breaks on an incomplete catalog.

pub mod catalog;
pub mod resolver;

pub use catalog::TranslationCatalog;
pub use resolver::LocalizationResolver;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported interface languages.
///
/// The platform ships exactly two, so `toggled` is a plain flip. Adding a
/// third language means replacing the flip with explicit cyclic or
/// menu-driven selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ja, Language::En];

    /// Stable locale code, also the persisted form.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    /// Flips between the two supported locales.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::Ja => Language::En,
            Language::En => Language::Ja,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Error> {
        match raw.to_lowercase().as_str() {
            "ja" => Ok(Language::Ja),
            "en" => Ok(Language::En),
            other => Err(Error::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Presentation-layer side effect: the document locale attribute.
///
/// The core calls this but does not implement it.
pub trait LocaleApplicator {
    fn apply_locale(&mut self, language: Language);
}
