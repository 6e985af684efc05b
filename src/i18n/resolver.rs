// SPDX-License-Identifier: MPL-2.0
//! Resolves the active language and exposes catalog lookup.

use super::catalog::TranslationCatalog;
use super::{Language, LocaleApplicator};
use crate::error::Result;
use crate::store::{PreferenceStore, KEY_LANGUAGE};

/// Resolves the active language and answers `translate` calls against the
/// static catalog.
///
/// Collaborators are borrowed per call so a single store can be shared
/// with the theme side by the embedding application.
#[derive(Debug)]
pub struct LocalizationResolver {
    language: Language,
    catalog: TranslationCatalog,
}

impl LocalizationResolver {
    pub fn new(catalog: TranslationCatalog) -> Self {
        Self {
            language: Language::default(),
            catalog,
        }
    }

    /// Currently active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Loads the persisted language, applies the locale attribute, and
    /// persists the resolved value back.
    ///
    /// Absent or unreadable stored values fall back to `ja` without
    /// propagating an error.
    pub fn initialize(
        &mut self,
        store: &mut dyn PreferenceStore,
        applicator: &mut dyn LocaleApplicator,
    ) {
        self.language = store
            .get(KEY_LANGUAGE)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        applicator.apply_locale(self.language);
        store.set(KEY_LANGUAGE, self.language.code());
    }

    /// Sets the language, persists it, and re-applies the locale
    /// attribute. Every variant is valid input.
    pub fn set_language(
        &mut self,
        language: Language,
        store: &mut dyn PreferenceStore,
        applicator: &mut dyn LocaleApplicator,
    ) {
        self.language = language;
        store.set(KEY_LANGUAGE, language.code());
        applicator.apply_locale(language);
    }

    /// Sets the language from a raw locale code.
    ///
    /// An unsupported code is a caller error: it is signaled back and the
    /// active language stays untouched.
    pub fn set_language_code(
        &mut self,
        code: &str,
        store: &mut dyn PreferenceStore,
        applicator: &mut dyn LocaleApplicator,
    ) -> Result<()> {
        let language: Language = code.parse()?;
        self.set_language(language, store, applicator);
        Ok(())
    }

    /// Flips between the two supported locales.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore, applicator: &mut dyn LocaleApplicator) {
        self.set_language(self.language.toggled(), store, applicator);
    }

    /// Resolves `key` against the active language's catalog.
    ///
    /// When the key does not resolve to a string, returns `fallback` if
    /// given, else the key itself — the result is always printable and
    /// the call never fails. Pure with respect to resolver state; safe to
    /// call many times per render cycle.
    pub fn translate(&self, key: &str, fallback: Option<&str>) -> String {
        match self.catalog.lookup(self.language, key) {
            Some(text) => text.to_string(),
            None => fallback.unwrap_or(key).to_string(),
        }
    }
}
