// SPDX-License-Identifier: MPL-2.0
//! Single entry point wiring both resolvers to their collaborators.
//!
//! The engine is constructed once at process start and passed by
//! reference to consumers; there is no global state. It owns the store,
//! the appearance signal, and the presentation applicators, and threads
//! them through the resolvers on every operation.

use crate::error::Result;
use crate::i18n::{Language, LocaleApplicator, LocalizationResolver, TranslationCatalog};
use crate::store::PreferenceStore;
use crate::theme::{AppearanceSignal, EffectiveTheme, ThemeApplicator, ThemeMode, ThemeResolver};

pub struct PreferenceEngine {
    store: Box<dyn PreferenceStore>,
    signal: Box<dyn AppearanceSignal>,
    theme_applicator: Box<dyn ThemeApplicator>,
    locale_applicator: Box<dyn LocaleApplicator>,
    theme: ThemeResolver,
    localization: LocalizationResolver,
}

impl PreferenceEngine {
    pub fn new(
        store: Box<dyn PreferenceStore>,
        signal: Box<dyn AppearanceSignal>,
        theme_applicator: Box<dyn ThemeApplicator>,
        locale_applicator: Box<dyn LocaleApplicator>,
        catalog: TranslationCatalog,
    ) -> Self {
        Self {
            store,
            signal,
            theme_applicator,
            locale_applicator,
            theme: ThemeResolver::new(),
            localization: LocalizationResolver::new(catalog),
        }
    }

    /// Loads both persisted preferences and applies the resolved values.
    ///
    /// Safe to call again; the theme side re-registers its signal
    /// subscription without stacking listeners.
    pub fn initialize(&mut self) {
        self.theme.initialize(
            self.store.as_mut(),
            self.signal.as_mut(),
            self.theme_applicator.as_mut(),
        );
        self.localization
            .initialize(self.store.as_mut(), self.locale_applicator.as_mut());
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn effective_theme(&self) -> EffectiveTheme {
        self.theme.effective()
    }

    pub fn language(&self) -> Language {
        self.localization.language()
    }

    /// See [`LocalizationResolver::translate`].
    pub fn translate(&self, key: &str, fallback: Option<&str>) -> String {
        self.localization.translate(key, fallback)
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme.set_mode(
            mode,
            self.store.as_mut(),
            self.signal.as_ref(),
            self.theme_applicator.as_mut(),
        );
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle(
            self.store.as_mut(),
            self.signal.as_ref(),
            self.theme_applicator.as_mut(),
        );
    }

    pub fn set_language(&mut self, language: Language) {
        self.localization.set_language(
            language,
            self.store.as_mut(),
            self.locale_applicator.as_mut(),
        );
    }

    /// Sets the language from a raw locale code; unsupported codes are
    /// signaled back to the caller.
    pub fn set_language_code(&mut self, code: &str) -> Result<()> {
        self.localization.set_language_code(
            code,
            self.store.as_mut(),
            self.locale_applicator.as_mut(),
        )
    }

    pub fn toggle_language(&mut self) {
        self.localization
            .toggle(self.store.as_mut(), self.locale_applicator.as_mut());
    }

    /// Forwarded by the host event loop when the OS appearance changes.
    pub fn os_appearance_changed(&mut self) {
        self.theme
            .os_appearance_changed(self.signal.as_ref(), self.theme_applicator.as_mut());
    }

    /// Releases the signal subscription. Runs automatically on drop.
    pub fn teardown(&mut self) {
        self.theme.teardown(self.signal.as_mut());
    }
}

impl Drop for PreferenceEngine {
    fn drop(&mut self) {
        self.teardown();
    }
}
