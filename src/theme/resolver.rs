// SPDX-License-Identifier: MPL-2.0
//! Resolves persisted theme intent to the concrete applied theme.

use super::signal::{AppearanceSignal, SignalToken};
use super::{EffectiveTheme, ThemeApplicator, ThemeMode};
use crate::store::{PreferenceStore, KEY_THEME_MODE};

/// Resolves `{light, dark, system}` intent to an effective `{light, dark}`
/// value, tracking the OS appearance signal while the intent is `System`.
///
/// Collaborators are borrowed per call so a single store and signal can be
/// shared across resolvers by the embedding application. The resolver owns
/// at most one live signal subscription: it is registered during
/// [`initialize`](Self::initialize) and released by
/// [`teardown`](Self::teardown), which must run before the signal is
/// dropped.
#[derive(Debug, Default)]
pub struct ThemeResolver {
    mode: ThemeMode,
    effective: EffectiveTheme,
    subscription: Option<SignalToken>,
}

impl ThemeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently stored user intent.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Theme currently applied to the presentation layer.
    pub fn effective(&self) -> EffectiveTheme {
        self.effective
    }

    /// Loads the persisted intent, resolves and applies the effective
    /// theme, persists the resolved intent back, and registers the signal
    /// subscription.
    ///
    /// Absent or unreadable stored values fall back to `System` without
    /// propagating an error. The signal is only queried when the loaded
    /// intent is `System`; a pinned `light`/`dark` resolves without
    /// touching it. Calling this again first releases the previous
    /// subscription, so repeated initialization never stacks listeners.
    pub fn initialize(
        &mut self,
        store: &mut dyn PreferenceStore,
        signal: &mut dyn AppearanceSignal,
        applicator: &mut dyn ThemeApplicator,
    ) {
        if let Some(token) = self.subscription.take() {
            signal.unsubscribe(token);
        }

        self.mode = store
            .get(KEY_THEME_MODE)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        self.effective = resolve_effective(self.mode, signal);
        applicator.apply_theme(self.effective);
        store.set(KEY_THEME_MODE, self.mode.as_str());

        self.subscription = Some(signal.subscribe());
    }

    /// Sets the intent, recomputes the effective theme, re-applies it, and
    /// persists. Every variant is valid input; there is no error path.
    pub fn set_mode(
        &mut self,
        mode: ThemeMode,
        store: &mut dyn PreferenceStore,
        signal: &dyn AppearanceSignal,
        applicator: &mut dyn ThemeApplicator,
    ) {
        self.mode = mode;
        self.effective = resolve_effective(mode, signal);
        applicator.apply_theme(self.effective);
        store.set(KEY_THEME_MODE, mode.as_str());
    }

    /// Advances the intent through the light, dark, system cycle.
    pub fn toggle(
        &mut self,
        store: &mut dyn PreferenceStore,
        signal: &dyn AppearanceSignal,
        applicator: &mut dyn ThemeApplicator,
    ) {
        self.set_mode(self.mode.toggled(), store, signal, applicator);
    }

    /// Handles an OS appearance change delivered by the host event loop.
    ///
    /// Only acts while the intent is `System`; with a pinned intent the
    /// event is ignored with no recomputation and no re-apply.
    pub fn os_appearance_changed(
        &mut self,
        signal: &dyn AppearanceSignal,
        applicator: &mut dyn ThemeApplicator,
    ) {
        if self.mode != ThemeMode::System {
            return;
        }
        self.effective = signal.read();
        applicator.apply_theme(self.effective);
    }

    /// Releases the signal subscription.
    ///
    /// Must run before the resolver or the signal is disposed of; safe to
    /// call when no subscription is live.
    pub fn teardown(&mut self, signal: &mut dyn AppearanceSignal) {
        if let Some(token) = self.subscription.take() {
            signal.unsubscribe(token);
        }
    }
}

fn resolve_effective(mode: ThemeMode, signal: &dyn AppearanceSignal) -> EffectiveTheme {
    match mode {
        ThemeMode::Light => EffectiveTheme::Light,
        ThemeMode::Dark => EffectiveTheme::Dark,
        ThemeMode::System => signal.read(),
    }
}
