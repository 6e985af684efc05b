// SPDX-License-Identifier: MPL-2.0
//! OS appearance signal access.
//!
//! The resolver never talks to the OS directly. It reads a point-in-time
//! value and registers interest through [`AppearanceSignal`]; event
//! delivery stays with the host event loop, which forwards appearance
//! changes to [`ThemeResolver::os_appearance_changed`] while a
//! subscription is live.
//!
//! [`ThemeResolver::os_appearance_changed`]: super::resolver::ThemeResolver::os_appearance_changed

use super::EffectiveTheme;

/// Handle for a registered appearance listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalToken(u64);

/// Live OS color-scheme signal.
///
/// `subscribe` registers interest and hands back a token; the same token
/// must be passed to `unsubscribe` on teardown so the host stops
/// forwarding events. A well-behaved subscriber holds at most one live
/// token at a time.
pub trait AppearanceSignal {
    /// Point-in-time appearance query.
    fn read(&self) -> EffectiveTheme;

    /// Registers interest in appearance changes.
    fn subscribe(&mut self) -> SignalToken;

    /// Releases a previously registered listener.
    fn unsubscribe(&mut self, token: SignalToken);
}

/// Appearance signal backed by the desktop environment.
#[derive(Debug, Default)]
pub struct DesktopAppearance {
    next_token: u64,
    live: Vec<SignalToken>,
}

impl DesktopAppearance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently registered listeners.
    pub fn live_subscriptions(&self) -> usize {
        self.live.len()
    }
}

impl AppearanceSignal for DesktopAppearance {
    fn read(&self) -> EffectiveTheme {
        // Default to dark on detection error or no stated preference
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            EffectiveTheme::Light
        } else {
            EffectiveTheme::Dark
        }
    }

    fn subscribe(&mut self) -> SignalToken {
        let token = SignalToken(self.next_token);
        self.next_token += 1;
        self.live.push(token);
        token
    }

    fn unsubscribe(&mut self, token: SignalToken) {
        self.live.retain(|live| *live != token);
    }
}

/// Appearance signal driven by the embedding application.
///
/// For hosts without desktop detection (headless shells, web embeddings)
/// and for tests: the host sets the value, then notifies the resolver of
/// the change.
#[derive(Debug)]
pub struct ManualAppearance {
    value: EffectiveTheme,
    next_token: u64,
    live: Vec<SignalToken>,
}

impl ManualAppearance {
    pub fn new(value: EffectiveTheme) -> Self {
        Self {
            value,
            next_token: 0,
            live: Vec::new(),
        }
    }

    /// Updates the value returned by `read`.
    ///
    /// This only changes the point-in-time value; delivering the change
    /// event to subscribers remains the host's job.
    pub fn set_value(&mut self, value: EffectiveTheme) {
        self.value = value;
    }

    /// Number of currently registered listeners.
    pub fn live_subscriptions(&self) -> usize {
        self.live.len()
    }
}

impl AppearanceSignal for ManualAppearance {
    fn read(&self) -> EffectiveTheme {
        self.value
    }

    fn subscribe(&mut self) -> SignalToken {
        let token = SignalToken(self.next_token);
        self.next_token += 1;
        self.live.push(token);
        token
    }

    fn unsubscribe(&mut self, token: SignalToken) {
        self.live.retain(|live| *live != token);
    }
}
