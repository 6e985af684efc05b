// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the preference store.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests
//!    and portable deployments)
//! 2. **Environment variable** (`LEARN_LENS_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! The explicit override has highest priority because it's the most specific -
//! when code explicitly passes a path, it should always be respected.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "LearnLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LEARN_LENS_CONFIG_DIR";

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (preferences.toml).
///
/// # Resolution Order
///
/// 1. `LEARN_LENS_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/LearnLens/`
///    - macOS: `~/Library/Application Support/LearnLens/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\LearnLens\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_config_dir() -> Option<PathBuf> {
    get_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
