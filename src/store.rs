// SPDX-License-Identifier: MPL-2.0
//! Durable key/value persistence for user preferences.
//!
//! Preferences survive process restarts as a flat string table in
//! `preferences.toml`. The store is deliberately forgiving: a missing or
//! unparseable file behaves as empty, a value of the wrong type behaves as
//! absent, and a failed write leaves the previously persisted values in
//! place for the next load. Resolvers keep their in-memory state either
//! way, so persistence trouble never surfaces to callers.
//!
//! # Path Resolution
//!
//! The preferences file location can be customized for testing or portable
//! deployments:
//! 1. Use [`FileStore::with_dir`] with an explicit directory
//! 2. Set `LEARN_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory

use crate::paths;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Store key for the persisted theme preference.
pub const KEY_THEME_MODE: &str = "theme_mode";

/// Store key for the persisted language preference.
pub const KEY_LANGUAGE: &str = "language";

/// Preferences file name within the config directory.
const PREFERENCES_FILE: &str = "preferences.toml";

/// Durable key/value persistence consumed by the resolvers.
///
/// Both operations are infallible from the caller's point of view: `get`
/// answers `None` for anything it cannot read, and `set` swallows (and
/// logs) write failures.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// TOML-backed store persisting to `preferences.toml`.
///
/// Every operation re-reads the file, so several `FileStore` instances
/// pointed at the same directory observe each other's writes.
#[derive(Debug)]
pub struct FileStore {
    path: Option<PathBuf>,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore {
    /// Creates a store at the default preferences path.
    pub fn new() -> Self {
        Self::with_dir(None)
    }

    /// Creates a store rooted at a custom directory.
    ///
    /// `None` uses the standard path resolution (see [`paths::get_config_dir`]).
    pub fn with_dir(base_dir: Option<PathBuf>) -> Self {
        let path = paths::get_config_dir_with_override(base_dir).map(|mut path| {
            path.push(PREFERENCES_FILE);
            path
        });
        Self { path }
    }

    /// Reads the current table, keeping only string-valued entries.
    ///
    /// A key holding a non-string value is treated as absent without
    /// discarding its siblings.
    fn read_table(&self) -> BTreeMap<String, String> {
        let Some(path) = &self.path else {
            return BTreeMap::new();
        };
        if !path.exists() {
            return BTreeMap::new();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                log::warn!("could not read preferences {}: {}", path.display(), error);
                return BTreeMap::new();
            }
        };

        match toml::from_str::<toml::Table>(&content) {
            Ok(table) => table
                .into_iter()
                .filter_map(|(key, value)| match value {
                    toml::Value::String(text) => Some((key, text)),
                    _ => None,
                })
                .collect(),
            Err(error) => {
                log::warn!(
                    "ignoring unparseable preferences {}: {}",
                    path.display(),
                    error
                );
                BTreeMap::new()
            }
        }
    }

    fn write_table(&self, table: &BTreeMap<String, String>) {
        let Some(path) = &self.path else {
            return;
        };

        if let Some(parent) = path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                log::warn!(
                    "could not create preferences directory {}: {}",
                    parent.display(),
                    error
                );
                return;
            }
        }

        let content = match toml::to_string_pretty(table) {
            Ok(content) => content,
            Err(error) => {
                log::warn!("could not serialize preferences: {}", error);
                return;
            }
        };

        if let Err(error) = fs::write(path, content) {
            log::warn!("could not write preferences {}: {}", path.display(), error);
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let mut table = self.read_table();
        table.remove(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut table = self.read_table();
        table.insert(key.to_string(), value.to_string());
        self.write_table(&table);
    }
}

/// In-memory store for tests and embeddings without disk access.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
