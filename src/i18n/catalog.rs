// SPDX-License-Identifier: MPL-2.0
//! Static per-language string catalog.
//!
//! Catalogs are nested TOML tables embedded at build time, one file per
//! supported language (`assets/i18n/<code>.toml`). Lookup walks a dotted
//! key segment by segment and reports absence instead of failing, so the
//! caller's fallback chain always produces a printable string.

use super::Language;
use crate::error::Result;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use toml::Value;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Mapping from language to a nested table of display strings.
///
/// Loaded once at process start and never mutated afterwards. Keys need
/// not be identical across languages; lookup tolerates gaps per language.
#[derive(Debug, Default)]
pub struct TranslationCatalog {
    tables: HashMap<Language, toml::Table>,
}

impl TranslationCatalog {
    /// Creates a catalog with no entries; every lookup falls back.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the catalogs embedded in the binary.
    ///
    /// A language whose asset is missing or unparseable gets no table;
    /// its lookups then degrade through the fallback chain instead of
    /// aborting startup.
    pub fn embedded() -> Self {
        let mut catalog = Self::empty();
        for language in Language::ALL {
            let filename = format!("{}.toml", language.code());
            let Some(content) = Asset::get(&filename) else {
                log::warn!("no embedded catalog for {}", language.code());
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref());
            if let Err(error) = catalog.load(language, &source) {
                log::warn!("ignoring malformed catalog {}: {}", filename, error);
            }
        }
        catalog
    }

    /// Parses a TOML string table for one language, replacing any table
    /// loaded for it before.
    pub fn load(&mut self, language: Language, source: &str) -> Result<()> {
        let table: toml::Table = toml::from_str(source)?;
        self.tables.insert(language, table);
        Ok(())
    }

    /// Resolves a dotted key against one language's table.
    ///
    /// Splits `key` on `.` and walks the nested tables segment by
    /// segment. Answers `None` when a segment is absent, when an
    /// intermediate value is not a table, or when the walk lands on
    /// anything but a string.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let table = self.tables.get(&language)?;
        let mut cursor: Option<&Value> = None;
        for segment in key.split('.') {
            let next = match cursor {
                None => table.get(segment),
                Some(value) => value.as_table().and_then(|nested| nested.get(segment)),
            };
            cursor = Some(next?);
        }
        cursor.and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(source: &str) -> TranslationCatalog {
        let mut catalog = TranslationCatalog::empty();
        catalog
            .load(Language::En, source)
            .expect("test catalog should parse");
        catalog
    }

    #[test]
    fn lookup_resolves_a_nested_key() {
        let catalog = catalog_with("[a.b]\nc = \"X\"\n");
        assert_eq!(catalog.lookup(Language::En, "a.b.c"), Some("X"));
    }

    #[test]
    fn lookup_misses_on_absent_leaf() {
        let catalog = catalog_with("[a.b]\nc = \"X\"\n");
        assert_eq!(catalog.lookup(Language::En, "a.b.missing"), None);
    }

    #[test]
    fn lookup_misses_on_absent_intermediate() {
        let catalog = catalog_with("[a.b]\nc = \"X\"\n");
        assert_eq!(catalog.lookup(Language::En, "a.nope.c"), None);
    }

    #[test]
    fn lookup_misses_when_walking_through_a_string() {
        let catalog = catalog_with("a = \"leaf\"\n");
        assert_eq!(catalog.lookup(Language::En, "a.b"), None);
    }

    #[test]
    fn lookup_misses_on_non_string_terminal() {
        // a.b resolves to a table, not a string: behaves exactly like a
        // missing key
        let catalog = catalog_with("[a.b]\nc = \"X\"\n");
        assert_eq!(catalog.lookup(Language::En, "a.b"), None);
    }

    #[test]
    fn lookup_misses_for_an_unloaded_language() {
        let catalog = catalog_with("[a]\nb = \"X\"\n");
        assert_eq!(catalog.lookup(Language::Ja, "a.b"), None);
    }

    #[test]
    fn lookup_handles_single_segment_keys() {
        let catalog = catalog_with("greeting = \"hello\"\n");
        assert_eq!(catalog.lookup(Language::En, "greeting"), Some("hello"));
    }

    #[test]
    fn malformed_source_is_rejected() {
        let mut catalog = TranslationCatalog::empty();
        assert!(catalog.load(Language::En, "not = valid = toml").is_err());
    }

    #[test]
    fn embedded_catalog_carries_both_languages() {
        let catalog = TranslationCatalog::embedded();
        assert_eq!(
            catalog.lookup(Language::En, "common.loading"),
            Some("Loading...")
        );
        assert_eq!(
            catalog.lookup(Language::Ja, "common.loading"),
            Some("読み込み中...")
        );
    }

    #[test]
    fn embedded_catalog_keys_may_differ_per_language() {
        // Both tables happen to cover the same sections today; the walk
        // must still answer per-language
        let catalog = TranslationCatalog::embedded();
        assert_eq!(
            catalog.lookup(Language::Ja, "theme.system"),
            Some("システム")
        );
        assert_eq!(catalog.lookup(Language::En, "theme.system"), Some("System"));
    }
}
