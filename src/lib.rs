// SPDX-License-Identifier: MPL-2.0
//! `learn_lens` is the user preference resolution engine of the LearnLens
//! learning platform.
//!
//! It covers the two subsystems with real state behind the UI: theme
//! resolution (light/dark/system intent tracking the OS appearance) and
//! localization (active language plus key lookup with fallback). Both
//! follow the same pattern: persisted user intent, a derived effective
//! value, reactive recomputation on external change, and notification of
//! the presentation layer. Pages, navigation, and styling are consumers
//! and live elsewhere.

#![doc(html_root_url = "https://docs.rs/learn_lens/0.1.0")]

pub mod engine;
pub mod error;
pub mod i18n;
pub mod paths;
pub mod store;
pub mod theme;
