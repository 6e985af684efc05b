// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// A catalog asset failed to parse.
    Catalog(String),

    /// A persisted preference value did not match any known variant.
    Preference(String),

    /// A locale code outside the supported set was passed in.
    /// Signaled back to the caller rather than silently coerced,
    /// since coercing would hide integration bugs.
    UnsupportedLanguage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Preference(e) => write!(f, "Preference Error: {}", e),
            Error::UnsupportedLanguage(code) => write!(f, "Unsupported language: {}", code),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Catalog(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_catalog_error() {
        let err = Error::Catalog("bad table".to_string());
        assert_eq!(format!("{}", err), "Catalog Error: bad table");
    }

    #[test]
    fn display_formats_unsupported_language() {
        let err = Error::UnsupportedLanguage("fr".to_string());
        assert_eq!(format!("{}", err), "Unsupported language: fr");
    }

    #[test]
    fn from_toml_error_produces_catalog_variant() {
        let toml_error = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = toml_error.into();
        match err {
            Error::Catalog(message) => assert!(!message.is_empty()),
            _ => panic!("expected Catalog variant"),
        }
    }

    #[test]
    fn preference_error_formats_properly() {
        let err = Error::Preference("invalid theme_mode: blue".into());
        assert_eq!(
            format!("{}", err),
            "Preference Error: invalid theme_mode: blue"
        );
    }
}
