//! Internationalization core for `sala-ui`.
//!
//! This module wires together:
//! - the locale registry (supported codes + display metadata, below)
//! - [`dictionary`] (embedded JSON documents, one per locale, with fallback)
//! - [`resolve`] (dot-path lookup into a loaded dictionary)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   th.json   (default/reference document)
//!   en.json   (additional locale)
//! ```
//!
//! To add a new locale:
//! 1. Copy `i18n/th.json` to `i18n/<code>.json` and translate every value
//!    (keep the key shape identical).
//! 2. Register the code in [`Locale`] and its metadata below.
//! 3. Run `cargo test -p sala-ui` to confirm completeness.
//!
//! Locale *selection* (cookie read/write, refresh) lives in
//! `crate::providers::locale`; everything here is pure data plumbing.

pub mod dictionary;
pub mod resolve;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use dictionary::{load_dictionary, Dictionary, DictionaryError};
pub use resolve::{resolve, Scoped};

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Th,
}

/// Locale used when no cookie is present or its value is unknown, and whose
/// document backs up every other locale's load failure.
pub const DEFAULT_LOCALE: Locale = Locale::Th;

impl Locale {
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Th => "th",
        }
    }

    /// Parse a cookie value. Anything but an exact supported code is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "th" => Some(Locale::Th),
            _ => None,
        }
    }

    /// Language name in its own script, for the switcher.
    pub const fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Th => "ไทย",
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            Locale::En => "🇬🇧",
            Locale::Th => "🇹🇭",
        }
    }

    pub const fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Th]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// True iff `code` names one of the supported locales.
pub fn is_valid_locale(code: &str) -> bool {
    Locale::from_code(code).is_some()
}

/// The value a `LocaleProvider` binds for its subtree: the active locale and
/// its fully loaded dictionary. Replaced wholesale on a locale switch, never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub locale: Locale,
    pub dict: Dictionary,
}

impl Translation {
    /// Resolve a dot-path scope against the bound dictionary. An empty path
    /// scopes to the whole dictionary.
    pub fn t(&self, scope: &str) -> Scoped<'_> {
        Scoped::new(resolve(&self.dict, scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_codes_round_trip() {
        for locale in Locale::all().iter().copied() {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
            assert!(is_valid_locale(locale.code()));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in ["fr", "EN", "Th", "en-US", "th ", ""] {
            assert!(!is_valid_locale(code), "{code:?} should not validate");
        }
    }

    #[test]
    fn thai_is_the_default() {
        assert_eq!(DEFAULT_LOCALE, Locale::Th);
    }

    #[test]
    fn translation_scopes_through_its_dictionary() {
        let translation = Translation {
            locale: Locale::En,
            dict: serde_json::json!({ "navigation": { "home": "Home" } }),
        };
        assert_eq!(translation.t("navigation").text("home"), "Home");
        assert_eq!(translation.t("").t("navigation.home").as_str(), "Home");
    }
}
