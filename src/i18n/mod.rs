//! Locales and translated messages
//!
//! Every user-facing string on the site is looked up through a [`Translator`],
//! which resolves a dotted key (`header.nav.about`) against the table of the
//! requested locale and falls back to the default locale's table. The tables
//! are embedded at compile time and loaded once at startup into a
//! [`MessageStore`] that is shared by all requests.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod messages;

pub use messages::{FaqEntry, FeatureEntry, MessageStore, Messages, Translator};

/// A supported display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Bahasa Indonesia
    Id,
    /// English
    En,
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Locale {
    /// All supported locales, in the order they are offered to visitors
    pub const ALL: [Locale; 2] = [Locale::Id, Locale::En];

    /// Locale whose message table backs every other table
    pub const DEFAULT: Locale = Locale::Id;

    /// Short code used in URLs (`id`, `en`)
    pub fn code(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::En => "en",
        }
    }

    /// Parse a locale code, tolerating case and region suffixes (`en-US`, `id_ID`)
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "id" => Some(Self::Id),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Parse a locale code, falling back to `fallback` when it is not supported
    pub fn resolve_or(value: &str, fallback: Locale) -> Self {
        Self::parse(value).unwrap_or(fallback)
    }

    /// BCP 47 tag used in `hreflang` alternates
    pub fn hreflang(self) -> &'static str {
        match self {
            Self::Id => "id-ID",
            Self::En => "en-US",
        }
    }

    /// OpenGraph locale identifier
    pub fn og_locale(self) -> &'static str {
        match self {
            Self::Id => "id_ID",
            Self::En => "en_US",
        }
    }

    /// The other supported locale, used by the language switcher
    pub fn alternate(self) -> Self {
        match self {
            Self::Id => Self::En,
            Self::En => Self::Id,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| anyhow!("Unsupported locale '{}' (expected 'id' or 'en')", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_region_tags() {
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("ID_id"), Some(Locale::Id));
        assert_eq!(Locale::parse(" en "), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        assert_eq!(Locale::resolve_or("de", Locale::Id), Locale::Id);
        assert_eq!(Locale::resolve_or("de", Locale::En), Locale::En);
        assert_eq!(Locale::resolve_or("en", Locale::Id), Locale::En);
    }

    #[test]
    fn test_from_str_reports_unsupported_locale() {
        let err = "xx".parse::<Locale>().unwrap_err();
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn test_alternate_is_involution() {
        for locale in Locale::ALL {
            assert_eq!(locale.alternate().alternate(), locale);
            assert_ne!(locale.alternate(), locale);
        }
    }
}
