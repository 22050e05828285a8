use super::Locale;
use anyhow::{Context, Result, bail};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ID_MESSAGES: &str = include_str!("../../locales/id.toml");
const EN_MESSAGES: &str = include_str!("../../locales/en.toml");

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
}

/// A question/answer pair shown on the homepage and the FAQ page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A feature highlight shown on the homepage and the features page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureEntry {
    pub key: String,
    pub title: String,
    pub description: String,
}

/// The flattened message table of one locale
#[derive(Debug, Clone)]
pub struct Messages {
    locale: Locale,
    entries: BTreeMap<String, String>,
    faq: Vec<FaqEntry>,
    features: Vec<FeatureEntry>,
}

impl Messages {
    /// Parse a locale file. Nested tables become dotted keys; the
    /// `faq_items` and `feature_items` arrays are kept as structured lists.
    pub fn parse(locale: Locale, source: &str) -> Result<Self> {
        let mut table: toml::Table = toml::from_str(source)
            .with_context(|| format!("Failed to parse message table for locale '{}'", locale))?;

        let faq = match table.remove("faq_items") {
            Some(value) => value
                .try_into::<Vec<FaqEntry>>()
                .with_context(|| format!("Invalid faq_items in locale '{}'", locale))?,
            None => Vec::new(),
        };
        let features = match table.remove("feature_items") {
            Some(value) => value
                .try_into::<Vec<FeatureEntry>>()
                .with_context(|| format!("Invalid feature_items in locale '{}'", locale))?,
            None => Vec::new(),
        };

        let mut entries = BTreeMap::new();
        flatten("", &table, &mut entries)
            .with_context(|| format!("Invalid message table for locale '{}'", locale))?;

        Ok(Self {
            locale,
            entries,
            faq,
            features,
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a key without any fallback
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn faq(&self) -> &[FaqEntry] {
        &self.faq
    }

    pub fn features(&self) -> &[FeatureEntry] {
        &self.features
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut BTreeMap<String, String>) -> Result<()> {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            toml::Value::String(text) => {
                out.insert(full_key, text.clone());
            }
            toml::Value::Table(nested) => flatten(&full_key, nested, out)?,
            other => bail!(
                "Message '{}' must be a string or table, found {}",
                full_key,
                other.type_str()
            ),
        }
    }
    Ok(())
}

/// Message tables for every supported locale
#[derive(Debug, Clone)]
pub struct MessageStore {
    id: Messages,
    en: Messages,
}

impl MessageStore {
    /// Load the message tables compiled into the binary
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            id: Messages::parse(Locale::Id, ID_MESSAGES)?,
            en: Messages::parse(Locale::En, EN_MESSAGES)?,
        })
    }

    pub fn messages(&self, locale: Locale) -> &Messages {
        match locale {
            Locale::Id => &self.id,
            Locale::En => &self.en,
        }
    }

    /// A translator for `locale` backed by the default locale's table
    pub fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator {
            primary: self.messages(locale),
            fallback: self.messages(Locale::DEFAULT),
        }
    }
}

/// Resolves message keys for one locale
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    primary: &'a Messages,
    fallback: &'a Messages,
}

impl<'a> Translator<'a> {
    pub fn locale(&self) -> Locale {
        self.primary.locale()
    }

    /// Resolve `key`. A miss in the requested locale falls back to the
    /// default locale; a miss everywhere renders the key itself.
    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        if let Some(text) = self.primary.get(key) {
            return text;
        }
        if let Some(text) = self.fallback.get(key) {
            tracing::warn!(
                key,
                locale = %self.primary.locale(),
                "Message missing, using default locale"
            );
            return text;
        }
        tracing::warn!(key, locale = %self.primary.locale(), "Message missing in every locale");
        key
    }

    /// Resolve `key` and substitute `{name}` placeholders from `args`.
    /// Unknown placeholders are left untouched.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.t(key);
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                let name = &caps[1];
                args.iter()
                    .find(|(arg, _)| *arg == name)
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    pub fn faq(&self) -> &'a [FaqEntry] {
        if self.primary.faq().is_empty() {
            self.fallback.faq()
        } else {
            self.primary.faq()
        }
    }

    pub fn features(&self) -> &'a [FeatureEntry] {
        if self.primary.features().is_empty() {
            self.fallback.features()
        } else {
            self.primary.features()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_embedded_tables_load() {
        let store = MessageStore::embedded().expect("embedded messages should parse");
        for locale in Locale::ALL {
            let messages = store.messages(locale);
            assert_eq!(messages.locale(), locale);
            assert!(!messages.is_empty());
            assert!(!messages.faq().is_empty());
            assert_eq!(messages.features().len(), 6);
        }
    }

    #[test]
    fn test_locales_share_the_same_keys() {
        let store = MessageStore::embedded().unwrap();
        let id: BTreeSet<&str> = store.messages(Locale::Id).keys().collect();
        let en: BTreeSet<&str> = store.messages(Locale::En).keys().collect();

        let only_id: Vec<_> = id.difference(&en).collect();
        let only_en: Vec<_> = en.difference(&id).collect();
        assert!(only_id.is_empty(), "keys missing from en: {:?}", only_id);
        assert!(only_en.is_empty(), "keys missing from id: {:?}", only_en);

        assert_eq!(
            store.messages(Locale::Id).faq().len(),
            store.messages(Locale::En).faq().len()
        );
        let id_features: Vec<_> = store.messages(Locale::Id).features().iter().map(|f| &f.key).collect();
        let en_features: Vec<_> = store.messages(Locale::En).features().iter().map(|f| &f.key).collect();
        assert_eq!(id_features, en_features);
    }

    #[test]
    fn test_no_message_is_blank() {
        let store = MessageStore::embedded().unwrap();
        for locale in Locale::ALL {
            let messages = store.messages(locale);
            for key in messages.keys() {
                let text = messages.get(key).unwrap();
                assert!(!text.trim().is_empty(), "{}:{} is blank", locale, key);
            }
        }
    }

    #[test]
    fn test_flatten_produces_dotted_keys() {
        let messages = Messages::parse(
            Locale::En,
            r#"
            title = "Top"
            [header.nav]
            about = "About"
            "#,
        )
        .unwrap();
        assert_eq!(messages.get("title"), Some("Top"));
        assert_eq!(messages.get("header.nav.about"), Some("About"));
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_non_string_message_is_rejected() {
        let err = Messages::parse(Locale::En, "count = 3").unwrap_err();
        assert!(format!("{:#}", err).contains("count"));
    }

    #[test]
    fn test_translator_falls_back_to_default_locale() {
        let id = Messages::parse(Locale::Id, "greeting = \"Halo\"\nonly_id = \"Hanya\"").unwrap();
        let en = Messages::parse(Locale::En, "greeting = \"Hello\"").unwrap();
        let store = MessageStore { id, en };

        let t = store.translator(Locale::En);
        assert_eq!(t.t("greeting"), "Hello");
        assert_eq!(t.t("only_id"), "Hanya");
        assert_eq!(t.t("nowhere.to.be.found"), "nowhere.to.be.found");
    }

    #[test]
    fn test_placeholders_are_substituted() {
        let store = MessageStore::embedded().unwrap();
        let t = store.translator(Locale::En);
        let text = t.t_with("footer.copyright", &[("year", "2026")]);
        assert!(text.contains("2026"));
        assert!(!text.contains("{year}"));
    }
}
