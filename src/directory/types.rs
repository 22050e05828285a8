//! Directory data model

use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Directory category. The camelCase key is what appears in URLs
/// (`?category=openData`) and in message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    OpenData,
    DevelopmentInfo,
    PublicServices,
    Education,
    Health,
    Economy,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::OpenData,
        Category::DevelopmentInfo,
        Category::PublicServices,
        Category::Education,
        Category::Health,
        Category::Economy,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::OpenData => "openData",
            Self::DevelopmentInfo => "developmentInfo",
            Self::PublicServices => "publicServices",
            Self::Education => "education",
            Self::Health => "health",
            Self::Economy => "economy",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Accent used for the category's filter button and cards
    pub fn accent(self) -> Accent {
        match self {
            Self::OpenData => Accent::Blue,
            Self::DevelopmentInfo => Accent::Green,
            Self::PublicServices => Accent::Purple,
            Self::Education => Accent::Orange,
            Self::Health => Accent::Red,
            Self::Economy => Accent::Teal,
        }
    }

    /// Message key of the category's display title
    pub fn title_key(self) -> String {
        format!("applications.categories.{}.title", self.key())
    }

    /// Message key of the category's short description
    pub fn description_key(self) -> String {
        format!("applications.categories.{}.description", self.key())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Availability of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Available,
    ComingSoon,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::ComingSoon => "coming-soon",
        }
    }
}

/// Presentational accent colour. Unknown names deserialize as [`Accent::Gray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Teal,
    #[default]
    #[serde(other)]
    Gray,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Teal => "teal",
            Self::Gray => "gray",
        }
    }
}

/// One value per supported locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub id: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Id => &self.id,
            Locale::En => &self.en,
        }
    }
}

/// An entry of the application directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: String,
    pub category: Category,
    pub title: Localized<String>,
    pub description: Localized<String>,
    pub status: Status,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Localized<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub color: Accent,
}

impl ApplicationRecord {
    pub fn is_available(&self) -> bool {
        self.status == Status::Available
    }

    pub fn title(&self, locale: Locale) -> &str {
        self.title.get(locale)
    }

    pub fn description(&self, locale: Locale) -> &str {
        self.description.get(locale)
    }

    pub fn tags(&self, locale: Locale) -> &[String] {
        self.tags.get(locale)
    }
}

/// A recently launched partner application promoted on the homepage. These
/// live on their own sites and are not part of the directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotlightEntry {
    pub id: String,
    pub category: Category,
    pub title: Localized<String>,
    pub description: Localized<String>,
    pub content: Localized<String>,
    pub link: String,
    #[serde(default)]
    pub color: Accent,
}

impl SpotlightEntry {
    pub fn title(&self, locale: Locale) -> &str {
        self.title.get(locale)
    }

    pub fn description(&self, locale: Locale) -> &str {
        self.description.get(locale)
    }

    pub fn content(&self, locale: Locale) -> &str {
        self.content.get(locale)
    }
}

/// Directory layout selected by the `view` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Anything other than `list` is the grid
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("list") => Self::List,
            _ => Self::Grid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

/// Constraints applied to the directory for one page view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Category key; `None` matches every category
    pub category: Option<String>,
    /// Free-text search; `None` matches every record
    pub search: Option<String>,
    pub view: ViewMode,
}

impl FilterQuery {
    /// Build a query from raw request parameters. Empty or blank values
    /// are treated as absent.
    pub fn from_params(category: Option<&str>, search: Option<&str>, view: Option<&str>) -> Self {
        Self {
            category: non_blank(category),
            search: non_blank(search),
            view: ViewMode::parse(view),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category.key().to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = non_blank(Some(search));
        self
    }

    /// The category filter when it names a known category
    pub fn known_category(&self) -> Option<Category> {
        self.category.as_deref().and_then(Category::parse)
    }

    /// True when neither a category nor a search constrains the result
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }
}

/// Surrounding whitespace is dropped, so `" vaksin "` searches for `vaksin`
/// and a whitespace-only value counts as absent.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
