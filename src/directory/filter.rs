//! Directory filter service
//!
//! Computes which catalog entries a directory page shows for a
//! [`FilterQuery`]. The function is pure: it borrows the catalog, never
//! reorders it, and reports catalog-wide totals next to the matched subset.

use super::types::{ApplicationRecord, FilterQuery, Status};
use crate::i18n::Locale;
use serde::Serialize;

/// The result of filtering the catalog for one page view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryView<'a> {
    /// Matching entries in catalog order
    pub matched: Vec<&'a ApplicationRecord>,
    /// Featured entries of `matched`, in the same order
    pub featured: Vec<&'a ApplicationRecord>,
    /// Available entries in the whole catalog
    pub available_count: usize,
    /// Coming-soon entries in the whole catalog
    pub coming_soon_count: usize,
}

impl DirectoryView<'_> {
    /// Featured entries are only highlighted on the unfiltered directory
    pub fn show_featured_section(&self, query: &FilterQuery) -> bool {
        !self.featured.is_empty() && query.is_unfiltered()
    }

    /// Size of the whole catalog
    pub fn catalog_size(&self) -> usize {
        self.available_count + self.coming_soon_count
    }
}

/// Filter `records` by `query`, searching the text of `locale`
pub fn filter<'a>(
    records: &'a [ApplicationRecord],
    query: &FilterQuery,
    locale: Locale,
) -> DirectoryView<'a> {
    let available_count = records
        .iter()
        .filter(|record| record.status == Status::Available)
        .count();
    let coming_soon_count = records
        .iter()
        .filter(|record| record.status == Status::ComingSoon)
        .count();

    let needle = query.search.as_deref().map(str::to_lowercase);
    let matched: Vec<&ApplicationRecord> = records
        .iter()
        .filter(|record| matches_category(record, query.category.as_deref()))
        .filter(|record| matches_search(record, needle.as_deref(), locale))
        .collect();
    let featured = matched.iter().copied().filter(|record| record.featured).collect();

    tracing::debug!(
        category = query.category.as_deref().unwrap_or(""),
        search = query.search.as_deref().unwrap_or(""),
        %locale,
        matched = matched.len(),
        "Filtered directory"
    );

    DirectoryView {
        matched,
        featured,
        available_count,
        coming_soon_count,
    }
}

/// Whether a single record satisfies `query` in `locale`
pub fn matches(record: &ApplicationRecord, query: &FilterQuery, locale: Locale) -> bool {
    let needle = query.search.as_deref().map(str::to_lowercase);
    matches_category(record, query.category.as_deref())
        && matches_search(record, needle.as_deref(), locale)
}

fn matches_category(record: &ApplicationRecord, category: Option<&str>) -> bool {
    category.is_none_or(|key| record.category.key() == key)
}

// `needle` is already lower-cased
fn matches_search(record: &ApplicationRecord, needle: Option<&str>, locale: Locale) -> bool {
    needle.is_none_or(|needle| {
        record.title(locale).to_lowercase().contains(needle)
            || record.description(locale).to_lowercase().contains(needle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Catalog, Category};

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn ids<'a>(records: &[&'a ApplicationRecord]) -> Vec<&'a str> {
        records.iter().map(|record| record.id.as_str()).collect()
    }

    #[test]
    fn test_unfiltered_query_returns_whole_catalog_in_order() {
        let catalog = catalog();
        let view = filter(catalog.records(), &FilterQuery::default(), Locale::Id);

        let expected: Vec<&str> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids(&view.matched), expected);
        assert_eq!(ids(&view.featured), vec!["holiday-calendar"]);
        assert!(view.show_featured_section(&FilterQuery::default()));
    }

    #[test]
    fn test_counts_ignore_the_query() {
        let catalog = catalog();
        let queries = [
            FilterQuery::default(),
            FilterQuery::default().with_category(Category::Health),
            FilterQuery::default().with_search("nothing matches this"),
            FilterQuery::from_params(Some("unknown"), Some("portal"), Some("list")),
        ];
        for query in &queries {
            let view = filter(catalog.records(), query, Locale::En);
            assert_eq!(view.available_count, 1);
            assert_eq!(view.coming_soon_count, 6);
            assert_eq!(view.catalog_size(), catalog.len());
        }
    }

    #[test]
    fn test_category_filter_keeps_catalog_order() {
        let catalog = catalog();
        let query = FilterQuery::default().with_category(Category::PublicServices);
        let view = filter(catalog.records(), &query, Locale::Id);
        assert_eq!(ids(&view.matched), vec!["holiday-calendar", "public-service-portal"]);

        let query = FilterQuery::from_params(Some("openData"), None, None);
        let view = filter(catalog.records(), &query, Locale::Id);
        assert_eq!(ids(&view.matched), vec!["data-transparency"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let query = FilterQuery::default().with_search("portal");
        let view = filter(catalog.records(), &query, Locale::En);
        assert_eq!(ids(&view.matched), vec!["data-transparency", "public-service-portal"]);

        let query = FilterQuery::default().with_search("PORTAL");
        let upper = filter(catalog.records(), &query, Locale::En);
        assert_eq!(upper.matched, view.matched);
    }

    #[test]
    fn test_search_uses_requested_locale() {
        let catalog = catalog();
        let query = FilterQuery::default().with_search("kalender");

        let view = filter(catalog.records(), &query, Locale::Id);
        assert_eq!(ids(&view.matched), vec!["holiday-calendar"]);

        let view = filter(catalog.records(), &query, Locale::En);
        assert!(view.matched.is_empty());
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = catalog();
        let query = FilterQuery::default().with_search("vaccination");
        let view = filter(catalog.records(), &query, Locale::En);
        assert_eq!(ids(&view.matched), vec!["health-tracker"]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let catalog = catalog();
        let query = FilterQuery::from_params(Some("weather"), None, None);
        let view = filter(catalog.records(), &query, Locale::Id);
        assert!(view.matched.is_empty());
        assert!(view.featured.is_empty());
    }

    #[test]
    fn test_featured_section_hidden_when_filtered() {
        let catalog = catalog();
        let query = FilterQuery::default().with_category(Category::PublicServices);
        let view = filter(catalog.records(), &query, Locale::En);

        assert_eq!(ids(&view.featured), vec!["holiday-calendar"]);
        assert!(view.matched.iter().any(|record| record.featured));
        assert!(!view.show_featured_section(&query));

        let query = FilterQuery::default().with_search("holiday");
        let view = filter(catalog.records(), &query, Locale::En);
        assert!(!view.featured.is_empty());
        assert!(!view.show_featured_section(&query));
    }

    #[test]
    fn test_view_mode_does_not_change_matches() {
        let catalog = catalog();
        let grid = FilterQuery::from_params(Some("health"), None, Some("grid"));
        let list = FilterQuery::from_params(Some("health"), None, Some("list"));
        assert_eq!(
            filter(catalog.records(), &grid, Locale::Id).matched,
            filter(catalog.records(), &list, Locale::Id).matched
        );
    }

    #[test]
    fn test_filter_is_deterministic_and_an_ordered_subset() {
        let catalog = catalog();
        let query = FilterQuery::default().with_search("data");
        let first = filter(catalog.records(), &query, Locale::En);
        let second = filter(catalog.records(), &query, Locale::En);
        assert_eq!(first, second);

        let mut cursor = catalog.records().iter();
        for record in &first.matched {
            assert!(
                cursor.any(|candidate| std::ptr::eq(candidate, *record)),
                "{} is out of catalog order",
                record.id
            );
        }
    }

    #[test]
    fn test_single_record_predicate_agrees_with_filter() {
        let catalog = catalog();
        let query = FilterQuery::default().with_search("real-time");
        let view = filter(catalog.records(), &query, Locale::En);
        let by_predicate: Vec<&ApplicationRecord> = catalog
            .records()
            .iter()
            .filter(|record| matches(record, &query, Locale::En))
            .collect();
        assert_eq!(view.matched, by_predicate);
    }
}
