//! Catalog command implementations
//!
//! `catalog list` runs the directory filter from the terminal, so a query can
//! be checked without starting the server.

use crate::cli::{CatalogCommands, Output, OutputFormat};
use crate::config::SiteConfig;
use crate::directory::{ApplicationRecord, Catalog, Category, DirectoryView, FilterQuery, filter};
use crate::i18n::Locale;
use anyhow::Result;
use serde::Serialize;

/// Execute catalog commands
pub async fn execute(
    cmd: CatalogCommands,
    custom_config: Option<&str>,
    format: OutputFormat,
    output: &Output,
) -> Result<()> {
    let config = SiteConfig::load(custom_config)?;
    match cmd {
        CatalogCommands::List {
            locale,
            category,
            search,
        } => {
            let locale = match locale {
                Some(code) => code.parse::<Locale>()?,
                None => config.site.default_locale,
            };
            let query = FilterQuery::from_params(category.as_deref(), search.as_deref(), None);
            list(&config, locale, &query, format, output)
        }
        CatalogCommands::Validate => validate(&config, output),
    }
}

/// One matched application, with text in the listing locale
#[derive(Debug, Serialize)]
struct ListedApplication<'a> {
    id: &'a str,
    category: Category,
    status: &'static str,
    featured: bool,
    title: &'a str,
    description: &'a str,
    tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    locale: Locale,
    category: Option<&'a str>,
    search: Option<&'a str>,
    available_count: usize,
    coming_soon_count: usize,
    matched: Vec<ListedApplication<'a>>,
}

impl<'a> Listing<'a> {
    fn new(view: &DirectoryView<'a>, query: &'a FilterQuery, locale: Locale) -> Self {
        Self {
            locale,
            category: query.category.as_deref(),
            search: query.search.as_deref(),
            available_count: view.available_count,
            coming_soon_count: view.coming_soon_count,
            matched: view
                .matched
                .iter()
                .copied()
                .map(|record| listed(record, locale))
                .collect(),
        }
    }
}

fn listed(record: &ApplicationRecord, locale: Locale) -> ListedApplication<'_> {
    ListedApplication {
        id: &record.id,
        category: record.category,
        status: record.status.as_str(),
        featured: record.featured,
        title: record.title(locale),
        description: record.description(locale),
        tags: record.tags(locale),
        link: record.link.as_deref(),
    }
}

fn list(
    config: &SiteConfig,
    locale: Locale,
    query: &FilterQuery,
    format: OutputFormat,
    output: &Output,
) -> Result<()> {
    let catalog = Catalog::load(config.catalog.path.as_deref())?;
    let view = filter(catalog.records(), query, locale);
    let listing = Listing::new(&view, query, locale);

    match format {
        OutputFormat::Json => output.data(&serde_json::to_string_pretty(&listing)?),
        OutputFormat::Yaml => output.data(&serde_yml::to_string(&listing)?),
        OutputFormat::Text => {
            if query.category.is_some() && query.known_category().is_none() {
                output.warning(&format!(
                    "Unknown category '{}'. Known categories: {}",
                    query.category.as_deref().unwrap_or_default(),
                    Category::ALL.map(Category::key).join(", ")
                ));
            }
            output.header(&format!("Applications ({})", locale));
            for app in &listing.matched {
                let marker = if app.featured { " ★" } else { "" };
                output.list_item(&format!("{} [{}] {}{}", app.id, app.status, app.title, marker));
                output.indent(app.description);
                if let Some(link) = app.link {
                    output.indent(link);
                }
            }
            if listing.matched.is_empty() {
                output.info("No applications match this query");
            }
            output.blank_line();
            output.key_value("Matched:", &listing.matched.len().to_string(), true);
            output.key_value("Available:", &listing.available_count.to_string(), false);
            output.key_value("Coming soon:", &listing.coming_soon_count.to_string(), false);
        }
    }

    Ok(())
}

fn validate(config: &SiteConfig, output: &Output) -> Result<()> {
    let source = config
        .catalog
        .path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "embedded catalog".to_string());
    output.verbose(&format!("Loading {}", source));

    let catalog = Catalog::load(config.catalog.path.as_deref())?;
    let available = catalog.records().iter().filter(|r| r.is_available()).count();
    let featured = catalog.records().iter().filter(|r| r.featured).count();

    output.success(&format!("Catalog is valid ({})", source));
    output.key_value("Applications:", &catalog.len().to_string(), true);
    output.key_value("Available:", &available.to_string(), false);
    output.key_value("Featured:", &featured.to_string(), false);
    output.key_value("Spotlight:", &catalog.spotlight().len().to_string(), false);
    Ok(())
}
