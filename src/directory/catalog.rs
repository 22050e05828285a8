//! Loading and validating the application catalog
//!
//! The catalog ships embedded in the binary and can be replaced by a TOML file
//! named in the site configuration. Either way it is validated once when the
//! server starts and never changes afterwards.

use super::types::{ApplicationRecord, SpotlightEntry, Status};
use crate::i18n::Locale;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("../../catalog.toml");

#[derive(Debug, Deserialize, Serialize)]
struct CatalogFile {
    #[serde(default, rename = "application")]
    applications: Vec<ApplicationRecord>,
    #[serde(default)]
    spotlight: Vec<SpotlightEntry>,
}

/// The validated, read-only list of directory entries in declared order,
/// plus the partner applications promoted on the homepage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ApplicationRecord>,
    spotlight: Vec<SpotlightEntry>,
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CATALOG).context("Embedded catalog is invalid")
    }

    /// Load the catalog from `path`, or the embedded one when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
                Self::from_toml_str(&content)
                    .with_context(|| format!("Invalid catalog file: {}", path.display()))
            }
            None => Self::embedded(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).context("Failed to parse catalog")?;
        Self::from_records(file.applications)?.with_spotlight(file.spotlight)
    }

    pub fn from_records(records: Vec<ApplicationRecord>) -> Result<Self> {
        validate(&records)?;
        Ok(Self {
            records,
            spotlight: Vec::new(),
        })
    }

    pub fn with_spotlight(mut self, spotlight: Vec<SpotlightEntry>) -> Result<Self> {
        validate_spotlight(&spotlight)?;
        self.spotlight = spotlight;
        Ok(self)
    }

    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    /// Homepage spotlight in declared order
    pub fn spotlight(&self) -> &[SpotlightEntry] {
        &self.spotlight
    }

    pub fn get(&self, id: &str) -> Option<&ApplicationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(records: &[ApplicationRecord]) -> Result<()> {
    let mut seen = HashSet::new();

    for record in records {
        if record.id.trim().is_empty() {
            bail!("Catalog entry with an empty id");
        }
        if !seen.insert(record.id.as_str()) {
            bail!("Duplicate catalog id '{}'", record.id);
        }

        for locale in Locale::ALL {
            if record.title(locale).trim().is_empty() {
                bail!("Catalog entry '{}' has no {} title", record.id, locale);
            }
            if record.description(locale).trim().is_empty() {
                bail!("Catalog entry '{}' has no {} description", record.id, locale);
            }
        }

        match (record.status, record.link.as_deref()) {
            (Status::Available, Some(link)) if is_external_link(link) => {}
            (Status::Available, Some(link)) => {
                bail!("Catalog entry '{}' is available but links to '{}'", record.id, link)
            }
            (Status::Available, None) => {
                bail!("Catalog entry '{}' is available but has no link", record.id)
            }
            (Status::ComingSoon, Some(_)) => {
                bail!("Catalog entry '{}' is coming soon and must not have a link", record.id)
            }
            (Status::ComingSoon, None) => {}
        }
    }

    Ok(())
}

fn validate_spotlight(entries: &[SpotlightEntry]) -> Result<()> {
    let mut seen = HashSet::new();

    for entry in entries {
        if entry.id.trim().is_empty() {
            bail!("Spotlight entry with an empty id");
        }
        if !seen.insert(entry.id.as_str()) {
            bail!("Duplicate spotlight id '{}'", entry.id);
        }
        if !is_external_link(&entry.link) {
            bail!("Spotlight entry '{}' links to '{}'", entry.id, entry.link);
        }

        for locale in Locale::ALL {
            let texts = [
                ("title", entry.title(locale)),
                ("description", entry.description(locale)),
                ("content", entry.content(locale)),
            ];
            for (field, text) in texts {
                if text.trim().is_empty() {
                    bail!("Spotlight entry '{}' has no {} {}", entry.id, locale, field);
                }
            }
        }
    }

    Ok(())
}

/// An absolute http(s) URL, as opposed to placeholders like `#`
fn is_external_link(link: &str) -> bool {
    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"));
    match rest {
        Some(host) => !host.is_empty() && !host.starts_with('/') && !link.contains(char::is_whitespace),
        None => false,
    }
}
