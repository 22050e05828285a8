//! Configuration management for the ForPublic.id site
//!
//! Configuration is layered with figment: embedded defaults first, then user
//! and repository files, an explicit `--config` file and finally
//! `FORPUBLIC_*` environment variables. The merged result is extracted into
//! [`SiteConfig`] and validated before the server starts.

use crate::i18n::Locale;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod core;
pub mod smart_load;

pub use self::core::ConfigSources;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// Site identity, URLs and locale defaults
    pub site: SiteSection,

    /// Application catalog source
    pub catalog: CatalogConfig,

    /// Analytics beacon settings
    pub analytics: AnalyticsConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Largest request body accepted by the analytics endpoint
    pub max_body_bytes: usize,
}

/// Site identity configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSection {
    /// Public origin used for canonical URLs, JSON-LD and the sitemap
    pub base_url: String,

    /// Display name appended to page titles
    pub name: String,

    /// Locale used for `/` and for unsupported locale segments
    pub default_locale: Locale,

    /// Release identifier reported by the health endpoint
    pub release: String,

    /// Contact address shown on the contact page and used by the form
    pub contact_email: String,

    /// Twitter handle for card metadata
    pub twitter_handle: String,

    /// Organization profile linked from the footer and JSON-LD
    pub github_url: String,

    /// External ForPublic.id applications listed in the sitemap
    pub partner_sites: Vec<String>,
}

/// Catalog source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Replace the embedded catalog with this TOML file
    pub path: Option<PathBuf>,
}

/// Analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Embed the page-view beacon script in every page
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_body_bytes: 16 * 1024,
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: "https://forpublic.id".to_string(),
            name: "ForPublic.id".to_string(),
            default_locale: Locale::DEFAULT,
            release: "dev".to_string(),
            contact_email: "forpublic.indonesia@gmail.com".to_string(),
            twitter_handle: "@forpublicid".to_string(),
            github_url: "https://github.com/forpublic-id".to_string(),
            partner_sites: vec![
                "https://holiday.forpublic.id".to_string(),
                "https://budget.forpublic.id".to_string(),
                "https://salary.forpublic.id".to_string(),
                "https://plan.forpublic.id".to_string(),
            ],
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SiteConfig {
    /// Load the layered configuration, optionally including a custom file
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        let config = ConfigSources::load_with_custom_config(custom_config)?.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Absolute URL for a site path such as `/id/faq`
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        if path.is_empty() || path == "/" {
            base.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("server.host cannot be empty");
        }
        if self.server.port == 0 {
            bail!("server.port cannot be 0");
        }
        if self.server.max_body_bytes == 0 {
            bail!("server.max_body_bytes cannot be 0");
        }

        if !is_http_url(&self.site.base_url) {
            bail!("site.base_url must be an absolute http(s) URL, got '{}'", self.site.base_url);
        }
        if self.site.name.trim().is_empty() {
            bail!("site.name cannot be empty");
        }
        if self.site.release.trim().is_empty() {
            bail!("site.release cannot be empty");
        }
        if !self.site.contact_email.contains('@') {
            bail!("site.contact_email must be an email address, got '{}'", self.site.contact_email);
        }
        for site in &self.site.partner_sites {
            if !is_http_url(site) {
                bail!("site.partner_sites entry '{}' is not an absolute http(s) URL", site);
            }
        }

        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or("");
    !rest.is_empty() && !rest.contains(char::is_whitespace)
}
