use super::SiteConfig;
use super::smart_load;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// The merged configuration sources, before extraction into [`SiteConfig`]
pub struct ConfigSources {
    figment: Figment,
}

impl ConfigSources {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            if !std::path::Path::new(custom_path).exists() {
                anyhow::bail!("Config file not found: {}", custom_path);
            }
            tracing::debug!(path = custom_path, "Loading custom config");
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            let user_config = Self::user_config_path();
            figment = figment
                // User config - support multiple formats
                .merge(Toml::file(&user_config))
                .merge(Json::file(user_config.replace(".toml", ".json")))
                .merge(Yaml::file(user_config.replace(".toml", ".yaml")))
                .merge(Yaml::file(user_config.replace(".toml", ".yml")))
                // Repository config - support multiple formats
                .merge(Toml::file("forpublic.toml"))
                .merge(Json::file("forpublic.json"))
                .merge(Yaml::file("forpublic.yaml"))
                .merge(Yaml::file("forpublic.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("FORPUBLIC_").split("__"));

        Ok(ConfigSources { figment })
    }

    /// Extract the typed configuration
    pub fn extract(&self) -> Result<SiteConfig> {
        self.figment
            .extract()
            .context("Failed to read site configuration")
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        self.figment
            .extract_inner(path)
            .with_context(|| format!("Configuration has no section '{}'", path))
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/forpublic/config.toml", home),
            Err(_) => "~/.config/forpublic/config.toml".to_string(),
        }
    }
}
