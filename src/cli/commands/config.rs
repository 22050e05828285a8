//! Configuration command implementations

use crate::cli::{ConfigCommands, Output, OutputFormat};
use crate::config::{ConfigSources, SiteConfig};
use crate::directory::Catalog;
use anyhow::{Context, Result};

/// Execute config commands
pub async fn execute(
    cmd: ConfigCommands,
    custom_config: Option<&str>,
    format: OutputFormat,
    output: &Output,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(custom_config, format, output),
        ConfigCommands::Get { key } => get(custom_config, &key, output),
        ConfigCommands::Validate => validate(custom_config, output),
    }
}

fn show(custom_config: Option<&str>, format: OutputFormat, output: &Output) -> Result<()> {
    let config = SiteConfig::load(custom_config)?;
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&config)?,
        OutputFormat::Yaml => serde_yml::to_string(&config)?,
        OutputFormat::Text => toml::to_string_pretty(&config).context("Failed to render configuration as TOML")?,
    };
    output.data(&rendered);
    Ok(())
}

fn get(custom_config: Option<&str>, key: &str, output: &Output) -> Result<()> {
    let sources = ConfigSources::load_with_custom_config(custom_config)?;
    let value = sources.get_section(key)?;

    match value {
        serde_json::Value::String(s) => output.data(&s),
        serde_json::Value::Array(items) => {
            for item in items {
                match item {
                    serde_json::Value::String(s) => output.data(&s),
                    other => output.data(&other.to_string()),
                }
            }
        }
        serde_json::Value::Object(_) => output.data(&serde_json::to_string_pretty(&value)?),
        other => output.data(&other.to_string()),
    }
    Ok(())
}

fn validate(custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = SiteConfig::load(custom_config)?;
    let catalog = Catalog::load(config.catalog.path.as_deref())?;

    output.success("Configuration is valid");
    output.key_value("Listen:", &config.bind_address(), true);
    output.key_value("Base URL:", &config.site.base_url, false);
    output.key_value("Default locale:", config.site.default_locale.code(), false);
    output.key_value("Applications:", &catalog.len().to_string(), false);
    output.key_value(
        "Analytics:",
        if config.analytics.enabled { "enabled" } else { "disabled" },
        false,
    );
    Ok(())
}
