//! Version command implementation

use crate::cli::{Output, OutputFormat};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    target: &'static str,
    profile: &'static str,
}

/// Execute the version command
pub async fn execute(format: OutputFormat, output: &Output) -> Result<()> {
    let info = VersionInfo {
        name: crate::PKG_NAME,
        version: crate::VERSION,
        description: crate::PKG_DESCRIPTION,
        target: std::env::consts::ARCH,
        profile: if cfg!(debug_assertions) { "debug" } else { "release" },
    };

    match format {
        OutputFormat::Json => output.data(&serde_json::to_string_pretty(&info)?),
        OutputFormat::Yaml => output.data(&serde_yml::to_string(&info)?),
        OutputFormat::Text => {
            output.header("ForPublic.id");
            output.key_value("Version:", &format!("{} v{}", info.name, info.version), true);
            output.key_value("Description:", info.description, false);
            output.blank_line();
            output.category("Build Information");
            output.key_value("Target:", info.target, false);
            output.key_value("Profile:", info.profile, false);
        }
    }

    Ok(())
}
