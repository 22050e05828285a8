//! Serve command implementation

use crate::cli::Output;
use crate::config::SiteConfig;
use crate::site::{self, AppState};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind, overriding `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Execute the serve command
pub async fn execute(args: ServeArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let mut config = SiteConfig::load(custom_config)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    let state = AppState::from_config(config)?;
    output.info(&format!(
        "Serving {} on http://{}",
        state.config.site.name,
        state.config.bind_address()
    ));
    output.verbose(&format!(
        "{} applications, default locale '{}'",
        state.catalog.len(),
        state.default_locale()
    ));

    site::serve(state).await
}
