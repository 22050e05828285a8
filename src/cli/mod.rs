//! Command-line interface for the ForPublic.id site
//!
//! `forpublic serve` runs the website; the other commands inspect the
//! catalog and configuration the server would use.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

pub mod commands;
mod output;

pub use output::Output;

/// ForPublic.id - bilingual civic-tech site and application directory
#[derive(Parser)]
#[command(name = "forpublic", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Machine-readable output formats for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the website
    Serve(commands::serve::ServeArgs),
    /// Inspect the application catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Catalog subcommands
#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Filter the catalog the same way the directory page does
    List {
        /// Locale whose text is searched and printed (id, en)
        #[arg(short, long)]
        locale: Option<String>,
        /// Category key, e.g. openData
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive text search over title and description
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Load and validate the configured catalog
    Validate,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display the merged configuration
    Show,
    /// Print one configuration value or section, e.g. `site.base_url`
    Get { key: String },
    /// Validate the configuration and the catalog it points to
    Validate,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let config = self.config.as_deref();

        match self.command {
            Some(Commands::Serve(args)) => commands::serve::execute(args, config, &output).await,
            Some(Commands::Catalog(cmd)) => {
                commands::catalog::execute(cmd, config, self.format, &output).await
            }
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, config, self.format, &output).await
            }
            Some(Commands::Version) => commands::version::execute(self.format, &output).await,
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn,forpublic=info"),
            1 => tracing_subscriber::EnvFilter::new("info,forpublic=debug"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stdout is reserved for command output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
