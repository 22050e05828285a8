//! # ForPublic.id
//!
//! Server-rendered, bilingual (Indonesian/English) website for the
//! ForPublic.id civic-tech initiative.
//!
//! ## Features
//!
//! - **Application directory**: category filter, text search and grid/list
//!   views over a catalog loaded once at startup
//! - **Bilingual**: every page under `/id` and `/en`, with message lookup that
//!   falls back to Indonesian
//! - **SEO**: canonical and `hreflang` links, OpenGraph/Twitter cards,
//!   JSON-LD, `sitemap.xml` and `robots.txt`
//! - **Small API**: health check and a page-view analytics beacon
//!
//! ## Quick Start
//!
//! ```bash
//! forpublic serve --port 3000
//! forpublic catalog list --locale en --search portal
//! ```

pub mod cli;
pub mod config;
pub mod directory;
pub mod faq;
pub mod i18n;
pub mod site;

pub use cli::{Cli, Output};
pub use config::SiteConfig;

/// Result type alias for ForPublic.id operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
