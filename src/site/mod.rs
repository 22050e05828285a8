//! HTTP server for the ForPublic.id site
//!
//! Every page is rendered on the server from the shared, read-only
//! [`AppState`]. Interactive state (directory filters, FAQ accordion, mobile
//! menu) travels in the query string, so each state is a plain link.

use crate::config::SiteConfig;
use crate::directory::Catalog;
use crate::i18n::{Locale, MessageStore, Translator};
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub mod api;
pub mod html;
pub mod layout;
pub mod middleware;
pub mod pages;
pub mod seo;
pub mod sitemap;

/// Immutable state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub catalog: Arc<Catalog>,
    pub messages: Arc<MessageStore>,
}

impl AppState {
    pub fn new(config: SiteConfig, catalog: Catalog, messages: MessageStore) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            messages: Arc::new(messages),
        }
    }

    /// Load the catalog named by the configuration and the embedded messages
    pub fn from_config(config: SiteConfig) -> Result<Self> {
        let catalog = Catalog::load(config.catalog.path.as_deref())?;
        let messages = MessageStore::embedded()?;
        Ok(Self::new(config, catalog, messages))
    }

    pub fn translator(&self, locale: Locale) -> Translator<'_> {
        self.messages.translator(locale)
    }

    pub fn default_locale(&self) -> Locale {
        self.config.site.default_locale
    }
}

/// Build the router with every route, the 404 fallback and request tracing
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_bytes;

    Router::new()
        .route("/", get(pages::root_redirect))
        .route("/api/health", get(api::health))
        .route("/api/analytics", post(api::analytics))
        .route("/sitemap.xml", get(sitemap::sitemap_xml))
        .route("/robots.txt", get(sitemap::robots_txt))
        .route("/:locale", get(pages::locale_root))
        .route("/:locale/:page", get(pages::locale_page))
        .fallback(pages::fallback)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(from_fn(middleware::trace_request))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    let local_addr = listener.local_addr()?;

    info!(
        address = %local_addr,
        applications = state.catalog.len(),
        default_locale = %state.default_locale(),
        "Serving ForPublic.id"
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
