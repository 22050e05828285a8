//! Page handlers and locale resolution
//!
//! `/{locale}` and `/{locale}/{page}` are the only HTML routes. A first
//! segment that is not a supported locale is handled as follows:
//!
//! - `/{page}` for a known page redirects to the page in the default locale
//! - `/{anything}/{page}` renders the page in the default locale
//! - everything else is the localized 404 page

use super::AppState;
use super::html::href;
use super::layout::PageContext;
use crate::i18n::Locale;
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::collections::{BTreeMap, HashMap};

pub mod about;
pub mod applications;
pub mod contact;
pub mod faq;
pub mod features;
pub mod home;
pub mod not_found;

/// Inner pages reachable below a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Applications,
    About,
    Contact,
    Faq,
    Features,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Applications,
        Page::About,
        Page::Contact,
        Page::Faq,
        Page::Features,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Applications => "applications",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Faq => "faq",
            Page::Features => "features",
        }
    }

    /// Path below the locale prefix
    pub fn path(self) -> &'static str {
        match self {
            Page::Applications => "/applications",
            Page::About => "/about",
            Page::Contact => "/contact",
            Page::Faq => "/faq",
            Page::Features => "/features",
        }
    }

    pub fn parse(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.slug() == slug)
    }

    fn render(self, ctx: &PageContext<'_>) -> String {
        match self {
            Page::Applications => applications::render(ctx),
            Page::About => about::render(ctx),
            Page::Contact => contact::render(ctx),
            Page::Faq => faq::render(ctx),
            Page::Features => features::render(ctx),
        }
    }
}

/// `GET /`
pub async fn root_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&format!("/{}", state.default_locale().code()))
}

/// `GET /{segment}`
pub async fn locale_root(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(locale) = Locale::parse(&segment) {
        let ctx = PageContext::new(&state, locale, "", &params);
        return Html(home::render(&ctx)).into_response();
    }

    if let Some(page) = Page::parse(&segment) {
        let target = format!("/{}{}", state.default_locale().code(), page.path());
        let sorted: BTreeMap<&str, &str> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let query: Vec<(&str, Option<&str>)> = sorted.into_iter().map(|(k, v)| (k, Some(v))).collect();
        tracing::debug!(segment = %segment, target = %target, "Redirecting page without locale");
        return Redirect::temporary(&href(&target, &query)).into_response();
    }

    not_found_response(&state, state.default_locale(), &params)
}

/// `GET /{locale}/{page}`
pub async fn locale_page(
    State(state): State<AppState>,
    Path((segment, slug)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let locale = Locale::resolve_or(&segment, state.default_locale());
    match Page::parse(&slug) {
        Some(page) => {
            let ctx = PageContext::new(&state, locale, page.path(), &params);
            Html(page.render(&ctx)).into_response()
        }
        None => not_found_response(&state, locale, &params),
    }
}

/// Any route not matched above
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    let locale = uri
        .path()
        .trim_start_matches('/')
        .split('/')
        .next()
        .and_then(Locale::parse)
        .unwrap_or_else(|| state.default_locale());
    not_found_response(&state, locale, &HashMap::new())
}

fn not_found_response(state: &AppState, locale: Locale, params: &HashMap<String, String>) -> Response {
    let ctx = PageContext::new(state, locale, "", params);
    (StatusCode::NOT_FOUND, Html(not_found::render(&ctx))).into_response()
}
