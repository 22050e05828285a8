use super::AppState;
use super::html::escape;
use crate::config::SiteConfig;
use crate::i18n::Locale;
use axum::{extract::State, http::header, response::IntoResponse};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Localized routes with their priority and change frequency
const LOCALIZED_ROUTES: &[(&str, ChangeFrequency, f32)] = &[
    ("", ChangeFrequency::Daily, 1.0),
    ("/applications", ChangeFrequency::Daily, 0.9),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/contact", ChangeFrequency::Monthly, 0.8),
    ("/faq", ChangeFrequency::Weekly, 0.7),
    ("/features", ChangeFrequency::Monthly, 0.6),
];

/// Every URL listed in the sitemap, highest priority first. Entries of equal
/// priority keep their insertion order: localized routes, the site root,
/// then partner sites.
pub fn sitemap_entries(config: &SiteConfig) -> Vec<SitemapEntry> {
    let mut entries = Vec::new();

    for locale in Locale::ALL {
        for (path, change_frequency, priority) in LOCALIZED_ROUTES {
            entries.push(SitemapEntry {
                url: config.absolute_url(&format!("/{}{}", locale.code(), path)),
                change_frequency: *change_frequency,
                priority: *priority,
            });
        }
    }

    entries.push(SitemapEntry {
        url: config.absolute_url("/"),
        change_frequency: ChangeFrequency::Daily,
        priority: 1.0,
    });

    for site in &config.site.partner_sites {
        entries.push(SitemapEntry {
            url: site.clone(),
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.9,
        });
    }

    entries.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    entries
}

pub fn render_sitemap(entries: &[SitemapEntry], last_modified: DateTime<Utc>) -> String {
    let lastmod = last_modified.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
            escape(&entry.url),
            lastmod,
            entry.change_frequency.as_str(),
            entry.priority
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_robots(config: &SiteConfig) -> String {
    format!(
        "User-Agent: *\nAllow: /\nDisallow: /api/\nDisallow: /_next/\nDisallow: /.*\n\n\
         User-Agent: Googlebot\nAllow: /\nDisallow: /api/\nDisallow: /_next/\n\n\
         Host: {}\nSitemap: {}\n",
        config.absolute_url("/"),
        config.absolute_url("/sitemap.xml")
    )
}

/// `GET /sitemap.xml`
pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let entries = sitemap_entries(&state.config);
    (
        [(header::CONTENT_TYPE, "application/xml")],
        render_sitemap(&entries, Utc::now()),
    )
}

/// `GET /robots.txt`
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.config),
    )
}
