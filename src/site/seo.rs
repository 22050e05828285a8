//! Search-engine metadata and structured data

use super::html::escape;
use crate::config::SiteConfig;
use crate::i18n::{FaqEntry, Locale, Translator};
use serde_json::{Value, json};

const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;
const FOUNDING_YEAR: &str = "2024";

/// Per-page metadata rendered into `<head>`
#[derive(Debug, Clone)]
pub struct PageMeta {
    /// Page title without the site suffix; `None` uses the site default title
    pub title: Option<String>,
    pub description: String,
    pub keywords: String,
    /// Path below the locale prefix (`""` for the homepage, `/faq`, ...)
    pub path: String,
    pub image: &'static str,
    pub noindex: bool,
}

impl PageMeta {
    pub fn new(title: Option<&str>, description: &str, keywords: &str, path: &str) -> Self {
        Self {
            title: title.map(str::to_string),
            description: description.to_string(),
            keywords: keywords.to_string(),
            path: path.to_string(),
            image: "/og-image.png",
            noindex: false,
        }
    }

    pub fn with_image(mut self, image: &'static str) -> Self {
        self.image = image;
        self
    }

    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }
}

/// Full title as shown in the browser tab
pub fn page_title(config: &SiteConfig, t: &Translator<'_>, meta: &PageMeta) -> String {
    match &meta.title {
        Some(title) => format!("{} - {}", title, config.site.name),
        None => t.t("seo.defaultTitle").to_string(),
    }
}

/// Absolute URL of `path` in `locale`
pub fn localized_url(config: &SiteConfig, locale: Locale, path: &str) -> String {
    config.absolute_url(&format!("/{}{}", locale.code(), path))
}

/// Title, description, canonical/alternate links, OpenGraph and Twitter tags
pub fn head_tags(config: &SiteConfig, t: &Translator<'_>, meta: &PageMeta) -> String {
    let locale = t.locale();
    let title = escape(&page_title(config, t, meta));
    let description = escape(&meta.description);
    let canonical = escape(&localized_url(config, locale, &meta.path));
    let image = escape(&config.absolute_url(meta.image));

    let mut out = String::new();
    out.push_str(&format!("<title>{}</title>", title));
    out.push_str(&format!("<meta name=\"description\" content=\"{}\">", description));
    out.push_str(&format!("<meta name=\"keywords\" content=\"{}\">", escape(&meta.keywords)));
    out.push_str(&format!(
        "<meta name=\"robots\" content=\"{}\">",
        if meta.noindex { "noindex, follow" } else { "index, follow" }
    ));
    out.push_str(&format!("<link rel=\"canonical\" href=\"{}\">", canonical));
    for alternate in Locale::ALL {
        out.push_str(&format!(
            "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
            alternate.hreflang(),
            escape(&localized_url(config, alternate, &meta.path))
        ));
    }
    out.push_str(&format!(
        "<link rel=\"alternate\" hreflang=\"x-default\" href=\"{}\">",
        escape(&localized_url(config, config.site.default_locale, &meta.path))
    ));

    out.push_str(&format!("<meta property=\"og:title\" content=\"{}\">", title));
    out.push_str(&format!("<meta property=\"og:description\" content=\"{}\">", description));
    out.push_str(&format!("<meta property=\"og:url\" content=\"{}\">", canonical));
    out.push_str(&format!("<meta property=\"og:site_name\" content=\"{}\">", escape(&config.site.name)));
    out.push_str(&format!("<meta property=\"og:image\" content=\"{}\">", image));
    out.push_str(&format!("<meta property=\"og:image:width\" content=\"{}\">", OG_IMAGE_WIDTH));
    out.push_str(&format!("<meta property=\"og:image:height\" content=\"{}\">", OG_IMAGE_HEIGHT));
    out.push_str(&format!("<meta property=\"og:locale\" content=\"{}\">", locale.og_locale()));
    out.push_str(&format!(
        "<meta property=\"og:locale:alternate\" content=\"{}\">",
        locale.alternate().og_locale()
    ));
    out.push_str("<meta property=\"og:type\" content=\"website\">");

    out.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">");
    out.push_str(&format!("<meta name=\"twitter:title\" content=\"{}\">", title));
    out.push_str(&format!("<meta name=\"twitter:description\" content=\"{}\">", description));
    out.push_str(&format!("<meta name=\"twitter:image\" content=\"{}\">", image));
    out.push_str(&format!("<meta name=\"twitter:site\" content=\"{}\">", escape(&config.site.twitter_handle)));
    out.push_str(&format!("<meta name=\"twitter:creator\" content=\"{}\">", escape(&config.site.twitter_handle)));

    out.push_str("<meta name=\"theme-color\" content=\"#dc2626\">");
    out.push_str("<meta name=\"format-detection\" content=\"telephone=no\">");
    out
}

/// Organization schema for the homepage
pub fn organization_schema(config: &SiteConfig, t: &Translator<'_>) -> Value {
    let mut same_as = vec![
        format!("https://x.com/{}", config.site.twitter_handle.trim_start_matches('@')),
        config.site.github_url.clone(),
    ];
    same_as.extend(config.site.partner_sites.iter().cloned());

    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": config.site.name,
        "url": config.absolute_url("/"),
        "logo": {
            "@type": "ImageObject",
            "url": config.absolute_url("/logo.svg"),
            "width": 200,
            "height": 200,
        },
        "description": t.t("seo.organizationDescription"),
        "slogan": t.t("seo.slogan"),
        "foundingDate": FOUNDING_YEAR,
        "contactPoint": [{
            "@type": "ContactPoint",
            "contactType": "customer service",
            "email": config.site.contact_email,
            "url": localized_url(config, t.locale(), "/contact"),
            "availableLanguage": ["Indonesian", "English"],
            "areaServed": "ID",
        }],
        "sameAs": same_as,
        "areaServed": { "@type": "Country", "name": "Indonesia" },
        "knowsAbout": [
            "Public Data",
            "Government Transparency",
            "Digital Services",
            "Open Data",
            "Civic Technology",
        ],
    })
}

/// WebSite schema with a search action targeting the directory
pub fn website_schema(config: &SiteConfig, t: &Translator<'_>) -> Value {
    let locale = t.locale();
    let search_target = format!(
        "{}?search={{search_term_string}}",
        localized_url(config, locale, "/applications")
    );

    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": config.site.name,
        "url": config.absolute_url("/"),
        "description": t.t("seo.defaultDescription"),
        "inLanguage": [locale.hreflang()],
        "isAccessibleForFree": true,
        "potentialAction": {
            "@type": "SearchAction",
            "target": { "@type": "EntryPoint", "urlTemplate": search_target },
            "query-input": "required name=search_term_string",
        },
        "publisher": { "@type": "Organization", "name": config.site.name },
        "copyrightYear": FOUNDING_YEAR,
        "license": "https://creativecommons.org/licenses/by/4.0/",
    })
}

/// Breadcrumb trail starting at the localized homepage. `trail` holds
/// `(name, path below the locale)` pairs.
pub fn breadcrumb_schema(config: &SiteConfig, t: &Translator<'_>, trail: &[(&str, &str)]) -> Value {
    let locale = t.locale();
    let mut items = vec![json!({
        "@type": "ListItem",
        "position": 1,
        "name": t.t("header.brand"),
        "item": localized_url(config, locale, ""),
    })];
    for (index, (name, path)) in trail.iter().enumerate() {
        items.push(json!({
            "@type": "ListItem",
            "position": index + 2,
            "name": name,
            "item": localized_url(config, locale, path),
        }));
    }

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// FAQPage schema listing every question
pub fn faq_schema(entries: &[FaqEntry]) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": { "@type": "Answer", "text": entry.answer },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MessageStore;

    #[test]
    fn test_head_tags_include_alternates_and_canonical() {
        let config = SiteConfig::default();
        let store = MessageStore::embedded().unwrap();
        let t = store.translator(Locale::En);
        let meta = PageMeta::new(Some("FAQ"), "Questions & answers", "faq", "/faq");

        let head = head_tags(&config, &t, &meta);
        assert!(head.contains("<title>FAQ - ForPublic.id</title>"));
        assert!(head.contains("<link rel=\"canonical\" href=\"https://forpublic.id/en/faq\">"));
        assert!(head.contains("hreflang=\"id-ID\" href=\"https://forpublic.id/id/faq\""));
        assert!(head.contains("hreflang=\"x-default\" href=\"https://forpublic.id/id/faq\""));
        assert!(head.contains("content=\"Questions &amp; answers\""));
        assert!(head.contains("og:locale\" content=\"en_US\""));
    }

    #[test]
    fn test_homepage_uses_default_title() {
        let config = SiteConfig::default();
        let store = MessageStore::embedded().unwrap();
        let t = store.translator(Locale::Id);
        let meta = PageMeta::new(None, "x", "y", "");
        assert_eq!(page_title(&config, &t, &meta), t.t("seo.defaultTitle"));
    }

    #[test]
    fn test_breadcrumb_positions() {
        let config = SiteConfig::default();
        let store = MessageStore::embedded().unwrap();
        let t = store.translator(Locale::Id);
        let schema = breadcrumb_schema(&config, &t, &[("Aplikasi", "/applications")]);
        let items = schema["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["item"], "https://forpublic.id/id/applications");
    }

    #[test]
    fn test_website_schema_search_target() {
        let config = SiteConfig::default();
        let store = MessageStore::embedded().unwrap();
        let t = store.translator(Locale::En);
        let schema = website_schema(&config, &t);
        assert_eq!(
            schema["potentialAction"]["target"]["urlTemplate"],
            "https://forpublic.id/en/applications?search={search_term_string}"
        );
    }

    #[test]
    fn test_faq_schema_lists_every_question() {
        let entries = vec![
            FaqEntry { question: "Q1".into(), answer: "A1".into() },
            FaqEntry { question: "Q2".into(), answer: "A2".into() },
        ];
        let schema = faq_schema(&entries);
        assert_eq!(schema["mainEntity"].as_array().unwrap().len(), 2);
        assert_eq!(schema["mainEntity"][1]["acceptedAnswer"]["text"], "A2");
    }
}
