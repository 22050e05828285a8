//! Page chrome shared by every HTML response

use super::AppState;
use super::html::{escape, external_link, href, json_ld};
use super::seo::{PageMeta, head_tags};
use crate::directory::Category;
use crate::i18n::{Locale, Translator};
use chrono::Datelike;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Query parameter holding the mobile menu state
const MENU_PARAM: &str = "menu";

/// Navigation entries: path below the locale and message key
const NAV_ITEMS: &[(&str, &str)] = &[
    ("/applications", "header.nav.applications"),
    ("/features", "header.nav.features"),
    ("/about", "header.nav.about"),
    ("/contact", "header.nav.contact"),
    ("/faq", "header.nav.faq"),
];

const STYLESHEET: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;color:#111827;background:#f9fafb;line-height:1.5}
a{color:inherit}
.container{max-width:72rem;margin:0 auto;padding:0 1rem}
.site-header{background:#fff;border-bottom:1px solid #e5e7eb;position:sticky;top:0;z-index:10}
.site-header .bar{display:flex;align-items:center;justify-content:space-between;height:4rem}
.brand{font-weight:700;font-size:1.25rem;text-decoration:none}
.brand span{color:#dc2626}
.nav a{margin-left:1.25rem;text-decoration:none;color:#374151}
.nav a.active{color:#dc2626;font-weight:600}
.lang-switch{margin-left:1.25rem;font-size:.875rem;border:1px solid #d1d5db;border-radius:.375rem;padding:.25rem .5rem;text-decoration:none}
.menu-toggle{display:none}
.mobile-nav a{display:block;padding:.75rem 0;border-top:1px solid #f3f4f6;text-decoration:none}
@media (max-width:768px){.nav{display:none}.menu-toggle{display:inline-block}}
section{padding:4rem 0}
.hero{text-align:center;background:linear-gradient(135deg,#f9fafb,#fff)}
.hero h1{font-size:2.75rem;margin:.5rem 0 1rem}
.hero h1 span,.accent{color:#dc2626}
.badge{display:inline-block;font-size:.75rem;border:1px solid #e5e7eb;border-radius:9999px;padding:.125rem .625rem;margin-right:.25rem}
.button{display:inline-block;padding:.625rem 1.25rem;border-radius:.5rem;background:#dc2626;color:#fff;text-decoration:none;font-weight:500}
.button.secondary{background:#fff;color:#374151;border:1px solid #d1d5db}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:1.5rem}
.list{display:flex;flex-direction:column;gap:1rem}
.card{background:#fff;border:1px solid #e5e7eb;border-left-width:4px;border-radius:.75rem;padding:1.5rem}
.accent-blue{border-left-color:#3b82f6}.accent-green{border-left-color:#22c55e}
.accent-purple{border-left-color:#a855f7}.accent-orange{border-left-color:#f97316}
.accent-red{border-left-color:#ef4444}.accent-teal{border-left-color:#14b8a6}
.accent-gray{border-left-color:#6b7280}
.filters a{margin:0 .5rem .5rem 0}
.filters a.active{background:#111827;color:#fff}
.empty{text-align:center;padding:3rem 0;color:#6b7280}
.faq-item{background:#fff;border:1px solid #e5e7eb;border-radius:.75rem;margin-bottom:1rem}
.faq-item a{display:flex;justify-content:space-between;padding:1rem 1.25rem;font-weight:600;text-decoration:none}
.faq-item p{margin:0;padding:0 1.25rem 1rem;color:#4b5563}
.site-footer{background:#111827;color:#d1d5db;padding:3rem 0 2rem;margin-top:4rem}
.site-footer .columns{display:grid;grid-template-columns:repeat(auto-fit,minmax(12rem,1fr));gap:2rem}
.site-footer ul{list-style:none;padding:0}
.site-footer .copyright{border-top:1px solid #374151;margin-top:2rem;padding-top:1rem;font-size:.875rem}
"#;

/// Request-scoped rendering context
pub struct PageContext<'a> {
    pub state: &'a AppState,
    pub t: Translator<'a>,
    pub locale: Locale,
    /// Path below the locale prefix, `""` for the homepage
    pub path: &'a str,
    pub params: &'a HashMap<String, String>,
}

impl<'a> PageContext<'a> {
    pub fn new(
        state: &'a AppState,
        locale: Locale,
        path: &'a str,
        params: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            state,
            t: state.translator(locale),
            locale,
            path,
            params,
        }
    }

    /// Site-relative URL of `path` in the current locale
    pub fn url(&self, path: &str) -> String {
        format!("/{}{}", self.locale.code(), path)
    }

    pub fn param(&self, key: &str) -> Option<&'a str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn menu_open(&self) -> bool {
        self.param(MENU_PARAM) == Some("open")
    }

    /// The current page with `key` replaced by `value` (or removed when `None`).
    /// Links that change anything other than the menu close the menu.
    pub fn current_with(&self, key: &str, value: Option<&str>) -> String {
        self.current_in(self.locale, key, value)
    }

    fn current_in(&self, locale: Locale, key: &str, value: Option<&str>) -> String {
        let mut params: BTreeMap<&str, &str> = self
            .params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if key != MENU_PARAM {
            params.remove(MENU_PARAM);
        }
        match value {
            Some(value) => params.insert(key, value),
            None => params.remove(key),
        };
        let pairs: Vec<(&str, Option<&str>)> = params.into_iter().map(|(k, v)| (k, Some(v))).collect();
        href(&format!("/{}{}", locale.code(), self.path), &pairs)
    }
}

/// Render a complete HTML document
pub fn render_page(ctx: &PageContext<'_>, meta: &PageMeta, schemas: &[Value], body: &str) -> String {
    let config = &ctx.state.config;
    let mut structured = String::new();
    for schema in schemas {
        structured.push_str(&json_ld(schema));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {head}\n<link rel=\"icon\" href=\"/favicon.ico\">\n<style>{css}</style>\n{structured}\n</head>\n\
         <body>\n{header}\n<main>\n{body}\n</main>\n{footer}\n{beacon}</body>\n</html>\n",
        lang = ctx.locale.code(),
        head = head_tags(config, &ctx.t, meta),
        css = STYLESHEET,
        structured = structured,
        header = render_header(ctx),
        body = body,
        footer = render_footer(ctx),
        beacon = if config.analytics.enabled { beacon_script(ctx.locale) } else { String::new() },
    )
}

fn nav_links(ctx: &PageContext<'_>) -> String {
    NAV_ITEMS
        .iter()
        .map(|(path, key)| {
            let class = if ctx.path == *path { " class=\"active\" aria-current=\"page\"" } else { "" };
            format!("<a href=\"{}\"{}>{}</a>", ctx.url(path), class, escape(ctx.t.t(key)))
        })
        .collect()
}

fn render_header(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let alternate = ctx.locale.alternate();
    let switch_href = ctx.current_in(alternate, MENU_PARAM, None);

    let (toggle_href, toggle_label, expanded) = if ctx.menu_open() {
        (ctx.current_with(MENU_PARAM, None), t.t("header.closeMenu"), "true")
    } else {
        (ctx.current_with(MENU_PARAM, Some("open")), t.t("header.openMenu"), "false")
    };

    let mobile_nav = if ctx.menu_open() {
        format!(
            "<nav class=\"mobile-nav container\" aria-label=\"{}\">{}</nav>",
            escape(t.t("header.mobileNavigation")),
            nav_links(ctx)
        )
    } else {
        String::new()
    };

    format!(
        "<header class=\"site-header\">\n<div class=\"container bar\">\n\
         <a class=\"brand\" href=\"{home}\">ForPublic<span>.id</span></a>\n\
         <div>\n<nav class=\"nav\" aria-label=\"{nav_label}\">{links}</nav>\n\
         <a class=\"lang-switch\" href=\"{switch}\" hreflang=\"{switch_lang}\" title=\"{switch_title}\">{switch_code}</a>\n\
         <a class=\"menu-toggle\" href=\"{toggle}\" aria-expanded=\"{expanded}\">{toggle_label}</a>\n\
         </div>\n</div>\n{mobile}\n</header>",
        home = ctx.url(""),
        nav_label = escape(t.t("header.mainNavigation")),
        links = nav_links(ctx),
        switch = escape(&switch_href),
        switch_lang = alternate.hreflang(),
        switch_title = escape(t.t("header.switchLanguage")),
        switch_code = alternate.code().to_uppercase(),
        toggle = escape(&toggle_href),
        expanded = expanded,
        toggle_label = escape(toggle_label),
        mobile = mobile_nav,
    )
}

fn render_footer(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let site = &ctx.state.config.site;
    let year = chrono::Utc::now().year().to_string();

    let mut category_links = String::new();
    for category in [Category::OpenData, Category::DevelopmentInfo, Category::PublicServices] {
        let link = href(&ctx.url("/applications"), &[("category", Some(category.key()))]);
        category_links.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>",
            escape(&link),
            escape(t.t(&category.title_key()))
        ));
    }

    format!(
        "<footer class=\"site-footer\">\n<div class=\"container\">\n<div class=\"columns\">\n\
         <div><a class=\"brand\" href=\"{home}\">ForPublic<span>.id</span></a><p>{description}</p></div>\n\
         <div><h4>{apps_title}</h4><ul>\
         <li>{holiday}</li>\
         <li><a href=\"{all_href}\">{all_label}</a></li>{categories}</ul></div>\n\
         <div><h4>{support_title}</h4><ul>\
         <li><a href=\"{contact_href}\">{contact_label}</a></li>\
         <li><a href=\"{faq_href}\">{faq_label}</a></li>\
         <li><a href=\"{about_href}\">{about_label}</a></li></ul></div>\n\
         <div><h4>{connect_title}</h4><ul>\
         <li>{github}</li><li>{twitter}</li>\
         <li><a href=\"mailto:{email}\">{email}</a></li></ul></div>\n\
         </div>\n<p class=\"copyright\">{copyright}</p>\n</div>\n</footer>",
        home = ctx.url(""),
        description = escape(t.t("footer.description")),
        apps_title = escape(t.t("footer.sections.applications")),
        holiday = external_link("https://holiday.forpublic.id", "external", t.t("footer.links.holidayCalendar")),
        all_href = ctx.url("/applications"),
        all_label = escape(t.t("footer.links.allApplications")),
        categories = category_links,
        support_title = escape(t.t("footer.sections.support")),
        contact_href = ctx.url("/contact"),
        contact_label = escape(t.t("footer.links.contactUs")),
        faq_href = ctx.url("/faq"),
        faq_label = escape(t.t("footer.links.faq")),
        about_href = ctx.url("/about"),
        about_label = escape(t.t("footer.links.about")),
        connect_title = escape(t.t("footer.sections.connect")),
        github = external_link(&site.github_url, "external", "GitHub"),
        twitter = external_link(
            &format!("https://x.com/{}", site.twitter_handle.trim_start_matches('@')),
            "external",
            &site.twitter_handle
        ),
        email = escape(&site.contact_email),
        copyright = escape(&t.t_with("footer.copyright", &[("year", &year)])),
    )
}

/// Posts a `page_view` event once per page load. `sendBeacon` first, then
/// `fetch` with `keepalive`; every failure is swallowed.
pub fn beacon_script(locale: Locale) -> String {
    format!(
        "<script>(function(){{try{{\
         var d=JSON.stringify({{event:\"page_view\",payload:{{locale:\"{locale}\",path:location.pathname}},ts:Date.now()}});\
         var u=\"/api/analytics\";\
         if(navigator.sendBeacon){{navigator.sendBeacon(u,new Blob([d],{{type:\"application/json\"}}));return;}}\
         fetch(u,{{method:\"POST\",headers:{{\"content-type\":\"application/json\"}},body:d,keepalive:true}}).catch(function(){{}});\
         }}catch(e){{}}}})();</script>\n",
        locale = locale.code()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::directory::Catalog;
    use crate::i18n::MessageStore;

    fn state(analytics: bool) -> AppState {
        let mut config = SiteConfig::default();
        config.analytics.enabled = analytics;
        AppState::new(config, Catalog::embedded().unwrap(), MessageStore::embedded().unwrap())
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_current_with_keeps_other_params() {
        let state = state(true);
        let params = params(&[("view", "list"), ("category", "openData")]);
        let ctx = PageContext::new(&state, Locale::Id, "/applications", &params);
        assert_eq!(
            ctx.current_with("menu", Some("open")),
            "/id/applications?category=openData&menu=open&view=list"
        );
        assert_eq!(ctx.current_with("view", None), "/id/applications?category=openData");
    }

    #[test]
    fn test_state_links_close_the_menu() {
        let state = state(true);
        let params = params(&[("menu", "open"), ("open", "1")]);
        let ctx = PageContext::new(&state, Locale::En, "/faq", &params);
        assert_eq!(ctx.current_with("open", Some("1,2")), "/en/faq?open=1%2C2");
        assert_eq!(ctx.current_with("open", None), "/en/faq");
        assert_eq!(ctx.current_with("menu", None), "/en/faq?open=1");
    }

    #[test]
    fn test_menu_toggle_links() {
        let state = state(true);
        let closed = params(&[]);
        let ctx = PageContext::new(&state, Locale::En, "/faq", &closed);
        let header = render_header(&ctx);
        assert!(header.contains("href=\"/en/faq?menu=open\" aria-expanded=\"false\""));
        assert!(!header.contains("mobile-nav"));

        let open = params(&[("menu", "open")]);
        let ctx = PageContext::new(&state, Locale::En, "/faq", &open);
        let header = render_header(&ctx);
        assert!(header.contains("href=\"/en/faq\" aria-expanded=\"true\""));
        assert!(header.contains("mobile-nav"));
        // the language switcher never carries the menu state
        assert!(header.contains("class=\"lang-switch\" href=\"/id/faq\""));
    }

    #[test]
    fn test_active_nav_item() {
        let state = state(true);
        let params = params(&[]);
        let ctx = PageContext::new(&state, Locale::Id, "/about", &params);
        assert!(nav_links(&ctx).contains("href=\"/id/about\" class=\"active\""));
    }

    #[test]
    fn test_footer_copyright_uses_current_year() {
        let state = state(true);
        let params = params(&[]);
        let ctx = PageContext::new(&state, Locale::Id, "", &params);
        let footer = render_footer(&ctx);
        assert!(footer.contains(&chrono::Utc::now().year().to_string()));
        assert!(!footer.contains("{year}"));
    }

    #[test]
    fn test_beacon_only_when_enabled() {
        let meta = PageMeta::new(None, "d", "k", "");
        let params = params(&[]);

        let enabled = state(true);
        let ctx = PageContext::new(&enabled, Locale::Id, "", &params);
        let page = render_page(&ctx, &meta, &[], "<p>hi</p>");
        assert!(page.contains("navigator.sendBeacon"));
        assert!(page.contains("keepalive:true"));
        assert!(page.starts_with("<!DOCTYPE html>"));

        let disabled = state(false);
        let ctx = PageContext::new(&disabled, Locale::Id, "", &params);
        let page = render_page(&ctx, &meta, &[], "<p>hi</p>");
        assert!(!page.contains("sendBeacon"));
    }
}
