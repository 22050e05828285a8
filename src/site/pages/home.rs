use super::faq::render_accordion;
use crate::directory::Category;
use crate::site::html::{escape, external_link, href};
use crate::site::layout::{PageContext, render_page};
use crate::site::seo::{PageMeta, organization_schema, website_schema};

/// Questions shown on the homepage before the "see all" link
const HOME_FAQ_LIMIT: usize = 5;

pub fn render(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let config = &ctx.state.config;

    let meta = PageMeta::new(
        None,
        t.t("seo.defaultDescription"),
        t.t("seo.defaultKeywords"),
        "",
    );
    let schemas = [organization_schema(config, t), website_schema(config, t)];

    let mut body = String::new();
    body.push_str(&hero(ctx));
    body.push_str(&categories(ctx));
    body.push_str(&features(ctx));
    body.push_str(&about(ctx));
    body.push_str(&faq(ctx));
    body.push_str(&spotlight(ctx));

    render_page(ctx, &meta, &schemas, &body)
}

fn hero(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    format!(
        "<section class=\"hero\"><div class=\"container\">\
         <span class=\"badge\">{badge}</span>\
         <h1>{title} <span>{highlight}</span></h1>\
         <p>{description}</p>\
         <a class=\"button\" href=\"{explore_href}\">{explore}</a> \
         <a class=\"button secondary\" href=\"{learn_href}\">{learn}</a>\
         </div></section>\n",
        badge = escape(t.t("hero.badge")),
        title = escape(t.t("hero.title")),
        highlight = escape(t.t("hero.titleHighlight")),
        description = escape(t.t("hero.description")),
        explore_href = ctx.url("/applications"),
        explore = escape(t.t("hero.cta.explore")),
        learn_href = ctx.url("/about"),
        learn = escape(t.t("hero.cta.learnMore")),
    )
}

fn categories(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let mut cards = String::new();
    for category in Category::ALL {
        let link = href(&ctx.url("/applications"), &[("category", Some(category.key()))]);
        cards.push_str(&format!(
            "<a class=\"card accent-{}\" href=\"{}\"><h3>{}</h3><p>{}</p></a>",
            category.accent().name(),
            escape(&link),
            escape(t.t(&category.title_key())),
            escape(t.t(&category.description_key())),
        ));
    }

    format!(
        "<section id=\"applications\"><div class=\"container\">\
         <h2>{title}</h2><p>{description}</p>\
         <div class=\"grid\">{cards}</div>\
         <p>{prompt}</p><a class=\"button\" href=\"{all_href}\">{all}</a>\
         </div></section>\n",
        title = escape(t.t("home.categories.title")),
        description = escape(t.t("home.categories.description")),
        cards = cards,
        prompt = escape(t.t("home.categories.prompt")),
        all_href = ctx.url("/applications"),
        all = escape(t.t("home.categories.viewAll")),
    )
}

pub(crate) fn feature_cards(ctx: &PageContext<'_>) -> String {
    let mut cards = String::new();
    for feature in ctx.t.features() {
        cards.push_str(&format!(
            "<div class=\"card feature-{}\"><h3>{}</h3><p>{}</p></div>",
            escape(&feature.key),
            escape(&feature.title),
            escape(&feature.description),
        ));
    }
    format!("<div class=\"grid\">{}</div>", cards)
}

fn features(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    format!(
        "<section id=\"features\"><div class=\"container\">\
         <h2>{title} ForPublic<span class=\"accent\">.id</span></h2><p>{description}</p>{cards}\
         </div></section>\n",
        title = escape(t.t("features.whyChoose")),
        description = escape(t.t("features.description")),
        cards = feature_cards(ctx),
    )
}

fn about(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    format!(
        "<section id=\"about\"><div class=\"container\">\
         <span class=\"badge\">{title}</span><p>{subtitle}</p>\
         <div class=\"grid\">\
         <div class=\"card\"><h3>{vision_title}</h3><p>{vision}</p></div>\
         <div class=\"card\"><h3>{mission_title}</h3><p>{mission}</p></div>\
         </div>\
         <a class=\"button secondary\" href=\"{about_href}\">{more}</a>\
         </div></section>\n",
        title = escape(t.t("about.title")),
        subtitle = escape(t.t("about.subtitle")),
        vision_title = escape(t.t("about.vision.title")),
        vision = escape(t.t("about.vision.description")),
        mission_title = escape(t.t("about.mission.title")),
        mission = escape(t.t("about.mission.description")),
        about_href = ctx.url("/about"),
        more = escape(t.t("home.about.readMore")),
    )
}

fn faq(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let entries = t.faq();
    let shown = &entries[..entries.len().min(HOME_FAQ_LIMIT)];
    format!(
        "<section id=\"faq\"><div class=\"container\">\
         <h2>{title}</h2><p>{subtitle}</p>{accordion}\
         <a class=\"button secondary\" href=\"{faq_href}\">{all}</a>\
         </div></section>\n",
        title = escape(t.t("faq.title")),
        subtitle = escape(t.t("faq.subtitle")),
        accordion = render_accordion(ctx, shown),
        faq_href = ctx.url("/faq"),
        all = escape(t.t("home.faq.viewAll")),
    )
}

/// Partner applications from the catalog's spotlight table. The section is
/// left out when the catalog has none.
fn spotlight(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let locale = ctx.locale;
    let entries = ctx.state.catalog.spotlight();
    if entries.is_empty() {
        return String::new();
    }

    let mut cards = String::new();
    for entry in entries {
        cards.push_str(&format!(
            "<div class=\"card accent-{accent}\" id=\"spotlight-{id}\">\
             <span class=\"badge status-available\">{status}</span>\
             <span class=\"badge\">{category}</span>\
             <h3>{title}</h3><p>{description}</p><p>{content}</p>{open}\
             </div>",
            accent = entry.color.name(),
            id = escape(&entry.id),
            status = escape(t.t("applications.status.available")),
            category = escape(t.t(&entry.category.title_key())),
            title = escape(entry.title(locale)),
            description = escape(entry.description(locale)),
            content = escape(entry.content(locale)),
            open = external_link(&entry.link, "button", t.t("applications.app.openApp")),
        ));
    }

    format!(
        "<section id=\"new-applications\"><div class=\"container\">\
         <h2>{title}</h2><p>{description}</p><div class=\"grid\">{cards}</div>\
         </div></section>\n",
        title = escape(t.t("newApplications.title")),
        description = escape(t.t("newApplications.description")),
        cards = cards,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Catalog;
    use crate::i18n::Locale;
    use crate::site::pages::test_support::{params, state};
    use std::sync::Arc;

    #[test]
    fn test_homepage_sections() {
        let state = state();
        let params = params(&[]);
        let ctx = PageContext::new(&state, Locale::Id, "", &params);
        let page = render(&ctx);

        assert!(page.contains("<html lang=\"id\">"));
        assert!(page.contains("\"@type\":\"Organization\""));
        assert!(page.contains("\"@type\":\"WebSite\""));
        assert!(!page.contains("\"@type\":\"BreadcrumbList\""));
        assert!(page.contains("href=\"/id/applications?category=openData\""));
        assert!(page.contains("https://budget.forpublic.id"));
        assert!(page.contains("https://plan.forpublic.id"));
        assert_eq!(page.matches("class=\"card feature-").count(), 6);
    }

    #[test]
    fn test_homepage_faq_is_limited_and_toggles_on_home() {
        let state = state();
        let params = params(&[("open", "1")]);
        let ctx = PageContext::new(&state, Locale::En, "", &params);
        let page = render(&ctx);

        assert_eq!(
            page.matches("class=\"faq-item\"").count(),
            ctx.t.faq().len().min(HOME_FAQ_LIMIT)
        );
        assert!(page.contains("id=\"faq-answer-1\""));
        assert!(page.contains("href=\"/en#faq-1\""));
    }

    #[test]
    fn test_spotlight_renders_from_catalog() {
        let state = state();
        let params = params(&[]);
        let ctx = PageContext::new(&state, Locale::En, "", &params);
        let page = render(&ctx);

        assert_eq!(page.matches("id=\"spotlight-").count(), state.catalog.spotlight().len());
        assert!(page.contains("id=\"spotlight-salary\""));
        assert!(page.contains("<h3>Civil Servant Salaries</h3>"));
        assert!(page.contains("href=\"https://salary.forpublic.id\""));
    }

    #[test]
    fn test_spotlight_section_is_omitted_without_entries() {
        let mut state = state();
        state.catalog = Arc::new(Catalog::from_records(state.catalog.records().to_vec()).unwrap());
        let params = params(&[]);
        let ctx = PageContext::new(&state, Locale::Id, "", &params);
        let page = render(&ctx);

        assert!(!page.contains("id=\"new-applications\""));
        assert!(!page.contains("id=\"spotlight-"));
    }
}
