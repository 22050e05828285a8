use crate::directory::{ApplicationRecord, Category, DirectoryView, FilterQuery, ViewMode, filter};
use crate::site::html::{escape, external_link, href};
use crate::site::layout::{PageContext, render_page};
use crate::site::seo::{PageMeta, breadcrumb_schema};

pub fn render(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let config = &ctx.state.config;

    let query = FilterQuery::from_params(ctx.param("category"), ctx.param("search"), ctx.param("view"));
    let view = filter(ctx.state.catalog.records(), &query, ctx.locale);

    let meta = PageMeta::new(
        Some(t.t("applications.page.title")),
        t.t("applications.page.metaDescription"),
        t.t("applications.page.keywords"),
        "/applications",
    )
    .with_image("/og-image-applications.png");
    let schemas = [breadcrumb_schema(
        config,
        t,
        &[(t.t("applications.page.title"), "/applications")],
    )];

    let mut body = format!(
        "<section class=\"page-header\"><div class=\"container\">\
         <h1>{title}</h1><p>{description}</p>{stats}</div></section>\n",
        title = escape(t.t("applications.page.title")),
        description = escape(t.t("applications.page.description")),
        stats = stats(ctx, &view),
    );
    body.push_str("<section><div class=\"container\">");
    body.push_str(&search_form(ctx, &query));
    body.push_str(&category_filters(ctx, &query));
    body.push_str(&view_toggle(ctx, &query));

    if view.show_featured_section(&query) {
        body.push_str(&format!(
            "<h2>{}</h2>{}",
            escape(t.t("applications.page.featured")),
            cards(ctx, &view.featured, query.view, "featured")
        ));
    }

    let heading = match (&query.search, query.known_category()) {
        (Some(search), _) => t.t_with("applications.page.searchResults", &[("query", search.as_str())]),
        (None, Some(category)) => t.t(&category.title_key()).to_string(),
        (None, None) => t.t("applications.page.all").to_string(),
    };
    body.push_str(&format!("<h2>{}</h2>", escape(&heading)));

    if view.matched.is_empty() {
        body.push_str(&format!(
            "<div class=\"empty\"><h3>{}</h3><p>{}</p><a class=\"button\" href=\"{}\">{}</a></div>",
            escape(t.t("applications.page.empty.title")),
            escape(t.t("applications.page.empty.description")),
            ctx.url("/applications"),
            escape(t.t("applications.page.empty.viewAll")),
        ));
    } else {
        body.push_str(&cards(ctx, &view.matched, query.view, "app"));
    }
    body.push_str("</div></section>\n");

    render_page(ctx, &meta, &schemas, &body)
}

fn stats(ctx: &PageContext<'_>, view: &DirectoryView<'_>) -> String {
    let t = &ctx.t;
    let items = [
        (Category::ALL.len(), t.t("applications.page.stats.categories")),
        (view.matched.len(), t.t("applications.page.stats.shown")),
        (view.available_count, t.t("applications.page.stats.available")),
        (view.coming_soon_count, t.t("applications.page.stats.comingSoon")),
    ];
    let mut out = String::from("<dl class=\"stats\">");
    for (value, label) in items {
        out.push_str(&format!("<div><dt>{}</dt><dd>{}</dd></div>", escape(label), value));
    }
    out.push_str("</dl>");
    out
}

fn search_form(ctx: &PageContext<'_>, query: &FilterQuery) -> String {
    let t = &ctx.t;
    let mut hidden = String::new();
    if let Some(category) = &query.category {
        hidden.push_str(&format!(
            "<input type=\"hidden\" name=\"category\" value=\"{}\">",
            escape(category)
        ));
    }
    if query.view == ViewMode::List {
        hidden.push_str("<input type=\"hidden\" name=\"view\" value=\"list\">");
    }

    format!(
        "<form class=\"search\" method=\"get\" action=\"{action}\" role=\"search\">{hidden}\
         <input type=\"search\" name=\"search\" value=\"{value}\" placeholder=\"{placeholder}\" aria-label=\"{placeholder}\">\
         <button class=\"button\" type=\"submit\">{submit}</button></form>",
        action = ctx.url("/applications"),
        hidden = hidden,
        value = escape(query.search.as_deref().unwrap_or("")),
        placeholder = escape(t.t("applications.page.searchPlaceholder")),
        submit = escape(t.t("applications.page.searchButton")),
    )
}

/// Category links drop the search text and view mode
fn category_filters(ctx: &PageContext<'_>, query: &FilterQuery) -> String {
    let t = &ctx.t;
    let active = query.category.as_deref();
    let base = ctx.url("/applications");

    let mut out = String::from("<nav class=\"filters\">");
    out.push_str(&format!(
        "<a class=\"badge{}\" href=\"{}\">{}</a>",
        if active.is_none() { " active" } else { "" },
        base,
        escape(t.t("applications.page.allCategories")),
    ));
    for category in Category::ALL {
        let class = if active == Some(category.key()) {
            format!(" active accent-{}", category.accent().name())
        } else {
            String::new()
        };
        out.push_str(&format!(
            "<a class=\"badge{}\" href=\"{}\">{}</a>",
            class,
            escape(&href(&base, &[("category", Some(category.key()))])),
            escape(t.t(&category.title_key())),
        ));
    }
    out.push_str("</nav>");
    out
}

/// Grid/list links keep the active category
fn view_toggle(ctx: &PageContext<'_>, query: &FilterQuery) -> String {
    let t = &ctx.t;
    let base = ctx.url("/applications");
    let category = query.category.as_deref();
    let grid = href(&base, &[("category", category)]);
    let list = href(&base, &[("category", category), ("view", Some("list"))]);

    format!(
        "<div class=\"view-toggle\">\
         <a class=\"badge{}\" href=\"{}\" aria-pressed=\"{}\">{}</a>\
         <a class=\"badge{}\" href=\"{}\" aria-pressed=\"{}\">{}</a></div>",
        if query.view == ViewMode::Grid { " active" } else { "" },
        escape(&grid),
        query.view == ViewMode::Grid,
        escape(t.t("applications.page.viewGrid")),
        if query.view == ViewMode::List { " active" } else { "" },
        escape(&list),
        query.view == ViewMode::List,
        escape(t.t("applications.page.viewList")),
    )
}

/// `anchor` prefixes each card's element id so featured copies stay unique
fn cards(ctx: &PageContext<'_>, records: &[&ApplicationRecord], mode: ViewMode, anchor: &str) -> String {
    let mut out = format!("<div class=\"{}\">", mode.as_str());
    for record in records {
        out.push_str(&card(ctx, record, anchor));
    }
    out.push_str("</div>");
    out
}

fn card(ctx: &PageContext<'_>, record: &ApplicationRecord, anchor: &str) -> String {
    let t = &ctx.t;
    let locale = ctx.locale;

    let status = if record.is_available() {
        t.t("applications.status.available")
    } else {
        t.t("applications.status.comingSoon")
    };
    let tags: String = record
        .tags(locale)
        .iter()
        .map(|tag| format!("<span class=\"badge\">{}</span>", escape(tag)))
        .collect();
    let action = match (&record.link, record.is_available()) {
        (Some(link), true) => external_link(link, "button", t.t("applications.app.openApp")),
        _ => format!(
            "<span class=\"button secondary\" aria-disabled=\"true\">{}</span>",
            escape(t.t("applications.app.comingSoon"))
        ),
    };

    format!(
        "<article class=\"card accent-{accent}\" id=\"{anchor}-{id}\">\
         <span class=\"badge status-{status_class}\">{status}</span>\
         <span class=\"badge\">{category}</span>\
         <h3>{title}</h3><p>{description}</p><div class=\"tags\">{tags}</div>{action}</article>",
        accent = record.color.name(),
        anchor = anchor,
        id = escape(&record.id),
        status_class = record.status.as_str(),
        status = escape(status),
        category = escape(t.t(&record.category.title_key())),
        title = escape(record.title(locale)),
        description = escape(record.description(locale)),
        tags = tags,
        action = action,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::site::pages::test_support::{params, state};

    fn page(locale: Locale, pairs: &[(&str, &str)]) -> String {
        let state = state();
        let params = params(pairs);
        let ctx = PageContext::new(&state, locale, "/applications", &params);
        render(&ctx)
    }

    #[test]
    fn test_unfiltered_directory_shows_featured_and_everything() {
        let html = page(Locale::Id, &[]);
        assert_eq!(html.matches("<article ").count(), 7 + 1);
        assert!(html.contains("class=\"grid\""));
        assert!(html.contains("https://holiday.forpublic.id"));
        assert!(html.contains("id=\"featured-holiday-calendar\""));
        assert_eq!(html.matches("id=\"app-holiday-calendar\"").count(), 1);
    }

    #[test]
    fn test_category_filter_hides_featured_section() {
        let html = page(Locale::En, &[("category", "openData")]);
        assert!(html.contains("id=\"app-data-transparency\""));
        assert!(!html.contains("id=\"app-holiday-calendar\""));
        assert!(html.contains("class=\"badge active accent-blue\""));
    }

    #[test]
    fn test_search_in_locale() {
        let html = page(Locale::Id, &[("search", "kalender")]);
        assert_eq!(html.matches("<article ").count(), 1);
        assert!(html.contains("id=\"app-holiday-calendar\""));
        assert!(html.contains("value=\"kalender\""));
    }

    #[test]
    fn test_empty_state_links_back_to_everything() {
        let html = page(Locale::En, &[("search", "zzzz-nothing")]);
        assert_eq!(html.matches("<article ").count(), 0);
        assert!(html.contains("class=\"empty\""));
        assert!(html.contains("<a class=\"button\" href=\"/en/applications\">"));
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let html = page(Locale::En, &[("category", "sports")]);
        assert_eq!(html.matches("<article ").count(), 0);
    }

    #[test]
    fn test_list_view_keeps_category_in_toggle() {
        let html = page(Locale::En, &[("category", "publicServices"), ("view", "list")]);
        assert!(html.contains("class=\"list\""));
        assert!(html.contains("href=\"/en/applications?category=publicServices\" aria-pressed=\"false\""));
        assert!(html.contains(
            "href=\"/en/applications?category=publicServices&amp;view=list\" aria-pressed=\"true\""
        ));
        assert!(html.contains("<input type=\"hidden\" name=\"view\" value=\"list\">"));
    }

    #[test]
    fn test_coming_soon_records_have_no_link() {
        let html = page(Locale::En, &[("category", "education")]);
        assert!(html.contains("aria-disabled=\"true\""));
        assert!(!html.contains("<a class=\"button\" href=\"https://"));
    }
}
