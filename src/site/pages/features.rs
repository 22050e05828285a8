use super::home::feature_cards;
use crate::site::html::escape;
use crate::site::layout::{PageContext, render_page};
use crate::site::seo::{PageMeta, breadcrumb_schema};

pub fn render(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let config = &ctx.state.config;

    let meta = PageMeta::new(
        Some(t.t("features.page.title")),
        t.t("features.page.metaDescription"),
        t.t("features.page.keywords"),
        "/features",
    );
    let schemas = [breadcrumb_schema(config, t, &[(t.t("features.page.title"), "/features")])];

    let body = format!(
        "<section class=\"page-header\"><div class=\"container\">\
         <h1>{title}</h1><p>{description}</p></div></section>\n\
         <section><div class=\"container\">{cards}</div></section>\n\
         <section class=\"cta\"><div class=\"container\">\
         <h2>{cta_title}</h2><p>{cta_description}</p>\
         <a class=\"button\" href=\"{applications}\">{cta_button}</a></div></section>",
        title = escape(t.t("features.page.title")),
        description = escape(t.t("features.page.description")),
        cards = feature_cards(ctx),
        cta_title = escape(t.t("features.cta.title")),
        cta_description = escape(t.t("features.cta.description")),
        applications = ctx.url("/applications"),
        cta_button = escape(t.t("features.cta.button")),
    );

    render_page(ctx, &meta, &schemas, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::site::pages::test_support::{params, state};

    #[test]
    fn test_features_page_lists_every_feature() {
        let state = state();
        let params = params(&[]);
        let ctx = PageContext::new(&state, Locale::En, "/features", &params);
        let page = render(&ctx);

        for key in ["free", "easyToUse", "trustedData", "responsive", "fastReliable", "continuousGrowth"] {
            assert!(page.contains(&format!("class=\"card feature-{}\"", key)), "missing {}", key);
        }
        assert!(page.contains("\"@type\":\"BreadcrumbList\""));
    }
}
