use crate::site::html::escape;
use crate::site::layout::{PageContext, render_page};
use crate::site::seo::PageMeta;

pub fn render(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let meta = PageMeta::new(
        Some(t.t("notFound.title")),
        t.t("notFound.description"),
        t.t("seo.defaultKeywords"),
        "",
    )
    .noindex();

    let body = format!(
        "<section class=\"empty\"><div class=\"container\">\
         <p class=\"accent\">404</p><h1>{title}</h1><p>{description}</p>\
         <a class=\"button\" href=\"{home}\">{back}</a> \
         <a class=\"button secondary\" href=\"{applications}\">{browse}</a>\
         </div></section>",
        title = escape(t.t("notFound.title")),
        description = escape(t.t("notFound.description")),
        home = ctx.url(""),
        back = escape(t.t("notFound.backToHome")),
        applications = ctx.url("/applications"),
        browse = escape(t.t("notFound.browseApplications")),
    );

    render_page(ctx, &meta, &[], &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::site::pages::test_support::{params, state};

    #[test]
    fn test_not_found_is_localized_and_noindex() {
        let state = state();
        let params = params(&[]);
        let id = PageContext::new(&state, Locale::Id, "", &params);
        let en = PageContext::new(&state, Locale::En, "", &params);

        let id_page = render(&id);
        let en_page = render(&en);
        assert!(id_page.contains(&escape(id.t.t("notFound.title"))));
        assert!(en_page.contains(&escape(en.t.t("notFound.title"))));
        assert_ne!(id.t.t("notFound.title"), en.t.t("notFound.title"));
        assert!(en_page.contains("content=\"noindex, follow\""));
        assert!(en_page.contains("href=\"/en\""));
    }
}
