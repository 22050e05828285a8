use crate::faq::FaqAccordion;
use crate::i18n::FaqEntry;
use crate::site::html::escape;
use crate::site::layout::{PageContext, render_page};
use crate::site::seo::{PageMeta, breadcrumb_schema, faq_schema};

/// Render `entries` as an accordion driven by the `open` query parameter.
/// Each question links to the page with its own index toggled.
pub fn render_accordion(ctx: &PageContext<'_>, entries: &[FaqEntry]) -> String {
    let accordion = FaqAccordion::from_query(ctx.param("open"));
    let mut out = String::from("<div class=\"faq-list\">");

    for (index, entry) in entries.iter().enumerate() {
        let open = accordion.is_open(index);
        let toggled = accordion.toggled(index).to_query();
        let link = format!("{}#faq-{}", ctx.current_with("open", toggled.as_deref()), index);

        out.push_str(&format!(
            "<div class=\"faq-item\" id=\"faq-{index}\">\
             <a href=\"{link}\" aria-expanded=\"{open}\" aria-controls=\"faq-answer-{index}\">\
             <span>{question}</span><span aria-hidden=\"true\">{marker}</span></a>",
            index = index,
            link = escape(&link),
            open = open,
            question = escape(&entry.question),
            marker = if open { "&minus;" } else { "+" },
        ));
        if open {
            out.push_str(&format!(
                "<p id=\"faq-answer-{}\">{}</p>",
                index,
                escape(&entry.answer)
            ));
        }
        out.push_str("</div>");
    }

    out.push_str("</div>");
    out
}

pub fn render(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let config = &ctx.state.config;
    let entries = t.faq();

    let meta = PageMeta::new(
        Some(t.t("faq.page.title")),
        t.t("faq.page.metaDescription"),
        t.t("faq.page.keywords"),
        "/faq",
    );
    let schemas = [
        breadcrumb_schema(config, t, &[(t.t("faq.page.title"), "/faq")]),
        faq_schema(entries),
    ];

    let body = format!(
        "<section class=\"page-header\"><div class=\"container\">\
         <h1>{title}</h1><p>{subtitle}</p></div></section>\n\
         <section><div class=\"container\">{accordion}</div></section>\n\
         <section class=\"cta\"><div class=\"container\">\
         <h2>{cta_title}</h2><p>{cta_description}</p>\
         <a class=\"button\" href=\"{contact}\">{cta_button}</a></div></section>",
        title = escape(t.t("faq.page.title")),
        subtitle = escape(t.t("faq.page.subtitle")),
        accordion = render_accordion(ctx, entries),
        cta_title = escape(t.t("faq.contact.title")),
        cta_description = escape(t.t("faq.contact.description")),
        contact = ctx.url("/contact"),
        cta_button = escape(t.t("faq.contact.button")),
    );

    render_page(ctx, &meta, &schemas, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::site::pages::test_support::{params, state};

    #[test]
    fn test_all_questions_closed_by_default() {
        let state = state();
        let params = params(&[]);
        let ctx = PageContext::new(&state, Locale::Id, "/faq", &params);
        let page = render(&ctx);

        let count = ctx.t.faq().len();
        assert_eq!(page.matches("class=\"faq-item\"").count(), count);
        assert!(!page.contains("id=\"faq-answer-"));
        assert!(page.contains("href=\"/id/faq?open=0#faq-0\""));
        assert!(page.contains("\"@type\":\"FAQPage\""));
        assert!(page.contains("\"@type\":\"BreadcrumbList\""));
    }

    #[test]
    fn test_open_entries_show_answers_and_links_toggle() {
        let state = state();
        let params = params(&[("open", "0,2")]);
        let ctx = PageContext::new(&state, Locale::En, "/faq", &params);
        let page = render(&ctx);

        let entries = ctx.t.faq();
        assert!(page.contains("id=\"faq-answer-0\""));
        assert!(page.contains("id=\"faq-answer-2\""));
        assert!(!page.contains("id=\"faq-answer-1\""));
        assert!(page.contains(&escape(&entries[0].answer)));
        // closing entry 0 keeps entry 2 open; opening entry 1 adds it
        assert!(page.contains("href=\"/en/faq?open=2#faq-0\""));
        assert!(page.contains("href=\"/en/faq?open=0%2C1%2C2#faq-1\""));
        // closing the last open entry drops the parameter
        let params = crate::site::pages::test_support::params(&[("open", "2")]);
        let ctx = PageContext::new(&state, Locale::En, "/faq", &params);
        assert!(render(&ctx).contains("href=\"/en/faq#faq-2\""));
    }

    #[test]
    fn test_garbage_open_parameter_is_ignored() {
        let state = state();
        let params = params(&[("open", "x,,-1,1")]);
        let ctx = PageContext::new(&state, Locale::Id, "/faq", &params);
        let page = render(&ctx);
        assert!(page.contains("id=\"faq-answer-1\""));
        assert!(!page.contains("id=\"faq-answer-0\""));
    }

    #[test]
    fn test_toggling_a_question_closes_the_mobile_menu() {
        let state = state();
        let params = params(&[("menu", "open"), ("open", "1")]);
        let ctx = PageContext::new(&state, Locale::En, "/faq", &params);
        let page = render(&ctx);

        assert!(page.contains("class=\"mobile-nav"));
        assert!(page.contains("href=\"/en/faq?open=0%2C1#faq-0\""));
        assert!(page.contains("href=\"/en/faq#faq-1\""));
        assert!(!page.contains("menu=open#faq-"));
    }
}
