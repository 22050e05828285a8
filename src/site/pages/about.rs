use crate::site::html::escape;
use crate::site::layout::{PageContext, render_page};
use crate::site::seo::{PageMeta, breadcrumb_schema};

/// Organization values, in display order
const VALUES: [&str; 4] = ["transparency", "accessibility", "innovation", "community"];

pub fn render(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let config = &ctx.state.config;

    let meta = PageMeta::new(
        Some(t.t("about.page.title")),
        t.t("about.page.metaDescription"),
        t.t("about.page.keywords"),
        "/about",
    );
    let schemas = [breadcrumb_schema(config, t, &[(t.t("about.page.title"), "/about")])];

    let mut values = String::new();
    for value in VALUES {
        values.push_str(&format!(
            "<div class=\"card\"><h3>{}</h3><p>{}</p></div>",
            escape(t.t(&format!("about.values.{}.title", value))),
            escape(t.t(&format!("about.values.{}.description", value))),
        ));
    }

    let body = format!(
        "<section class=\"page-header\"><div class=\"container\">\
         <h1>{title}</h1><p>{subtitle}</p></div></section>\n\
         <section><div class=\"container grid\">\
         <div class=\"card\"><h2>{vision_title}</h2><p>{vision}</p></div>\
         <div class=\"card\"><h2>{mission_title}</h2><p>{mission}</p></div>\
         </div></section>\n\
         <section><div class=\"container\"><h2>{values_title}</h2><div class=\"grid\">{values}</div></div></section>\n\
         <section><div class=\"container\"><h2>{team_title}</h2><p>{team}</p></div></section>\n\
         <section class=\"cta\"><div class=\"container\">\
         <h2>{cta_title}</h2><p>{cta_description}</p>\
         <a class=\"button\" href=\"{applications}\">{cta_primary}</a> \
         <a class=\"button secondary\" href=\"mailto:{email}\">{cta_secondary}</a>\
         </div></section>",
        title = escape(t.t("about.page.title")),
        subtitle = escape(t.t("about.subtitle")),
        vision_title = escape(t.t("about.vision.title")),
        vision = escape(t.t("about.vision.description")),
        mission_title = escape(t.t("about.mission.title")),
        mission = escape(t.t("about.mission.description")),
        values_title = escape(t.t("about.values.title")),
        values = values,
        team_title = escape(t.t("about.team.title")),
        team = escape(t.t("about.team.description")),
        cta_title = escape(t.t("about.cta.title")),
        cta_description = escape(t.t("about.cta.description")),
        applications = ctx.url("/applications"),
        cta_primary = escape(t.t("about.cta.primary")),
        email = escape(&config.site.contact_email),
        cta_secondary = escape(t.t("about.cta.secondary")),
    );

    render_page(ctx, &meta, &schemas, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::site::pages::test_support::{params, state};

    #[test]
    fn test_about_page_renders_values_and_contact() {
        let state = state();
        let params = params(&[]);
        let ctx = PageContext::new(&state, Locale::En, "/about", &params);
        let page = render(&ctx);

        for value in VALUES {
            let key = format!("about.values.{}.title", value);
            assert!(state.messages.messages(Locale::Id).contains(&key));
            assert!(page.contains(&escape(ctx.t.t(&key))));
        }
        assert!(page.contains("mailto:forpublic.indonesia@gmail.com"));
        assert!(page.contains("<link rel=\"canonical\" href=\"https://forpublic.id/en/about\">"));
    }

    #[test]
    fn test_value_messages_exist_in_every_locale() {
        let state = state();
        for locale in Locale::ALL {
            for value in VALUES {
                for field in ["title", "description"] {
                    let key = format!("about.values.{}.{}", value, field);
                    assert!(state.messages.messages(locale).contains(&key), "{} missing {}", locale, key);
                }
            }
        }
    }
}
