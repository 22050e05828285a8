use crate::site::html::{escape, external_link};
use crate::site::layout::{PageContext, render_page};
use crate::site::seo::{PageMeta, breadcrumb_schema};

const SUBJECTS: [&str; 4] = ["general", "technical", "partnership", "feedback"];

pub fn render(ctx: &PageContext<'_>) -> String {
    let t = &ctx.t;
    let config = &ctx.state.config;
    let site = &config.site;

    let meta = PageMeta::new(
        Some(t.t("contact.page.title")),
        t.t("contact.page.metaDescription"),
        t.t("contact.page.keywords"),
        "/contact",
    );
    let schemas = [breadcrumb_schema(config, t, &[(t.t("contact.page.title"), "/contact")])];

    let methods = format!(
        "<section><div class=\"container grid\">\
         <div class=\"card\"><h3>{email_title}</h3><p>{email_description}</p>\
         <a href=\"mailto:{email}\">{email}</a><p>{email_response}</p></div>\
         <div class=\"card\"><h3>{response_title}</h3><p>{response_description}</p>\
         <p><strong>{response_time}</strong></p><p>{response_note}</p></div>\
         <div class=\"card\"><h3>{community_title}</h3><p>{community_description}</p>\
         <p>{github}</p><p>{twitter}</p></div>\
         </div></section>\n",
        email_title = escape(t.t("contact.methods.email.title")),
        email_description = escape(t.t("contact.methods.email.description")),
        email = escape(&site.contact_email),
        email_response = escape(t.t("contact.methods.email.response")),
        response_title = escape(t.t("contact.methods.response.title")),
        response_description = escape(t.t("contact.methods.response.description")),
        response_time = escape(t.t("contact.methods.response.time")),
        response_note = escape(t.t("contact.methods.response.note")),
        community_title = escape(t.t("contact.methods.community.title")),
        community_description = escape(t.t("contact.methods.community.description")),
        github = external_link(&site.github_url, "external", "GitHub"),
        twitter = external_link(
            &format!("https://x.com/{}", site.twitter_handle.trim_start_matches('@')),
            "external",
            &site.twitter_handle
        ),
    );

    let mut options = format!(
        "<option value=\"\">{}</option>",
        escape(t.t("contact.form.subject.placeholder"))
    );
    for subject in SUBJECTS {
        options.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            subject,
            escape(t.t(&format!("contact.form.subject.options.{}", subject)))
        ));
    }

    // The form hands the message to the visitor's mail client
    let form = format!(
        "<section><div class=\"container grid\">\
         <div class=\"card\"><h2>{form_title}</h2><p>{form_description}</p>\
         <form action=\"mailto:{email}\" method=\"post\" enctype=\"text/plain\">\
         <label>{name_label}<input type=\"text\" name=\"name\" required placeholder=\"{name_placeholder}\"></label>\
         <label>{email_label}<input type=\"email\" name=\"email\" required placeholder=\"{email_placeholder}\"></label>\
         <label>{subject_label}<select name=\"subject\" required>{options}</select></label>\
         <label>{message_label}<textarea name=\"message\" rows=\"6\" required placeholder=\"{message_placeholder}\"></textarea></label>\
         <button class=\"button\" type=\"submit\">{submit}</button></form>\
         <p>{form_note}</p></div>\
         <div>\
         <div class=\"card\"><h3>{office_title}</h3>\
         <h4>{virtual_title}</h4><p>{virtual_description}</p>\
         <h4>{coverage_title}</h4><p>{coverage_description}</p></div>\
         <div class=\"card\"><h3>{hours_title}</h3>\
         <p>{weekdays}: <strong>{weekdays_time}</strong></p>\
         <p>{weekend}: <strong>{email_only}</strong></p></div>\
         <div class=\"card\"><h3>{faq_title}</h3><p>{faq_description}</p>\
         <a class=\"button secondary\" href=\"{faq_href}\">{faq_button}</a></div>\
         </div>\
         </div></section>",
        form_title = escape(t.t("contact.form.title")),
        form_description = escape(t.t("contact.form.description")),
        email = escape(&site.contact_email),
        name_label = escape(t.t("contact.form.name.label")),
        name_placeholder = escape(t.t("contact.form.name.placeholder")),
        email_label = escape(t.t("contact.form.email.label")),
        email_placeholder = escape(t.t("contact.form.email.placeholder")),
        subject_label = escape(t.t("contact.form.subject.label")),
        options = options,
        message_label = escape(t.t("contact.form.message.label")),
        message_placeholder = escape(t.t("contact.form.message.placeholder")),
        submit = escape(t.t("contact.form.submit")),
        form_note = escape(t.t("contact.form.note")),
        office_title = escape(t.t("contact.info.office.title")),
        virtual_title = escape(t.t("contact.info.office.virtual.title")),
        virtual_description = escape(t.t("contact.info.office.virtual.description")),
        coverage_title = escape(t.t("contact.info.office.coverage.title")),
        coverage_description = escape(t.t("contact.info.office.coverage.description")),
        hours_title = escape(t.t("contact.hours.title")),
        weekdays = escape(t.t("contact.hours.weekdays")),
        weekdays_time = escape(t.t("contact.hours.weekdaysTime")),
        weekend = escape(t.t("contact.hours.weekend")),
        email_only = escape(t.t("contact.hours.emailOnly")),
        faq_title = escape(t.t("contact.faq.title")),
        faq_description = escape(t.t("contact.faq.description")),
        faq_href = ctx.url("/faq"),
        faq_button = escape(t.t("contact.faq.button")),
    );

    let body = format!(
        "<section class=\"page-header\"><div class=\"container\">\
         <h1>{}</h1><p>{}</p></div></section>\n{}{}",
        escape(t.t("contact.page.title")),
        escape(t.t("contact.page.description")),
        methods,
        form,
    );

    render_page(ctx, &meta, &schemas, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::site::pages::test_support::{params, state};

    #[test]
    fn test_contact_form_posts_to_mail_client() {
        let state = state();
        let params = params(&[]);
        let ctx = PageContext::new(&state, Locale::Id, "/contact", &params);
        let page = render(&ctx);

        assert!(page.contains("<form action=\"mailto:forpublic.indonesia@gmail.com\""));
        assert_eq!(page.matches("<option value=").count(), SUBJECTS.len() + 1);
        assert!(page.contains("href=\"/id/faq\""));
        assert!(page.contains("https://github.com/forpublic-id"));
    }

    #[test]
    fn test_subject_options_exist_in_every_locale() {
        let state = state();
        for locale in Locale::ALL {
            for subject in SUBJECTS {
                let key = format!("contact.form.subject.options.{}", subject);
                assert!(state.messages.messages(locale).contains(&key), "{} missing {}", locale, key);
            }
        }
    }
}
