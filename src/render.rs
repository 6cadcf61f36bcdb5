//! HTML rendering of page views.
//!
//! Every interpolated string goes through [`escape_html`]. Translations,
//! session values and configuration are all treated as untrusted text.

use crate::controller::{AvailabilityView, NoticeKind, PageContent, PageView};
use crate::i18n::{I18nError, Language};
use crate::pages::Page;
use crate::session::{Session, CHECK_ACTION};

const STYLE: &str = "\
body{font-family:sans-serif;margin:0;background:#f4f4f4;color:#222}\
header{background:#fff;padding:1rem 2rem;box-shadow:0 1px 3px rgba(0,0,0,.1)}\
.layout{display:flex;gap:2rem;padding:2rem}\
aside{min-width:12rem}\
aside ul{list-style:none;padding:0}\
aside a{display:block;padding:.4rem .6rem;border-radius:4px;color:inherit;text-decoration:none}\
aside a[aria-current=page]{background:#2563eb;color:#fff}\
main{flex:1}\
.columns{display:flex;gap:1rem}\
.column{flex:1;display:flex;flex-direction:column;gap:1rem}\
.column img{width:100%;height:auto}\
.notice{padding:.75rem 1rem;border-radius:4px;margin:1rem 0}\
.notice.success{background:#dcfce7}\
.notice.warning{background:#fef9c3}\
.notice.error{background:#fee2e2}";

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    v_htmlescape::escape(text).to_string()
}

/// Render a full HTML document for `view`.
pub fn render_page(view: &PageView, session: &Session) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
        view.language.code(),
        escape_html(view.title),
        STYLE
    ));
    html.push_str(&format!(
        "<header><h1>{}</h1></header>\n",
        escape_html(view.title)
    ));
    html.push_str("<div class=\"layout\">\n<aside>\n");

    let options: Vec<(&str, &str, bool)> = view
        .languages
        .iter()
        .map(|option| (option.code, option.native_name, option.selected))
        .collect();
    render_language_form(&mut html, view.language_label, &options, session);

    html.push_str(&format!(
        "<nav aria-label=\"{0}\">\n<h2>{0}</h2>\n<ul>\n",
        escape_html(view.navigation_label)
    ));
    for item in &view.navigation {
        let current = if item.active {
            " aria-current=\"page\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<li><a href=\"{}\" data-page=\"{}\"{}>{}</a></li>\n",
            escape_html(&item.href),
            item.page.slug(),
            current,
            escape_html(item.label)
        ));
    }
    html.push_str("</ul>\n</nav>\n</aside>\n");

    html.push_str(&format!("<main data-page=\"{}\">\n", view.page.slug()));
    render_content(&mut html, &view.content, session);
    html.push_str("</main>\n</div>\n</body>\n</html>\n");

    html
}

/// Render the page shown when text for the session could not be resolved.
///
/// The language selector stays available so the visitor can switch to a
/// language that renders.
pub fn render_error_page(err: &I18nError, session: &Session) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Translation unavailable</title>\n<style>{}</style>\n</head>\n<body>\n\
         <header><h1>Translation unavailable</h1></header>\n<div class=\"layout\">\n<aside>\n",
        session.language.code(),
        STYLE
    ));

    let languages: Vec<Language> = Language::enabled();
    let options: Vec<(&str, &str, bool)> = languages
        .iter()
        .map(|lang| (lang.code(), lang.native_name(), *lang == session.language))
        .collect();
    render_language_form(&mut html, "Language / Idioma / Llengua", &options, session);

    html.push_str(&format!(
        "</aside>\n<main>\n<div class=\"notice error\" role=\"alert\">{}</div>\n\
         <p><a href=\"{}\">English</a></p>\n</main>\n</div>\n</body>\n</html>\n",
        escape_html(&err.to_string()),
        escape_html(&session.with_language(Language::canonical()).href())
    ));

    html
}

/// Language `<select>` that resubmits the current page and date inputs.
fn render_language_form(
    html: &mut String,
    label: &str,
    options: &[(&str, &str, bool)],
    session: &Session,
) {
    html.push_str("<form method=\"get\" action=\"/\" class=\"language\">\n");
    html.push_str(&format!(
        "<label for=\"lang\">{}</label>\n<input type=\"hidden\" name=\"page\" value=\"{}\">\n",
        escape_html(label),
        session.page.slug()
    ));
    for (name, value) in [("start", &session.start), ("end", &session.end)] {
        if let Some(value) = value {
            html.push_str(&format!(
                "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
                name,
                escape_html(value)
            ));
        }
    }

    html.push_str("<select id=\"lang\" name=\"lang\" onchange=\"this.form.submit()\">\n");
    for (code, native_name, selected) in options {
        let selected = if *selected { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            code,
            selected,
            escape_html(native_name)
        ));
    }
    html.push_str("</select>\n<noscript><button type=\"submit\">OK</button></noscript>\n</form>\n");
}

fn render_content(html: &mut String, content: &PageContent, session: &Session) {
    match content {
        PageContent::Home {
            welcome_title,
            welcome_text,
            amenities_title,
            amenities,
            contact_title,
            contact_text,
        } => {
            html.push_str(&format!(
                "<h2>{}</h2>\n<p>{}</p>\n<h3>{}</h3>\n<ul class=\"amenities\">\n",
                escape_html(welcome_title),
                escape_html(welcome_text),
                escape_html(amenities_title)
            ));
            for amenity in amenities.iter() {
                html.push_str(&format!("<li>{}</li>\n", escape_html(amenity)));
            }
            html.push_str(&format!(
                "</ul>\n<h3>{}</h3>\n<p>{}</p>\n",
                escape_html(contact_title),
                escape_html(contact_text)
            ));
        }
        PageContent::Gallery { title, columns } => {
            html.push_str(&format!(
                "<h2>{}</h2>\n<div class=\"columns\">\n",
                escape_html(title)
            ));
            for column in columns {
                html.push_str("<div class=\"column\">\n");
                for image in column {
                    html.push_str(&format!(
                        "<img src=\"{}\" alt=\"{}\">\n",
                        escape_html(image.url),
                        escape_html(image.caption)
                    ));
                }
                html.push_str("</div>\n");
            }
            html.push_str("</div>\n");
        }
        PageContent::Availability(view) => render_availability(html, view, session),
        PageContent::Recommendations { title, text } | PageContent::Faq { title, text } => {
            html.push_str(&format!(
                "<h2>{}</h2>\n<p>{}</p>\n",
                escape_html(title),
                escape_html(text)
            ));
        }
    }
}

fn render_availability(html: &mut String, view: &AvailabilityView, session: &Session) {
    html.push_str(&format!(
        "<h2>{}</h2>\n<p>{}</p>\n\
         <form method=\"get\" action=\"/\" class=\"availability\">\n\
         <input type=\"hidden\" name=\"lang\" value=\"{}\">\n\
         <input type=\"hidden\" name=\"page\" value=\"{}\">\n\
         <label for=\"start\">{}</label>\n\
         <input type=\"date\" id=\"start\" name=\"start\" value=\"{}\">\n\
         <label for=\"end\">{}</label>\n\
         <input type=\"date\" id=\"end\" name=\"end\" value=\"{}\">\n\
         <button type=\"submit\" name=\"action\" value=\"{}\">{}</button>\n\
         </form>\n",
        escape_html(view.title),
        escape_html(view.text),
        session.language.code(),
        Page::Availability.slug(),
        escape_html(view.start_label),
        escape_html(&view.start_value),
        escape_html(view.end_label),
        escape_html(&view.end_value),
        CHECK_ACTION,
        escape_html(view.check_label)
    ));

    for notice in &view.notices {
        let class = match notice.kind {
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
        };
        html.push_str(&format!(
            "<div class=\"notice {}\" role=\"status\">{}</div>\n",
            class,
            escape_html(&notice.message)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::controller::PageController;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn render(session: &Session) -> String {
        let view = PageController::new(&Config::default())
            .render(session, today())
            .unwrap();
        render_page(&view, session)
    }

    // ==================== Escaping Tests ====================

    #[test]
    fn test_escape_html_special_chars() {
        let escaped = escape_html("<a href=\"x\">Tom & Jerry's</a>");

        assert!(escaped.starts_with("&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry"));
        assert!(!escaped.contains('\''));
        assert!(!escaped.contains("</a>"));
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("Galería"), "Galería");
    }

    // ==================== Page Rendering Tests ====================

    #[test]
    fn test_home_renders_bulleted_amenities() {
        let html = render(&Session::new(Language::ENGLISH));

        assert!(html.contains("<h2>Welcome to Our Portocolom Home</h2>"));
        assert_eq!(html.matches("<li>").count(), 7 + 5);
        assert!(html.contains("<li>Close to beach and local attractions</li>"));
        assert!(html.contains("<main data-page=\"home\">"));
    }

    #[test]
    fn test_gallery_renders_columns_in_order() {
        let html = render(&Session::new(Language::ENGLISH).with_page(Page::Gallery));

        let living = html.find("text=Living+Room").unwrap();
        let bedroom = html.find("text=Bedroom").unwrap();
        let kitchen = html.find("text=Kitchen").unwrap();
        let bathroom = html.find("text=Bathroom").unwrap();

        assert!(living < bedroom);
        assert!(bedroom < kitchen);
        assert!(kitchen < bathroom);
        assert_eq!(html.matches("<div class=\"column\">").count(), 2);
    }

    #[test]
    fn test_pages_are_mutually_exclusive() {
        let markers = [
            (Page::Home, "Welcome to Our Portocolom Home"),
            (Page::Gallery, "Photo Gallery"),
            (Page::Availability, "Select a date to check availability."),
            (Page::Recommendations, "Local Recommendations"),
            (Page::Faq, "Frequently Asked Questions"),
        ];

        for (page, _) in markers {
            let html = render(&Session::new(Language::ENGLISH).with_page(page));
            for (other, marker) in markers {
                assert_eq!(
                    html.contains(marker),
                    other == page,
                    "page {} / marker {:?}",
                    page,
                    marker
                );
            }
        }
    }

    #[test]
    fn test_active_navigation_marked() {
        let html = render(&Session::new(Language::ENGLISH).with_page(Page::Faq));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains("data-page=\"faq\" aria-current=\"page\""));
    }

    #[test]
    fn test_availability_form_defaults() {
        let html = render(&Session::new(Language::ENGLISH).with_page(Page::Availability));

        assert!(html.contains("name=\"start\" value=\"2024-06-01\""));
        assert!(html.contains("name=\"end\" value=\"2024-06-08\""));
        assert!(html.contains("name=\"action\" value=\"check\""));
        assert!(!html.contains("class=\"notice"));
    }

    #[test]
    fn test_language_form_preserves_page_and_dates() {
        let mut session = Session::new(Language::ENGLISH).with_page(Page::Availability);
        session.start = Some("2024-07-01".to_string());
        let html = render(&session);

        assert!(html.contains("<input type=\"hidden\" name=\"page\" value=\"availability\">"));
        assert!(html.contains("<input type=\"hidden\" name=\"start\" value=\"2024-07-01\">"));
        assert!(html.contains("<option value=\"ca\">Català</option>"));
        assert!(html.contains("<option value=\"en\" selected>English</option>"));
    }

    #[test]
    fn test_malformed_input_is_escaped() {
        let mut session = Session::new(Language::ENGLISH).with_page(Page::Availability);
        session.start = Some("<script>".to_string());
        let html = render(&session);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_page_names_key_and_language() {
        let err = I18nError::MissingTranslation {
            key: crate::i18n::TranslationKey::WelcomeTitle,
            language: "es",
        };
        let session = Session::new(Language::SPANISH).with_page(Page::Gallery);
        let html = render_error_page(&err, &session);

        assert!(html.contains("welcome_title"));
        assert!(!html.contains("'es'"));
        assert!(html.contains("<option value=\"es\" selected>Español</option>"));
        assert!(html.contains("lang=en&amp;page=gallery\">English</a>"));
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_escaped_text_has_no_markup(text in ".*") {
            let escaped = escape_html(&text);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('\''));
        }
    }
}
