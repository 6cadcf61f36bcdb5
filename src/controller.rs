//! Page controller: turns a session into the content of one page.
//!
//! Rendering resolves every displayed string through the translation store,
//! so switching the session's language re-resolves all text while the page
//! and the date inputs stay as they were.

use crate::availability::{
    check_availability, parse_date_input, AvailabilityError, DateField, DateRange,
    DateRangePolicy, DATE_FORMAT,
};
use crate::config::Config;
use crate::gallery::{self, GalleryImage};
use crate::i18n::{I18nError, Language, TranslationKey, TranslationStore};
use crate::pages::Page;
use crate::session::Session;
use chrono::NaiveDate;
use tracing::debug;

/// An entry of the language selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub native_name: &'static str,
    pub selected: bool,
}

/// An entry of the page navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

/// A message shown after the availability form was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityView {
    pub title: &'static str,
    pub text: &'static str,
    pub start_label: &'static str,
    pub end_label: &'static str,
    pub check_label: &'static str,
    /// Value of the start date input
    pub start_value: String,
    /// Value of the end date input
    pub end_value: String,
    pub notices: Vec<Notice>,
}

/// The body of the selected page. Exactly one variant is rendered per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    Home {
        welcome_title: &'static str,
        welcome_text: &'static str,
        amenities_title: &'static str,
        amenities: &'static [&'static str],
        contact_title: &'static str,
        contact_text: String,
    },
    Gallery {
        title: &'static str,
        columns: Vec<Vec<GalleryImage>>,
    },
    Availability(AvailabilityView),
    Recommendations {
        title: &'static str,
        text: &'static str,
    },
    Faq {
        title: &'static str,
        text: &'static str,
    },
}

impl PageContent {
    /// The page this content belongs to.
    pub fn page(&self) -> Page {
        match self {
            PageContent::Home { .. } => Page::Home,
            PageContent::Gallery { .. } => Page::Gallery,
            PageContent::Availability(_) => Page::Availability,
            PageContent::Recommendations { .. } => Page::Recommendations,
            PageContent::Faq { .. } => Page::Faq,
        }
    }
}

/// Everything needed to draw one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub language: Language,
    pub page: Page,
    pub title: &'static str,
    pub language_label: &'static str,
    pub navigation_label: &'static str,
    pub languages: Vec<LanguageOption>,
    pub navigation: Vec<NavItem>,
    pub content: PageContent,
}

#[derive(Debug, Clone)]
pub struct PageController {
    store: TranslationStore,
    date_range_policy: DateRangePolicy,
    availability_window_days: u32,
    contact_email: String,
}

impl PageController {
    pub fn new(config: &Config) -> Self {
        Self {
            store: TranslationStore::new(
                config.missing_translation_policy,
                config.fallback_language,
            ),
            date_range_policy: config.date_range_policy,
            availability_window_days: config.availability_window_days,
            contact_email: config.contact_email.clone(),
        }
    }

    /// Use `store` for all text lookups.
    pub fn with_store(mut self, store: TranslationStore) -> Self {
        self.store = store;
        self
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// Render the session's page. `today` seeds the default date inputs.
    pub fn render(&self, session: &Session, today: NaiveDate) -> Result<PageView, I18nError> {
        let language = session.language;
        debug!("Rendering '{}' in '{}'", session.page, language);

        let navigation = Page::ALL
            .iter()
            .map(|&page| -> Result<NavItem, I18nError> {
                Ok(NavItem {
                    page,
                    label: self.store.text(language, page.label_key())?,
                    href: session.with_page(page).href(),
                    active: page == session.page,
                })
            })
            .collect::<Result<Vec<_>, I18nError>>()?;

        let languages = Language::enabled()
            .into_iter()
            .map(|option| LanguageOption {
                code: option.code(),
                native_name: option.native_name(),
                selected: option == language,
            })
            .collect();

        let content = match session.page {
            Page::Home => self.render_home(language)?,
            Page::Gallery => PageContent::Gallery {
                title: self.store.text(language, TranslationKey::GalleryTitle)?,
                columns: gallery::columns(),
            },
            Page::Availability => {
                PageContent::Availability(self.render_availability(session, today)?)
            }
            Page::Recommendations => PageContent::Recommendations {
                title: self.store.text(language, TranslationKey::RecommendationsTitle)?,
                text: self.store.text(language, TranslationKey::RecommendationsText)?,
            },
            Page::Faq => PageContent::Faq {
                title: self.store.text(language, TranslationKey::FaqTitle)?,
                text: self.store.text(language, TranslationKey::FaqText)?,
            },
        };

        Ok(PageView {
            language,
            page: session.page,
            title: self.store.text(language, TranslationKey::Title)?,
            language_label: self.store.text(language, TranslationKey::LanguageLabel)?,
            navigation_label: self.store.text(language, TranslationKey::Navigation)?,
            languages,
            navigation,
            content,
        })
    }

    fn render_home(&self, language: Language) -> Result<PageContent, I18nError> {
        Ok(PageContent::Home {
            welcome_title: self.store.text(language, TranslationKey::WelcomeTitle)?,
            welcome_text: self.store.text(language, TranslationKey::WelcomeText)?,
            amenities_title: self.store.text(language, TranslationKey::Amenities)?,
            amenities: self.store.list(language, TranslationKey::AmenitiesList)?,
            contact_title: self.store.text(language, TranslationKey::Contact)?,
            contact_text: self.store.format(
                language,
                TranslationKey::ContactText,
                &[("email", self.contact_email.as_str())],
            )?,
        })
    }

    fn render_availability(
        &self,
        session: &Session,
        today: NaiveDate,
    ) -> Result<AvailabilityView, I18nError> {
        let language = session.language;
        let defaults = DateRange::default_for(today, self.availability_window_days);

        let start = parse_date_input(DateField::Start, session.start.as_deref());
        let end = parse_date_input(DateField::End, session.end.as_deref());

        let start_value = input_value(&start, session.start.as_deref(), defaults.start);
        let end_value = input_value(&end, session.end.as_deref(), defaults.end);

        let mut notices = Vec::new();

        for err in [&start, &end].into_iter().filter_map(|r| r.as_ref().err()) {
            notices.push(self.warning_for(language, err)?);
        }

        if session.confirm {
            if let (Ok(start), Ok(end)) = (start, end) {
                let range = DateRange::new(
                    start.unwrap_or(defaults.start),
                    end.unwrap_or(defaults.end),
                );
                notices.extend(self.confirm(language, range)?);
            }
        }

        Ok(AvailabilityView {
            title: self.store.text(language, TranslationKey::AvailabilityTitle)?,
            text: self.store.text(language, TranslationKey::AvailabilityText)?,
            start_label: self.store.text(language, TranslationKey::StartDateLabel)?,
            end_label: self.store.text(language, TranslationKey::EndDateLabel)?,
            check_label: self.store.text(language, TranslationKey::CheckButton)?,
            start_value,
            end_value,
            notices,
        })
    }

    /// Notices produced by pressing the check button for `range`.
    fn confirm(&self, language: Language, range: DateRange) -> Result<Vec<Notice>, I18nError> {
        let outcome = match check_availability(range, self.date_range_policy) {
            Ok(outcome) => outcome,
            Err(err) => return Ok(vec![self.warning_for(language, &err)?]),
        };

        let start = outcome.range.start.format(DATE_FORMAT).to_string();
        let end = outcome.range.end.format(DATE_FORMAT).to_string();
        let args = [("start", start.as_str()), ("end", end.as_str())];

        let mut notices = vec![Notice {
            kind: NoticeKind::Success,
            message: self
                .store
                .format(language, TranslationKey::AvailabilitySuccess, &args)?,
        }];

        if outcome.reversed {
            notices.push(Notice {
                kind: NoticeKind::Warning,
                message: self.store.format(
                    language,
                    TranslationKey::AvailabilityRangeWarning,
                    &args,
                )?,
            });
        }

        Ok(notices)
    }

    fn warning_for(&self, language: Language, err: &AvailabilityError) -> Result<Notice, I18nError> {
        let message = match err {
            AvailabilityError::InvalidDateRange { start, end } => {
                let start = start.format(DATE_FORMAT).to_string();
                let end = end.format(DATE_FORMAT).to_string();
                self.store.format(
                    language,
                    TranslationKey::AvailabilityInvalidRange,
                    &[("start", start.as_str()), ("end", end.as_str())],
                )?
            }
            AvailabilityError::MalformedDate { value, .. } => self.store.format(
                language,
                TranslationKey::AvailabilityMalformedDate,
                &[("value", value.as_str())],
            )?,
        };

        Ok(Notice {
            kind: NoticeKind::Warning,
            message,
        })
    }
}

/// What to show in a date input: the parsed date, the raw text if it did not
/// parse, or the default.
fn input_value(
    parsed: &Result<Option<NaiveDate>, AvailabilityError>,
    raw: Option<&str>,
    default: NaiveDate,
) -> String {
    match parsed {
        Ok(Some(date)) => date.format(DATE_FORMAT).to_string(),
        Ok(None) => default.format(DATE_FORMAT).to_string(),
        Err(_) => raw.unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{MissingTranslationPolicy, TranslationMetrics};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn controller(config: Config) -> PageController {
        let metrics: &'static TranslationMetrics = Box::leak(Box::new(TranslationMetrics::new()));
        let store = TranslationStore::new(
            config.missing_translation_policy,
            config.fallback_language,
        )
        .with_metrics(metrics);
        PageController::new(&config).with_store(store)
    }

    fn availability(session: &Session, config: Config) -> AvailabilityView {
        match controller(config).render(session, today()).unwrap().content {
            PageContent::Availability(view) => view,
            other => panic!("expected availability, got {:?}", other),
        }
    }

    fn check(start: &str, end: &str) -> Session {
        Session {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            confirm: true,
            ..Session::new(Language::ENGLISH).with_page(Page::Availability)
        }
    }

    // ==================== Page Selection Tests ====================

    #[test]
    fn test_each_page_renders_only_its_own_content() {
        let controller = controller(Config::default());
        for page in Page::ALL {
            let session = Session::new(Language::ENGLISH).with_page(page);
            let view = controller.render(&session, today()).unwrap();

            assert_eq!(view.page, page);
            assert_eq!(view.content.page(), page);
            let active: Vec<_> = view.navigation.iter().filter(|n| n.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].page, page);
        }
    }

    #[test]
    fn test_navigation_in_fixed_order() {
        let view = controller(Config::default())
            .render(&Session::new(Language::ENGLISH), today())
            .unwrap();
        let labels: Vec<_> = view.navigation.iter().map(|n| n.label).collect();
        assert_eq!(
            labels,
            vec!["Home", "Gallery", "Availability", "Recommendations", "FAQ"]
        );
        assert_eq!(view.navigation[1].href, "/?lang=en&page=gallery");
    }

    #[test]
    fn test_language_options_mark_current() {
        let view = controller(Config::default())
            .render(&Session::new(Language::CATALAN), today())
            .unwrap();
        let selected: Vec<_> = view
            .languages
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.code)
            .collect();
        assert_eq!(selected, vec!["ca"]);
        assert_eq!(view.languages.len(), 3);
    }

    // ==================== Home Tests ====================

    #[test]
    fn test_home_content() {
        let view = controller(Config::default())
            .render(&Session::new(Language::ENGLISH), today())
            .unwrap();

        match view.content {
            PageContent::Home {
                welcome_title,
                amenities,
                contact_text,
                ..
            } => {
                assert_eq!(welcome_title, "Welcome to Our Portocolom Home");
                assert_eq!(amenities.len(), 7);
                assert_eq!(
                    contact_text,
                    "For bookings and inquiries, please email: bookings@canribot.example"
                );
            }
            other => panic!("expected home, got {:?}", other),
        }
    }

    // ==================== Gallery Tests ====================

    #[test]
    fn test_gallery_columns() {
        let session = Session::new(Language::ENGLISH).with_page(Page::Gallery);
        let view = controller(Config::default()).render(&session, today()).unwrap();

        match view.content {
            PageContent::Gallery { title, columns } => {
                assert_eq!(title, "Photo Gallery");
                assert_eq!(columns[0][0].caption, "Living Room");
                assert_eq!(columns[0][1].caption, "Bedroom");
                assert_eq!(columns[1][0].caption, "Kitchen");
                assert_eq!(columns[1][1].caption, "Bathroom");
            }
            other => panic!("expected gallery, got {:?}", other),
        }
    }

    // ==================== Availability Tests ====================

    #[test]
    fn test_availability_default_inputs() {
        let session = Session::new(Language::ENGLISH).with_page(Page::Availability);
        let view = availability(&session, Config::default());

        assert_eq!(view.start_value, "2024-06-01");
        assert_eq!(view.end_value, "2024-06-08");
        assert!(view.notices.is_empty());
    }

    #[test]
    fn test_availability_window_is_configurable() {
        let session = Session::new(Language::ENGLISH).with_page(Page::Availability);
        let config = Config {
            availability_window_days: 14,
            ..Config::default()
        };
        assert_eq!(availability(&session, config).end_value, "2024-06-15");
    }

    #[test]
    fn test_availability_huge_window_does_not_panic() {
        let session = Session::new(Language::ENGLISH).with_page(Page::Availability);
        let config = Config {
            availability_window_days: 4_000_000_000,
            ..Config::default()
        };
        let view = availability(&session, config);
        assert_eq!(view.start_value, "2024-06-01");
        assert!(view.notices.is_empty());
    }

    #[test]
    fn test_availability_success_message() {
        let view = availability(&check("2024-06-01", "2024-06-08"), Config::default());

        assert_eq!(
            view.notices,
            vec![Notice {
                kind: NoticeKind::Success,
                message: "The apartment is available from 2024-06-01 to 2024-06-08!".to_string(),
            }]
        );
    }

    #[test]
    fn test_availability_no_message_without_confirm() {
        let mut session = check("2024-06-01", "2024-06-08");
        session.confirm = false;
        assert!(availability(&session, Config::default()).notices.is_empty());
    }

    #[test]
    fn test_availability_reversed_range_rejected() {
        let view = availability(&check("2024-06-10", "2024-06-01"), Config::default());

        assert_eq!(view.notices.len(), 1);
        assert_eq!(view.notices[0].kind, NoticeKind::Warning);
        assert!(view.notices[0].message.contains("2024-06-01"));
        assert!(view.notices[0].message.contains("2024-06-10"));
        assert!(!view.notices[0].message.contains("available"));
    }

    #[test]
    fn test_availability_reversed_range_accepted_with_warning() {
        let config = Config {
            date_range_policy: DateRangePolicy::AcceptWithWarning,
            ..Config::default()
        };
        let view = availability(&check("2024-06-10", "2024-06-01"), config);

        let kinds: Vec<_> = view.notices.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NoticeKind::Success, NoticeKind::Warning]);
        assert!(view.notices[0]
            .message
            .contains("from 2024-06-10 to 2024-06-01"));
    }

    #[test]
    fn test_availability_malformed_date_blocks_check() {
        let view = availability(&check("2024-13-01", "2024-06-08"), Config::default());

        assert_eq!(view.start_value, "2024-13-01");
        assert_eq!(view.notices.len(), 1);
        assert_eq!(view.notices[0].kind, NoticeKind::Warning);
        assert!(view.notices[0].message.contains("\"2024-13-01\""));
    }

    #[test]
    fn test_availability_missing_end_uses_default() {
        let mut session = check("2024-06-01", "");
        session.end = None;
        let view = availability(&session, Config::default());

        assert_eq!(view.end_value, "2024-06-08");
        assert!(view.notices[0].message.contains("2024-06-08"));
    }

    // ==================== Language Tests ====================

    #[test]
    fn test_switching_language_keeps_page() {
        let controller = controller(Config::default());
        let session = Session::new(Language::ENGLISH).with_page(Page::Gallery);

        let english = controller.render(&session, today()).unwrap();
        let catalan = controller
            .render(&session.with_language(Language::CATALAN), today())
            .unwrap();

        assert_eq!(catalan.page, Page::Gallery);
        assert_eq!(catalan.language, Language::CATALAN);
        assert_eq!(english.navigation[1].label, "Gallery");
        assert_eq!(catalan.navigation[1].label, "Galeria");
        assert_eq!(catalan.navigation_label, "Navegació");
        assert_eq!(catalan.navigation[1].href, "/?lang=ca&page=gallery");
    }

    #[test]
    fn test_every_page_renders_in_every_language_with_fallback() {
        let controller = controller(Config::default());
        for language in Language::enabled() {
            for page in Page::ALL {
                let session = Session::new(language).with_page(page);
                assert!(
                    controller.render(&session, today()).is_ok(),
                    "{} / {}",
                    language,
                    page
                );
            }
        }
    }

    #[test]
    fn test_fail_fast_surfaces_missing_key() {
        let config = Config {
            missing_translation_policy: MissingTranslationPolicy::FailFast,
            ..Config::default()
        };
        let err = controller(config)
            .render(&Session::new(Language::SPANISH), today())
            .unwrap_err();

        assert!(matches!(
            err,
            I18nError::MissingTranslation { language: "es", .. }
        ));
    }

    #[test]
    fn test_fail_fast_english_renders_everything() {
        let config = Config {
            missing_translation_policy: MissingTranslationPolicy::FailFast,
            ..Config::default()
        };
        let controller = controller(config);
        for page in Page::ALL {
            let session = Session::new(Language::ENGLISH).with_page(page);
            assert!(controller.render(&session, today()).is_ok());
        }
    }
}
