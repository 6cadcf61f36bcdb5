//! Per-visitor session state.
//!
//! A session is the language, the page and the availability inputs of one
//! visitor. It travels in the query string of every link and form, and is
//! rebuilt from it on each request.

use crate::i18n::Language;
use crate::pages::Page;
use serde::Deserialize;
use tracing::debug;

/// Value of the `action` parameter that confirms an availability check.
pub const CHECK_ACTION: &str = "check";

/// Raw query parameters as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionParams {
    pub lang: Option<String>,
    pub page: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub language: Language,
    pub page: Page,
    /// Start date input as typed; parsed when the page is rendered
    pub start: Option<String>,
    /// End date input as typed; parsed when the page is rendered
    pub end: Option<String>,
    /// The visitor pressed the check button
    pub confirm: bool,
}

impl Session {
    /// A fresh session on the home page.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            page: Page::default(),
            start: None,
            end: None,
            confirm: false,
        }
    }

    /// Rebuild a session from query parameters.
    ///
    /// Unknown languages fall back to `default_language` and unknown pages to
    /// the home page. Empty values count as absent.
    pub fn from_params(params: SessionParams, default_language: Language) -> Self {
        let language = match non_empty(params.lang) {
            Some(code) => Language::from_code(&code).unwrap_or_else(|e| {
                debug!("Ignoring language parameter: {}", e);
                default_language
            }),
            None => default_language,
        };

        let page = match non_empty(params.page) {
            Some(slug) => slug.parse::<Page>().unwrap_or_else(|e: String| {
                debug!("Ignoring page parameter: {}", e);
                Page::default()
            }),
            None => Page::default(),
        };

        Self {
            language,
            page,
            start: non_empty(params.start),
            end: non_empty(params.end),
            confirm: params.action.as_deref() == Some(CHECK_ACTION),
        }
    }

    /// The same session shown in another language.
    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language,
            confirm: false,
            ..self.clone()
        }
    }

    /// The same session on another page.
    pub fn with_page(&self, page: Page) -> Self {
        Self {
            page,
            confirm: false,
            ..self.clone()
        }
    }

    /// Link to this session's language and page.
    pub fn href(&self) -> String {
        format!("/?lang={}&page={}", self.language.code(), self.page.slug())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
