//! Page identity.
//!
//! Pages are identified by tag, never by their translated label. The label is
//! looked up from the page.

use crate::i18n::TranslationKey;
use std::fmt;
use std::str::FromStr;

/// One of the five sections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Gallery,
    Availability,
    Recommendations,
    Faq,
}

impl Page {
    /// Pages in navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Gallery,
        Page::Availability,
        Page::Recommendations,
        Page::Faq,
    ];

    /// URL identifier used in the `page` query parameter.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Gallery => "gallery",
            Page::Availability => "availability",
            Page::Recommendations => "recommendations",
            Page::Faq => "faq",
        }
    }

    /// Key of the navigation label.
    pub fn label_key(&self) -> TranslationKey {
        match self {
            Page::Home => TranslationKey::Home,
            Page::Gallery => TranslationKey::Gallery,
            Page::Availability => TranslationKey::Availability,
            Page::Recommendations => TranslationKey::Recommendations,
            Page::Faq => TranslationKey::Faq,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.slug() == s)
            .ok_or_else(|| format!("Unknown page '{}'", s))
    }
}
