//! Translation keys and values.
//!
//! Keys are a closed set known at compile time. Each one names a single piece
//! of display text independently of the language it is shown in.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifier of one piece of localized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TranslationKey {
    // ==================== Layout ====================
    Title,
    LanguageLabel,
    Navigation,

    // ==================== Page Labels ====================
    Home,
    Gallery,
    Availability,
    Recommendations,
    Faq,

    // ==================== Home ====================
    WelcomeTitle,
    WelcomeText,
    Amenities,
    AmenitiesList,
    Contact,
    ContactText,

    // ==================== Gallery ====================
    GalleryTitle,

    // ==================== Availability ====================
    AvailabilityTitle,
    AvailabilityText,
    StartDateLabel,
    EndDateLabel,
    CheckButton,
    AvailabilitySuccess,
    AvailabilityInvalidRange,
    AvailabilityRangeWarning,
    AvailabilityMalformedDate,

    // ==================== Placeholder Pages ====================
    RecommendationsTitle,
    RecommendationsText,
    FaqTitle,
    FaqText,
}

impl TranslationKey {
    /// Every key, in catalogue order.
    pub const ALL: [TranslationKey; 28] = [
        TranslationKey::Title,
        TranslationKey::LanguageLabel,
        TranslationKey::Navigation,
        TranslationKey::Home,
        TranslationKey::Gallery,
        TranslationKey::Availability,
        TranslationKey::Recommendations,
        TranslationKey::Faq,
        TranslationKey::WelcomeTitle,
        TranslationKey::WelcomeText,
        TranslationKey::Amenities,
        TranslationKey::AmenitiesList,
        TranslationKey::Contact,
        TranslationKey::ContactText,
        TranslationKey::GalleryTitle,
        TranslationKey::AvailabilityTitle,
        TranslationKey::AvailabilityText,
        TranslationKey::StartDateLabel,
        TranslationKey::EndDateLabel,
        TranslationKey::CheckButton,
        TranslationKey::AvailabilitySuccess,
        TranslationKey::AvailabilityInvalidRange,
        TranslationKey::AvailabilityRangeWarning,
        TranslationKey::AvailabilityMalformedDate,
        TranslationKey::RecommendationsTitle,
        TranslationKey::RecommendationsText,
        TranslationKey::FaqTitle,
        TranslationKey::FaqText,
    ];

    /// Stable snake_case name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationKey::Title => "title",
            TranslationKey::LanguageLabel => "language_label",
            TranslationKey::Navigation => "navigation",
            TranslationKey::Home => "home",
            TranslationKey::Gallery => "gallery",
            TranslationKey::Availability => "availability",
            TranslationKey::Recommendations => "recommendations",
            TranslationKey::Faq => "faq",
            TranslationKey::WelcomeTitle => "welcome_title",
            TranslationKey::WelcomeText => "welcome_text",
            TranslationKey::Amenities => "amenities",
            TranslationKey::AmenitiesList => "amenities_list",
            TranslationKey::Contact => "contact",
            TranslationKey::ContactText => "contact_text",
            TranslationKey::GalleryTitle => "gallery_title",
            TranslationKey::AvailabilityTitle => "availability_title",
            TranslationKey::AvailabilityText => "availability_text",
            TranslationKey::StartDateLabel => "start_date_label",
            TranslationKey::EndDateLabel => "end_date_label",
            TranslationKey::CheckButton => "check_button",
            TranslationKey::AvailabilitySuccess => "availability_success",
            TranslationKey::AvailabilityInvalidRange => "availability_invalid_range",
            TranslationKey::AvailabilityRangeWarning => "availability_range_warning",
            TranslationKey::AvailabilityMalformedDate => "availability_malformed_date",
            TranslationKey::RecommendationsTitle => "recommendations_title",
            TranslationKey::RecommendationsText => "recommendations_text",
            TranslationKey::FaqTitle => "faq_title",
            TranslationKey::FaqText => "faq_text",
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TranslationKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

/// A localized value: a single string or an ordered list of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Text(&'static str),
    List(&'static [&'static str]),
}

impl TranslationValue {
    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            TranslationValue::Text(text) => Some(text),
            TranslationValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&'static [&'static str]> {
        match self {
            TranslationValue::List(items) => Some(items),
            TranslationValue::Text(_) => None,
        }
    }

    /// A value is empty if it is an empty string, an empty list, or a list of empty strings.
    pub fn is_empty(&self) -> bool {
        match self {
            TranslationValue::Text(text) => text.trim().is_empty(),
            TranslationValue::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }

    /// Name of the shape, used in error messages and validation reports.
    pub fn shape(&self) -> &'static str {
        match self {
            TranslationValue::Text(_) => "text",
            TranslationValue::List(_) => "list",
        }
    }
}
