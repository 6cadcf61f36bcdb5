//! Localized string tables.
//!
//! English is the canonical table and defines every key. The Spanish and
//! Catalan tables are partial: they cover the layout and navigation labels
//! only, and everything else is resolved according to the configured
//! missing-translation policy.
//!
//! Templates use `{name}` placeholders which must be preserved by every
//! translation (see `TranslationValidator`).

use super::{TranslationKey as K, TranslationValue as V};

/// One row of a string table.
pub type Entry = (K, V);

/// Amenities offered by the apartment, one entry per line.
pub const ENGLISH_AMENITIES: [&str; 7] = [
    "3 bedrooms (one double, one single, and one with two single beds)",
    "Fully equipped kitchen",
    "Spacious living room",
    "High-speed Wi-Fi",
    "Air conditioning",
    "Sea view, community swimming pool and grass",
    "Close to beach and local attractions",
];

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: &[Entry] = &[
    // Layout
    (K::Title, V::Text("Can Ribot Portocolom")),
    (K::LanguageLabel, V::Text("Language / Idioma / Llengua")),
    (K::Navigation, V::Text("Navigation")),
    // Page labels
    (K::Home, V::Text("Home")),
    (K::Gallery, V::Text("Gallery")),
    (K::Availability, V::Text("Availability")),
    (K::Recommendations, V::Text("Recommendations")),
    (K::Faq, V::Text("FAQ")),
    // Home
    (K::WelcomeTitle, V::Text("Welcome to Our Portocolom Home")),
    (
        K::WelcomeText,
        V::Text("Enjoy your stay in our cozy apartment, available for 10 months of the year."),
    ),
    (K::Amenities, V::Text("Amenities")),
    (K::AmenitiesList, V::List(&ENGLISH_AMENITIES)),
    (K::Contact, V::Text("Contact")),
    (
        K::ContactText,
        V::Text("For bookings and inquiries, please email: {email}"),
    ),
    // Gallery
    (K::GalleryTitle, V::Text("Photo Gallery")),
    // Availability
    (K::AvailabilityTitle, V::Text("Check Availability")),
    (K::AvailabilityText, V::Text("Select a date to check availability.")),
    (K::StartDateLabel, V::Text("Start date")),
    (K::EndDateLabel, V::Text("End date")),
    (K::CheckButton, V::Text("Check Availability")),
    (
        K::AvailabilitySuccess,
        V::Text("The apartment is available from {start} to {end}!"),
    ),
    (
        K::AvailabilityInvalidRange,
        V::Text("The end date ({end}) is before the start date ({start}). Please adjust your dates."),
    ),
    (
        K::AvailabilityRangeWarning,
        V::Text("Note: the end date ({end}) is before the start date ({start})."),
    ),
    (
        K::AvailabilityMalformedDate,
        V::Text("Could not read the date \"{value}\". Please use the format YYYY-MM-DD."),
    ),
    // Placeholder pages
    (K::RecommendationsTitle, V::Text("Local Recommendations")),
    (
        K::RecommendationsText,
        V::Text("Coming soon: Our top picks for restaurants, activities, and attractions in the area."),
    ),
    (K::FaqTitle, V::Text("Frequently Asked Questions")),
    (
        K::FaqText,
        V::Text("Coming soon: Answers to common questions about your stay."),
    ),
];

// ==================== Spanish Strings ====================

/// Spanish language strings (partial)
pub const SPANISH_STRINGS: &[Entry] = &[
    (K::Title, V::Text("Can Ribot Portocolom")),
    (K::LanguageLabel, V::Text("Language / Idioma / Llengua")),
    (K::Navigation, V::Text("Navegación")),
    (K::Home, V::Text("Inicio")),
    (K::Gallery, V::Text("Galería")),
    (K::Availability, V::Text("Disponibilidad")),
    (K::Recommendations, V::Text("Recomendaciones")),
    (K::Faq, V::Text("Preguntas frecuentes")),
];

// ==================== Catalan Strings ====================

/// Catalan language strings (partial)
pub const CATALAN_STRINGS: &[Entry] = &[
    (K::Title, V::Text("Can Ribot Portocolom")),
    (K::LanguageLabel, V::Text("Language / Idioma / Llengua")),
    (K::Navigation, V::Text("Navegació")),
    (K::Home, V::Text("Inici")),
    (K::Gallery, V::Text("Galeria")),
    (K::Availability, V::Text("Disponibilitat")),
    (K::Recommendations, V::Text("Recomanacions")),
    (K::Faq, V::Text("Preguntes freqüents")),
];

/// Look up a key in a single table without any fallback.
pub fn lookup(table: &'static [Entry], key: K) -> Option<&'static V> {
    table
        .iter()
        .find(|(entry_key, _)| *entry_key == key)
        .map(|(_, value)| value)
}
