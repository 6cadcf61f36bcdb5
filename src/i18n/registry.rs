//! The table of languages the site is offered in.
//!
//! [`LANGUAGES`] lists each language with its string table. The table is
//! checked once, the first time [`LanguageRegistry::global`] is called: codes
//! must be unique and exactly one enabled language must be canonical.

use super::strings::{Entry, CATALAN_STRINGS, ENGLISH_STRINGS, SPANISH_STRINGS};
use super::RegistryError;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 code, also used in URLs ("en", "es", "ca")
    pub code: &'static str,

    /// English name, used in logs
    pub name: &'static str,

    /// Name shown in the language selector
    pub native_name: &'static str,

    /// The canonical table defines every key and backs validation
    pub is_canonical: bool,

    pub enabled: bool,

    /// May be partial for non-canonical languages
    pub strings: &'static [Entry],
}

/// Languages in selector order.
pub const LANGUAGES: &[LanguageConfig] = &[
    LanguageConfig {
        code: "en",
        name: "English",
        native_name: "English",
        is_canonical: true,
        enabled: true,
        strings: ENGLISH_STRINGS,
    },
    LanguageConfig {
        code: "es",
        name: "Spanish",
        native_name: "Español",
        is_canonical: false,
        enabled: true,
        strings: SPANISH_STRINGS,
    },
    LanguageConfig {
        code: "ca",
        name: "Catalan",
        native_name: "Català",
        is_canonical: false,
        enabled: true,
        strings: CATALAN_STRINGS,
    },
];

/// A checked language table.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: &'static [LanguageConfig],
    canonical: usize,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Check `languages` and build a registry over it.
    pub fn from_table(languages: &'static [LanguageConfig]) -> Result<Self, RegistryError> {
        let mut canonical: Option<usize> = None;

        for (index, lang) in languages.iter().enumerate() {
            if languages[..index].iter().any(|seen| seen.code == lang.code) {
                return Err(RegistryError::DuplicateCode(lang.code));
            }

            if !lang.is_canonical {
                continue;
            }
            if let Some(first) = canonical {
                return Err(RegistryError::MultipleCanonical(
                    languages[first].code,
                    lang.code,
                ));
            }
            if !lang.enabled {
                return Err(RegistryError::CanonicalDisabled(lang.code));
            }
            canonical = Some(index);
        }

        Ok(Self {
            languages,
            canonical: canonical.ok_or(RegistryError::NoCanonical)?,
        })
    }

    /// The registry over [`LANGUAGES`].
    ///
    /// # Panics
    /// Panics on first use if [`LANGUAGES`] is inconsistent.
    pub fn global() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| {
            Self::from_table(LANGUAGES)
                .unwrap_or_else(|e| panic!("Invalid language table: {}", e))
        })
    }

    pub fn find(&self, code: &str) -> Option<&'static LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Enabled languages, in selector order.
    pub fn enabled(&self) -> impl Iterator<Item = &'static LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled)
    }

    /// Every language, disabled ones included.
    pub fn all(&self) -> &'static [LanguageConfig] {
        self.languages
    }

    pub fn canonical(&self) -> &'static LanguageConfig {
        &self.languages[self.canonical]
    }
}
