//! Validated language handle.
//!
//! A `Language` only exists for codes found and enabled in the registry, so
//! holding one guarantees a string table exists for it.

use super::{I18nError, LanguageConfig, LanguageRegistry};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const SPANISH: Language = Language { code: "es" };
    pub const CATALAN: Language = Language { code: "ca" };

    /// Look up `code` in the registry. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        let config = LanguageRegistry::global()
            .find(code)
            .ok_or_else(|| I18nError::UnknownLanguage(code.to_string()))?;

        if !config.enabled {
            return Err(I18nError::DisabledLanguage(code.to_string()));
        }

        Ok(Self::from(config))
    }

    pub fn canonical() -> Language {
        Self::from(LanguageRegistry::global().canonical())
    }

    /// Enabled languages, in selector order.
    pub fn enabled() -> Vec<Language> {
        LanguageRegistry::global().enabled().map(Self::from).collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Registry entry for this language.
    ///
    /// # Panics
    /// Panics if a `Language` constant names a code missing from `LANGUAGES`.
    pub fn config(&self) -> &'static LanguageConfig {
        match LanguageRegistry::global().find(self.code) {
            Some(config) => config,
            None => panic!("'{}' is not in the language table", self.code),
        }
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl From<&'static LanguageConfig> for Language {
    fn from(config: &'static LanguageConfig) -> Self {
        Language { code: config.code }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
