//! Errors raised while resolving localized text.

use super::TranslationKey;
use thiserror::Error;

/// Failure to turn a (language, key) pair into display text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The key has no entry for the language and the policy does not allow a fallback.
    #[error("missing translation for key '{key}' in language '{language}'")]
    MissingTranslation {
        key: TranslationKey,
        language: &'static str,
    },

    /// The entry exists but has the wrong shape (text where a list was expected, or vice versa).
    #[error("translation '{key}' is not a {expected}")]
    UnexpectedShape {
        key: TranslationKey,
        expected: &'static str,
    },

    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Language '{0}' is not enabled")]
    DisabledLanguage(String),
}

/// A language table that cannot back the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no canonical language in table")]
    NoCanonical,

    #[error("both '{0}' and '{1}' are marked canonical")]
    MultipleCanonical(&'static str, &'static str),

    #[error("canonical language '{0}' is disabled")]
    CanonicalDisabled(&'static str),

    #[error("language code '{0}' appears more than once")]
    DuplicateCode(&'static str),
}
