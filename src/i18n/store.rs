//! Translation store: resolves (language, key) pairs to display text.
//!
//! Lookups go to the requested language's table first. What happens when the
//! key is absent there is decided by the [`MissingTranslationPolicy`].

use super::{strings, I18nError, Language, TranslationKey, TranslationMetrics, TranslationValue};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// What to do when the requested language has no entry for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTranslationPolicy {
    /// Resolve from the fallback language and log the substitution.
    #[default]
    Fallback,
    /// Return `I18nError::MissingTranslation` naming the key and language.
    FailFast,
}

impl FromStr for MissingTranslationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(MissingTranslationPolicy::Fallback),
            "fail-fast" | "fail_fast" | "failfast" => Ok(MissingTranslationPolicy::FailFast),
            other => Err(format!(
                "Invalid missing translation policy '{}'. Expected 'fallback' or 'fail-fast'",
                other
            )),
        }
    }
}

impl fmt::Display for MissingTranslationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingTranslationPolicy::Fallback => f.write_str("fallback"),
            MissingTranslationPolicy::FailFast => f.write_str("fail-fast"),
        }
    }
}

/// Pure lookup over the registered string tables.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    policy: MissingTranslationPolicy,
    fallback: Language,
    metrics: &'static TranslationMetrics,
}

impl TranslationStore {
    pub fn new(policy: MissingTranslationPolicy, fallback: Language) -> Self {
        Self {
            policy,
            fallback,
            metrics: TranslationMetrics::global(),
        }
    }

    /// Record resolutions into `metrics` instead of the global counters.
    pub fn with_metrics(mut self, metrics: &'static TranslationMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn policy(&self) -> MissingTranslationPolicy {
        self.policy
    }

    pub fn fallback_language(&self) -> Language {
        self.fallback
    }

    /// Resolve `key` for `language` under the configured policy.
    pub fn resolve(
        &self,
        language: Language,
        key: TranslationKey,
    ) -> Result<&'static TranslationValue, I18nError> {
        if let Some(value) = strings::lookup(language.config().strings, key) {
            self.metrics.record_direct_hit();
            return Ok(value);
        }

        if self.policy == MissingTranslationPolicy::Fallback && language != self.fallback {
            if let Some(value) = strings::lookup(self.fallback.config().strings, key) {
                warn!(
                    "Translation '{}' missing for '{}', falling back to '{}'",
                    key, language, self.fallback
                );
                self.metrics.record_fallback();
                return Ok(value);
            }
        }

        self.metrics.record_miss();
        Err(I18nError::MissingTranslation {
            key,
            language: language.code(),
        })
    }

    /// Resolve a key that must hold a single string.
    pub fn text(&self, language: Language, key: TranslationKey) -> Result<&'static str, I18nError> {
        self.resolve(language, key)?
            .as_text()
            .ok_or(I18nError::UnexpectedShape {
                key,
                expected: "text",
            })
    }

    /// Resolve a key that must hold a list of strings.
    pub fn list(
        &self,
        language: Language,
        key: TranslationKey,
    ) -> Result<&'static [&'static str], I18nError> {
        self.resolve(language, key)?
            .as_list()
            .ok_or(I18nError::UnexpectedShape {
                key,
                expected: "list",
            })
    }

    /// Resolve a template and fill in its `{name}` placeholders.
    pub fn format(
        &self,
        language: Language,
        key: TranslationKey,
        args: &[(&str, &str)],
    ) -> Result<String, I18nError> {
        let template = self.text(language, key)?;
        Ok(interpolate(template, args))
    }

    /// Resolve every key for `language`.
    ///
    /// Returns the resolved entries in catalogue order along with the keys
    /// that could not be resolved under the current policy.
    pub fn resolve_all(
        &self,
        language: Language,
    ) -> (
        Vec<(TranslationKey, &'static TranslationValue)>,
        Vec<TranslationKey>,
    ) {
        let mut resolved = Vec::new();
        let mut missing = Vec::new();

        for key in TranslationKey::ALL {
            match self.resolve(language, key) {
                Ok(value) => resolved.push((key, value)),
                Err(_) => missing.push(key),
            }
        }

        (resolved, missing)
    }
}

impl Default for TranslationStore {
    fn default() -> Self {
        Self::new(MissingTranslationPolicy::default(), Language::canonical())
    }
}

/// Replace each `{name}` in `template` with its value from `args`.
///
/// Placeholders without a matching argument are left untouched.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}
