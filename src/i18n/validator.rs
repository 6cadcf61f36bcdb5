//! Translation table validation.
//!
//! Compares every language's string table against the canonical table: keys
//! the canonical table lacks, empty values, shape mismatches, and templates
//! whose `{placeholder}` set differs from the canonical template.

use super::{strings, Language, TranslationKey, TranslationValue};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a string table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that break rendering or produce wrong text
    pub errors: Vec<String>,

    /// Gaps covered only by the fallback language
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for string table completeness and consistency.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate one language's table against the canonical table.
    pub fn validate(language: Language) -> ValidationReport {
        let canonical = Language::canonical();
        let mut report = ValidationReport::new();

        for key in TranslationKey::ALL {
            let reference = strings::lookup(canonical.config().strings, key);
            let value = strings::lookup(language.config().strings, key);

            match (reference, value) {
                (None, _) => report.errors.push(format!(
                    "Canonical language '{}' has no entry for '{}'",
                    canonical, key
                )),
                (Some(_), None) => report.warnings.push(format!(
                    "'{}' has no entry for '{}' (covered by fallback only)",
                    language, key
                )),
                (Some(reference), Some(value)) => {
                    Self::compare(language, key, reference, value, &mut report)
                }
            }
        }

        report
    }

    /// Validate every registered language, canonical first.
    pub fn validate_all() -> Vec<(Language, ValidationReport)> {
        Language::enabled()
            .into_iter()
            .map(|language| (language, Self::validate(language)))
            .collect()
    }

    fn compare(
        language: Language,
        key: TranslationKey,
        reference: &TranslationValue,
        value: &TranslationValue,
        report: &mut ValidationReport,
    ) {
        if value.is_empty() {
            report
                .errors
                .push(format!("'{}' has an empty value for '{}'", language, key));
        }

        match (reference, value) {
            (TranslationValue::Text(reference), TranslationValue::Text(text)) => {
                let expected = Self::extract_placeholders(reference);
                let found = Self::extract_placeholders(text);
                if expected != found {
                    report.errors.push(format!(
                        "Placeholder mismatch in '{}' for '{}': expected {:?}, found {:?}",
                        key, language, expected, found
                    ));
                }
            }
            (TranslationValue::List(_), TranslationValue::List(_)) => {}
            _ => report.errors.push(format!(
                "'{}' for '{}' is a {}, expected a {}",
                key,
                language,
                value.shape(),
                reference.shape()
            )),
        }
    }

    /// Extract the set of `{placeholder}` names used in a template.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder regex is valid"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
