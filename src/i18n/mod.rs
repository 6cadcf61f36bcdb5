//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `registry`: The language table, checked once when first used
//! - `language`: Validated `Language` type
//! - `keys`: Closed set of translation keys and the value shapes they map to
//! - `strings`: Per-language string tables (English complete, others partial)
//! - `store`: Lookup with a configurable missing-translation policy
//! - `validator`: Table completeness and placeholder checks
//! - `metrics`: Resolution counters
//!
//! # Example
//!
//! ```rust,ignore
//! use can_ribot::i18n::{Language, MissingTranslationPolicy, TranslationKey, TranslationStore};
//!
//! let store = TranslationStore::new(MissingTranslationPolicy::Fallback, Language::canonical());
//! let label = store.text(Language::from_code("ca")?, TranslationKey::Gallery)?;
//! ```

mod error;
mod keys;
mod language;
mod metrics;
mod registry;
mod store;
mod strings;
mod validator;

pub use error::{I18nError, RegistryError};
pub use keys::{TranslationKey, TranslationValue};
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry, LANGUAGES};
pub use store::{interpolate, MissingTranslationPolicy, TranslationStore};
pub use validator::{TranslationValidator, ValidationReport};
