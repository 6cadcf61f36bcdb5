use crate::availability::{DateRangePolicy, MAX_WINDOW_DAYS};
use crate::i18n::{Language, MissingTranslationPolicy};
use anyhow::{anyhow, bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub port: u16,

    // Languages
    pub default_language: Language,
    pub fallback_language: Language,
    pub missing_translation_policy: MissingTranslationPolicy,

    // Availability
    pub date_range_policy: DateRangePolicy,
    pub availability_window_days: u32,

    // Contact
    pub contact_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let availability_window_days = parse_var("AVAILABILITY_WINDOW_DAYS", 7)?;
        if availability_window_days > MAX_WINDOW_DAYS {
            bail!(
                "AVAILABILITY_WINDOW_DAYS must be at most {}, got {}",
                MAX_WINDOW_DAYS,
                availability_window_days
            );
        }

        Ok(Self {
            // Server
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8080)?,

            // Languages
            default_language: language_var("DEFAULT_LANGUAGE")?,
            fallback_language: language_var("FALLBACK_LANGUAGE")?,
            missing_translation_policy: match std::env::var("MISSING_TRANSLATION_POLICY") {
                Ok(value) => value
                    .parse::<MissingTranslationPolicy>()
                    .map_err(|e: String| anyhow!(e))
                    .context("MISSING_TRANSLATION_POLICY is invalid")?,
                Err(_) => MissingTranslationPolicy::default(),
            },

            // Availability
            date_range_policy: match std::env::var("DATE_RANGE_POLICY") {
                Ok(value) => value
                    .parse::<DateRangePolicy>()
                    .map_err(|e: String| anyhow!(e))
                    .context("DATE_RANGE_POLICY is invalid")?,
                Err(_) => DateRangePolicy::default(),
            },
            availability_window_days,

            // Contact
            contact_email: std::env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "bookings@canribot.example".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            default_language: Language::canonical(),
            fallback_language: Language::canonical(),
            missing_translation_policy: MissingTranslationPolicy::default(),
            date_range_policy: DateRangePolicy::default(),
            availability_window_days: 7,
            contact_email: "bookings@canribot.example".to_string(),
        }
    }
}

/// Read a numeric variable, using `default` when it is unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

/// Read a language code variable, using the canonical language when it is unset.
fn language_var(name: &str) -> Result<Language> {
    match std::env::var(name) {
        Ok(code) => Language::from_code(code.trim()).with_context(|| format!("{} is invalid", name)),
        Err(_) => Ok(Language::canonical()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "BIND_ADDRESS",
        "PORT",
        "DEFAULT_LANGUAGE",
        "FALLBACK_LANGUAGE",
        "MISSING_TRANSLATION_POLICY",
        "DATE_RANGE_POLICY",
        "AVAILABILITY_WINDOW_DAYS",
        "CONTACT_EMAIL",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.default_language, Language::ENGLISH);
        assert_eq!(config.fallback_language, Language::ENGLISH);
        assert_eq!(
            config.missing_translation_policy,
            MissingTranslationPolicy::Fallback
        );
        assert_eq!(config.date_range_policy, DateRangePolicy::Reject);
        assert_eq!(config.availability_window_days, 7);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("DEFAULT_LANGUAGE", "ca");
        std::env::set_var("MISSING_TRANSLATION_POLICY", "fail-fast");
        std::env::set_var("DATE_RANGE_POLICY", "accept-with-warning");
        std::env::set_var("AVAILABILITY_WINDOW_DAYS", "14");
        std::env::set_var("CONTACT_EMAIL", "host@example.com");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.default_language, Language::CATALAN);
        assert_eq!(
            config.missing_translation_policy,
            MissingTranslationPolicy::FailFast
        );
        assert_eq!(config.date_range_policy, DateRangePolicy::AcceptWithWarning);
        assert_eq!(config.availability_window_days, 14);
        assert_eq!(config.contact_email, "host@example.com");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("PORT"));
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_language() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "fr");

        let result = Config::from_env();
        clear_env();

        assert!(format!("{:#}", result.unwrap_err()).contains("DEFAULT_LANGUAGE"));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_policy() {
        clear_env();
        std::env::set_var("MISSING_TRANSLATION_POLICY", "guess");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_window_out_of_range() {
        clear_env();
        std::env::set_var("AVAILABILITY_WINDOW_DAYS", "4000000000");

        let result = Config::from_env();
        clear_env();

        assert!(format!("{:#}", result.unwrap_err()).contains("AVAILABILITY_WINDOW_DAYS"));
    }

    #[test]
    #[serial]
    fn test_from_env_window_upper_bound_accepted() {
        clear_env();
        std::env::set_var("AVAILABILITY_WINDOW_DAYS", "365");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.availability_window_days, 365);
    }

    #[test]
    fn test_default_matches_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.availability_window_days, 7);
        assert_eq!(config.default_language, Language::canonical());
    }
}
