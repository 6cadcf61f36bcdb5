//! Translation check binary - validates every language table against English
//!
//! Usage:
//!   cargo run --bin check-translations
//!
//! Exits with a non-zero status when any table has errors. Missing entries in
//! non-English tables are reported as warnings only, since they are covered by
//! the fallback language.

use anyhow::{bail, Result};
use can_ribot::i18n::TranslationValidator;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_translations=info".parse()?),
        )
        .init();

    let mut error_count = 0;

    for (language, report) in TranslationValidator::validate_all() {
        if report.is_clean() {
            info!("✓ {} ({}): clean", language.name(), language);
            continue;
        }

        for warning in &report.warnings {
            warn!("{}: {}", language, warning);
        }
        for error in &report.errors {
            println!("✗ {}: {}", language, error);
        }

        info!(
            "{} ({}): {} error(s), {} warning(s)",
            language.name(),
            language,
            report.errors.len(),
            report.warnings.len()
        );
        error_count += report.errors.len();
    }

    if error_count > 0 {
        bail!("{} translation error(s) found", error_count);
    }

    info!("All translation tables are consistent");
    Ok(())
}
