//! Translation resolution metrics.
//!
//! Counts how text lookups were satisfied: directly from the requested
//! language, through the fallback language, or not at all.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Resolution counters. One global instance serves the running site.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Lookups answered by the requested language's own table
    direct_hits: AtomicUsize,

    /// Lookups answered by the fallback language
    fallbacks: AtomicUsize,

    /// Lookups that could not be answered
    misses: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    pub fn record_direct_hit(&self) {
        self.direct_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn direct_hits(&self) -> usize {
        self.direct_hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let direct_hits = self.direct_hits();
        let fallbacks = self.fallbacks();
        let misses = self.misses();
        let lookups = direct_hits + fallbacks + misses;

        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            direct_hits,
            fallbacks,
            misses,
            fallback_rate,
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.direct_hits.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the resolution counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total number of lookups
    pub lookups: usize,

    pub direct_hits: usize,

    pub fallbacks: usize,

    pub misses: usize,

    /// Share of lookups answered by the fallback language, as a percentage (0-100)
    pub fallback_rate: f64,
}
