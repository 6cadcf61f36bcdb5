//! Availability check.
//!
//! There is no booking calendar behind this: every well-formed range is
//! reported as available. The only decision made here is what to do with a
//! range whose end precedes its start, which is governed by [`DateRangePolicy`].

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

/// Format of date inputs and of dates shown in messages.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest default booking window accepted from configuration.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// A stay from `start` to `end`, both calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The range pre-filled in the date inputs: today to today + `window_days`.
    ///
    /// The end saturates at the last representable date.
    pub fn default_for(today: NaiveDate, window_days: u32) -> Self {
        Self {
            start: today,
            end: today
                .checked_add_days(Days::new(u64::from(window_days)))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }
}

/// How to treat a range whose end date precedes its start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRangePolicy {
    /// Refuse the check and show a warning.
    #[default]
    Reject,
    /// Report the range as available and show a warning next to it.
    AcceptWithWarning,
}

impl FromStr for DateRangePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(DateRangePolicy::Reject),
            "accept-with-warning" | "accept_with_warning" | "warn" => {
                Ok(DateRangePolicy::AcceptWithWarning)
            }
            other => Err(format!(
                "Invalid date range policy '{}'. Expected 'reject' or 'accept-with-warning'",
                other
            )),
        }
    }
}

impl fmt::Display for DateRangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangePolicy::Reject => f.write_str("reject"),
            DateRangePolicy::AcceptWithWarning => f.write_str("accept-with-warning"),
        }
    }
}

/// Which of the two date inputs a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::Start => f.write_str("start"),
            DateField::End => f.write_str("end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    #[error("end date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("{field} date '{value}' is not a valid YYYY-MM-DD date")]
    MalformedDate { field: DateField, value: String },
}

/// Result of an accepted availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailabilityOutcome {
    pub range: DateRange,
    /// Always true; nothing backs the check.
    pub available: bool,
    /// The range was accepted even though its end precedes its start.
    pub reversed: bool,
}

/// Run the availability check for `range`.
pub fn check_availability(
    range: DateRange,
    policy: DateRangePolicy,
) -> Result<AvailabilityOutcome, AvailabilityError> {
    if range.is_reversed() {
        match policy {
            DateRangePolicy::Reject => {
                warn!(
                    "Rejected availability check: {} is before {}",
                    range.end, range.start
                );
                return Err(AvailabilityError::InvalidDateRange {
                    start: range.start,
                    end: range.end,
                });
            }
            DateRangePolicy::AcceptWithWarning => {
                warn!(
                    "Accepting reversed range {} to {}",
                    range.start, range.end
                );
            }
        }
    }

    info!("Availability checked for {} to {}", range.start, range.end);

    Ok(AvailabilityOutcome {
        range,
        available: true,
        reversed: range.is_reversed(),
    })
}

/// Parse one date input. Blank input counts as absent.
pub fn parse_date_input(
    field: DateField,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, AvailabilityError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(|_| AvailabilityError::MalformedDate {
                field,
                value: value.to_string(),
            }),
    }
}
