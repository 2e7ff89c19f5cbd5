// crates/aidp-core/src/utils/hours.rs
// ============================================================================
// Module: Opening Hours Helpers
// Description: Free-text hours parsing and open-now checks.
// Purpose: Normalize human-written hours and test a local time against them.
// Dependencies: regex, time, crate::core::schedule
// ============================================================================

//! ## Overview
//! [`parse_business_hours`] accepts strings such as `9:00 AM - 5:00 PM`,
//! `09:00-17:00`, `0900 to 1730`, or `9am-5pm` and returns the first two time
//! tokens as zero-padded 24-hour `HH:MM` values. Hour and minute ranges are
//! not checked here; the validator rejects out-of-range clock values.
//!
//! [`is_business_open`] takes a caller-supplied local time. Time zone
//! resolution is the caller's job.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::schedule::WeeklyHours;

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Time token: hour, optional minutes, optional AM/PM suffix.
static TIME_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2}):?(\d{2})?\s*(AM|PM)?").ok());

/// Opening window parsed from free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningWindow {
    /// Opening time (`HH:MM`).
    pub open: String,
    /// Closing time (`HH:MM`).
    pub close: String,
}

/// Parses the first two time tokens of a free-text hours string.
///
/// Returns `None` when fewer than two time tokens are present.
#[must_use]
pub fn parse_business_hours(text: &str) -> Option<OpeningWindow> {
    let pattern = TIME_TOKEN.as_ref()?;
    let mut tokens = pattern.captures_iter(text).map(|captures| {
        let hours: u32 = captures.get(1).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
        let minutes: u32 = captures.get(2).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
        let period = captures.get(3).map(|m| m.as_str().to_ascii_uppercase());
        to_clock(hours, minutes, period.as_deref())
    });
    let open = tokens.next()?;
    let close = tokens.next()?;
    Some(OpeningWindow { open, close })
}

/// Converts a 12- or 24-hour token into `HH:MM`.
fn to_clock(hours: u32, minutes: u32, period: Option<&str>) -> String {
    let hours = match period {
        Some("PM") if hours != 12 => hours + 12,
        Some("AM") if hours == 12 => 0,
        _ => hours,
    };
    format!("{hours:02}:{minutes:02}")
}

// ============================================================================
// SECTION: Open-Now
// ============================================================================

/// Returns true when `at` falls inside the opening window for its weekday.
///
/// Days with no entry, days marked closed, and days missing either bound are
/// treated as closed. Bounds are inclusive and compared as `HH:MM` strings.
#[must_use]
pub fn is_business_open(hours: &WeeklyHours, at: OffsetDateTime) -> bool {
    let Some(day) = hours.day(at.weekday()) else {
        return false;
    };
    if day.closed {
        return false;
    }
    let (Some(open), Some(close)) = (day.open.as_deref(), day.close.as_deref()) else {
        return false;
    };
    let now = format!("{:02}:{:02}", at.hour(), at.minute());
    open <= now.as_str() && now.as_str() <= close
}
