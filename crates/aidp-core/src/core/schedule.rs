// crates/aidp-core/src/core/schedule.rs
// ============================================================================
// Module: Weekly Hours
// Description: Per-weekday opening hours keyed by lowercase day name.
// Purpose: Shared shape for profile availability and open-now checks.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Opening and closing times are `HH:MM` strings. They are compared as
//! strings, which is correct for zero-padded 24-hour values; the validator
//! rejects anything else.

use serde::Deserialize;
use serde::Serialize;
use time::Weekday;

/// Opening hours for each day of the week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    /// Monday hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<DayHours>,
    /// Tuesday hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<DayHours>,
    /// Wednesday hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<DayHours>,
    /// Thursday hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<DayHours>,
    /// Friday hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<DayHours>,
    /// Saturday hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<DayHours>,
    /// Sunday hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<DayHours>,
}

impl WeeklyHours {
    /// Returns the hours configured for a weekday.
    #[must_use]
    pub const fn day(&self, weekday: Weekday) -> Option<&DayHours> {
        match weekday {
            Weekday::Monday => self.monday.as_ref(),
            Weekday::Tuesday => self.tuesday.as_ref(),
            Weekday::Wednesday => self.wednesday.as_ref(),
            Weekday::Thursday => self.thursday.as_ref(),
            Weekday::Friday => self.friday.as_ref(),
            Weekday::Saturday => self.saturday.as_ref(),
            Weekday::Sunday => self.sunday.as_ref(),
        }
    }

    /// Iterates configured days from Monday to Sunday.
    pub fn entries(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        WEEK.iter().filter_map(|weekday| self.day(*weekday).map(|hours| (*weekday, hours)))
    }
}

/// Monday-first week order used for iteration and reporting.
const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Opening hours for a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Opening time (`HH:MM`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    /// Closing time (`HH:MM`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
    /// Closed all day.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub closed: bool,
}

impl DayHours {
    /// Creates an open day with the given `HH:MM` bounds.
    #[must_use]
    pub fn open_between(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: Some(open.into()),
            close: Some(close.into()),
            closed: false,
        }
    }
}

/// Returns the lowercase wire key for a weekday (`monday`, ...).
#[must_use]
pub const fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "monday",
        Weekday::Tuesday => "tuesday",
        Weekday::Wednesday => "wednesday",
        Weekday::Thursday => "thursday",
        Weekday::Friday => "friday",
        Weekday::Saturday => "saturday",
        Weekday::Sunday => "sunday",
    }
}
