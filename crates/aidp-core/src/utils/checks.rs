// crates/aidp-core/src/utils/checks.rs
// ============================================================================
// Module: Field Checks
// Description: Stand-alone predicates for coordinates, contact fields, and times.
// Purpose: Quick client-side checks that do not need a compiled validator.
// Dependencies: regex, url
// ============================================================================

//! ## Overview
//! Predicates usable without a compiled validator. Patterns are compiled
//! once on first use; a pattern that fails to compile makes its predicate
//! return `false`.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Phone numbers: optional `+`, then at least ten digits, spaces, dashes, or parens.
static PHONE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").ok());

/// Loose `local@domain.tld` email shape.
static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Returns true when `lat` is in [-90, 90] and `lon` in [-180, 180].
#[must_use]
pub fn is_valid_coordinates(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Returns true for phone-number-like strings.
#[must_use]
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE.as_ref().is_some_and(|pattern| pattern.is_match(phone))
}

/// Returns true for `local@domain.tld` shaped strings.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|pattern| pattern.is_match(email))
}

/// Returns true for absolute URLs.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Returns true for zero-padded 24-hour `HH:MM` clock values.
#[must_use]
pub fn is_valid_clock_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    let [h1, h2, b':', m1, m2] = bytes else {
        return false;
    };
    if ![h1, h2, m1, m2].iter().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    let hours = (h1 - b'0') * 10 + (h2 - b'0');
    let minutes = (m1 - b'0') * 10 + (m2 - b'0');
    hours < 24 && minutes < 60
}
