// crates/aidp-core/src/core/identifiers.rs
// ============================================================================
// Module: AIDP Identifiers
// Description: Canonical opaque identifiers for AIDP entities.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde, sha2
// ============================================================================

//! ## Overview
//! This module defines the string-based identifiers used throughout AIDP.
//! Identifiers are opaque and serialize as strings. Only [`BusinessId`] carries
//! a namespace convention (`biz_` prefix); format enforcement happens at the
//! validation boundary rather than inside these wrappers so that invalid wire
//! data can still be deserialized and reported field by field.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::hashing::HashAlgorithm;
use crate::core::hashing::hash_bytes;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Namespace prefix for business identifiers.
pub const BUSINESS_ID_PREFIX: &str = "biz_";

/// Minimum number of alphanumeric characters after the business prefix.
pub const BUSINESS_ID_MIN_SUFFIX_LEN: usize = 16;

// ============================================================================
// SECTION: Business Identifier
// ============================================================================

/// Business identifier (`biz_` followed by at least 16 alphanumerics).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(String);

impl BusinessId {
    /// Creates a new business identifier without validating its format.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derives a deterministic business identifier from an external listing.
    ///
    /// The suffix is the first 24 hex characters of
    /// `sha256("<source>:<external_id>")`, so re-importing the same listing
    /// always yields the same identifier.
    #[must_use]
    pub fn derive(source: &str, external_id: &str) -> Self {
        let mut material = String::with_capacity(source.len() + external_id.len() + 1);
        material.push_str(source);
        material.push(':');
        material.push_str(external_id);
        let digest = hash_bytes(HashAlgorithm::Sha256, material.as_bytes());
        Self(format!("{BUSINESS_ID_PREFIX}{}", digest.hex_prefix(24)))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the identifier carries the `biz_` namespace prefix.
    #[must_use]
    pub fn has_namespace_prefix(&self) -> bool {
        self.0.starts_with(BUSINESS_ID_PREFIX)
    }

    /// Returns true when the identifier matches `^biz_[a-zA-Z0-9]{16,}$`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.strip_prefix(BUSINESS_ID_PREFIX).is_some_and(|suffix| {
            suffix.len() >= BUSINESS_ID_MIN_SUFFIX_LEN
                && suffix.chars().all(|ch| ch.is_ascii_alphanumeric())
        })
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for BusinessId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BusinessId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Opaque Identifiers
// ============================================================================

/// Service identifier scoped to a business profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    /// Creates a new service identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ServiceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Booking identifier assigned by the business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Creates a new booking identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for BookingId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Review identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(String);

impl ReviewId {
    /// Creates a new review identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ReviewId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Conversational intent journey identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JourneyId(String);

impl JourneyId {
    /// Creates a new journey identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JourneyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for JourneyId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
