// crates/aidp-core/src/core/entity.rs
// ============================================================================
// Module: Entity Kinds
// Description: Closed enumeration of validatable AIDP entities.
// Purpose: Key schema lookup, validator dispatch, and bundle file naming.
// Dependencies: serde
// ============================================================================

//! Entity kinds known to the schema set and the validator.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Validatable AIDP entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// [`crate::BusinessProfile`].
    BusinessProfile,
    /// [`crate::BookingRequest`].
    BookingRequest,
    /// [`crate::BookingResponse`].
    BookingResponse,
    /// [`crate::Review`].
    Review,
    /// [`crate::UpstreamMetrics`].
    UpstreamMetrics,
    /// [`crate::IntentJourney`].
    IntentJourney,
}

impl EntityKind {
    /// Returns the `snake_case` entity name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BusinessProfile => "business_profile",
            Self::BookingRequest => "booking_request",
            Self::BookingResponse => "booking_response",
            Self::Review => "review",
            Self::UpstreamMetrics => "upstream_metrics",
            Self::IntentJourney => "intent_journey",
        }
    }

    /// Returns the kebab-case slug used in schema `$id` URLs and file names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::BusinessProfile => "business-profile",
            Self::BookingRequest => "booking-request",
            Self::BookingResponse => "booking-response",
            Self::Review => "review",
            Self::UpstreamMetrics => "upstream-metrics",
            Self::IntentJourney => "intent-journey",
        }
    }

    /// Returns the schema document file name (`<slug>.schema.json`).
    #[must_use]
    pub fn schema_file_name(self) -> String {
        format!("{}.schema.json", self.slug())
    }

    /// Returns every entity kind in canonical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::BusinessProfile,
            Self::BookingRequest,
            Self::BookingResponse,
            Self::Review,
            Self::UpstreamMetrics,
            Self::IntentJourney,
        ]
    }

    /// Parses a `snake_case` or kebab-case entity name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.as_str() == value || kind.slug() == value)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
