// crates/aidp-core/src/tooling.rs
// ============================================================================
// Module: Tool Names
// Description: Canonical assistant tool names and their categories.
// Purpose: Shared identifiers for the tool descriptor registry.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Tool names are the stable handles an assistant runtime uses to call AIDP
//! operations. Ordering of [`ToolName::all`] is the canonical listing order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Tool Names
// ============================================================================

/// Canonical AIDP tool names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    /// Search businesses by query and location.
    SearchBusinesses,
    /// Fetch a full business profile.
    GetBusinessDetails,
    /// List open slots for a date.
    CheckAvailability,
    /// Create a booking.
    CreateBooking,
    /// Fetch an existing booking.
    GetBooking,
    /// Fetch reviews for a business.
    GetReviews,
    /// Compare several businesses side by side.
    CompareBusinesses,
    /// Submit a customer lead.
    SubmitLead,
}

impl ToolName {
    /// Returns the wire name of the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchBusinesses => "search_businesses",
            Self::GetBusinessDetails => "get_business_details",
            Self::CheckAvailability => "check_availability",
            Self::CreateBooking => "create_booking",
            Self::GetBooking => "get_booking",
            Self::GetReviews => "get_reviews",
            Self::CompareBusinesses => "compare_businesses",
            Self::SubmitLead => "submit_lead",
        }
    }

    /// Returns the category the tool is listed under.
    #[must_use]
    pub const fn category(self) -> ToolCategory {
        match self {
            Self::SearchBusinesses | Self::GetBusinessDetails => ToolCategory::Discovery,
            Self::CheckAvailability | Self::CreateBooking | Self::GetBooking => {
                ToolCategory::Booking
            }
            Self::GetReviews | Self::CompareBusinesses => ToolCategory::Social,
            Self::SubmitLead => ToolCategory::Lead,
        }
    }

    /// Returns every tool in canonical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SearchBusinesses,
            Self::GetBusinessDetails,
            Self::CheckAvailability,
            Self::CreateBooking,
            Self::GetBooking,
            Self::GetReviews,
            Self::CompareBusinesses,
            Self::SubmitLead,
        ]
    }

    /// Parses a tool name from its wire form.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|tool| tool.as_str() == value)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Categories
// ============================================================================

/// Tool grouping used for category lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    /// Finding businesses and their details.
    Discovery,
    /// Availability and reservations.
    Booking,
    /// Reviews and comparisons.
    Social,
    /// Lead capture.
    Lead,
}

impl ToolCategory {
    /// Returns the wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Booking => "booking",
            Self::Social => "social",
            Self::Lead => "lead",
        }
    }

    /// Returns every category in canonical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Discovery, Self::Booking, Self::Social, Self::Lead]
    }

    /// Returns the tools in this category, in canonical order.
    #[must_use]
    pub fn tools(self) -> Vec<ToolName> {
        ToolName::all().iter().copied().filter(|tool| tool.category() == self).collect()
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
