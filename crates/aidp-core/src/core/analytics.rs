// crates/aidp-core/src/core/analytics.rs
// ============================================================================
// Module: Analytics Model
// Description: Upstream visibility metrics and conversational intent journeys.
// Purpose: Typed shapes for the analytics entities reported to businesses.
// Dependencies: serde, crate::core::identifiers
// ============================================================================

//! ## Overview
//! "Upstream" metrics measure how often a business surfaces inside assistant
//! answers before any click happens: impressions, citations, and zero-click
//! answers. An intent journey records how a user's purchase intent evolved
//! across the turns of one conversation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::BusinessId;
use crate::core::identifiers::JourneyId;

// ============================================================================
// SECTION: Upstream Metrics
// ============================================================================

/// Visibility metrics for one business over a time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamMetrics {
    /// Answer impressions.
    pub impressions: ImpressionMetrics,
    /// Citations in assistant answers.
    pub citations: CitationMetrics,
    /// Answers that resolved the query without a click.
    pub zero_click: ZeroClickMetrics,
    /// Reporting window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

/// Impression counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpressionMetrics {
    /// Total impressions.
    #[serde(deserialize_with = "crate::core::integral::deserialize")]
    pub total: u64,
    /// Percentage change against the previous window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<f64>,
    /// Impressions per assistant platform.
    #[serde(
        default,
        deserialize_with = "crate::core::integral::map",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub by_platform: BTreeMap<String, u64>,
}

/// Citation counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationMetrics {
    /// Total citations.
    #[serde(deserialize_with = "crate::core::integral::deserialize")]
    pub total: u64,
    /// Percentage change against the previous window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<f64>,
    /// Citations by answer position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<CitationPlacement>,
}

/// Citation counts by answer position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationPlacement {
    /// First-mentioned.
    #[serde(deserialize_with = "crate::core::integral::deserialize")]
    pub primary: u64,
    /// Second-mentioned.
    #[serde(deserialize_with = "crate::core::integral::deserialize")]
    pub secondary: u64,
    /// Mentioned later.
    #[serde(deserialize_with = "crate::core::integral::deserialize")]
    pub tertiary: u64,
}

/// Zero-click counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeroClickMetrics {
    /// Total zero-click answers.
    #[serde(deserialize_with = "crate::core::integral::deserialize")]
    pub total: u64,
    /// Visibility percentage in [0, 100].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    /// Share of voice percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_of_voice: Option<f64>,
}

/// Reporting window bounds (RFC 3339).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Window start.
    pub start: String,
    /// Window end.
    pub end: String,
}

// ============================================================================
// SECTION: Intent Journeys
// ============================================================================

/// Intent trajectory across one conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentJourney {
    /// Journey identifier.
    pub id: JourneyId,
    /// Business the journey concerns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<BusinessId>,
    /// Declared pattern label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<JourneyPattern>,
    /// Conversion probability in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_probability: Option<f64>,
    /// Conversation turns in order.
    pub turns: Vec<IntentTurn>,
    /// Journey outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<JourneyOutcome>,
    /// RFC 3339 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Single conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentTurn {
    /// One-based turn index.
    #[serde(deserialize_with = "crate::core::integral::deserialize")]
    pub turn: u32,
    /// Intent score in [0, 100].
    pub intent_score: f64,
    /// User query text.
    pub query: String,
    /// Action taken by the assistant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// RFC 3339 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Declared journey shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyPattern {
    /// Intent rises turn over turn.
    SteadilyIncreasing,
    /// Sudden jump in intent.
    SpikePattern,
    /// Intent swings up and down.
    VolatilePattern,
    /// Intent falls off.
    DecreasingPattern,
}

impl JourneyPattern {
    /// Returns the wire name of the pattern.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SteadilyIncreasing => "steadily_increasing",
            Self::SpikePattern => "spike_pattern",
            Self::VolatilePattern => "volatile_pattern",
            Self::DecreasingPattern => "decreasing_pattern",
        }
    }
}

/// Journey outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyOutcome {
    /// The user converted.
    Conversion,
    /// The user left.
    Abandonment,
    /// Still in progress.
    Ongoing,
}
