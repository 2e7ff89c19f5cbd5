// crates/aidp-core/src/utils/analytics.rs
// ============================================================================
// Module: Analytics Helpers
// Description: Share-of-voice and intent trend computations.
// Purpose: Derive summary figures from upstream metrics and intent journeys.
// Dependencies: serde, crate::core::analytics
// ============================================================================

//! ## Overview
//! Trend classification splits the intent scores into two halves and compares
//! their means. A shift of more than 10 points either way is a directional
//! trend; otherwise the mean absolute step between consecutive turns decides
//! between `volatile` (> 20) and `stable`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::analytics::IntentJourney;
use crate::core::analytics::UpstreamMetrics;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Half-over-half mean shift that counts as a directional trend.
const TREND_SHIFT_THRESHOLD: f64 = 10.0;

/// Mean absolute step above which a flat journey is volatile.
const VOLATILITY_THRESHOLD: f64 = 20.0;

// ============================================================================
// SECTION: Share of Voice
// ============================================================================

/// Returns the business's share of all citations, as a percentage.
///
/// Returns `0.0` when neither the business nor any competitor was cited.
#[must_use]
pub fn calculate_share_of_voice(business: &UpstreamMetrics, competitors: &[UpstreamMetrics]) -> f64 {
    let own = business.citations.total;
    let total = competitors
        .iter()
        .fold(own, |sum, competitor| sum.saturating_add(competitor.citations.total));
    if total == 0 {
        return 0.0;
    }
    to_f64(own) / to_f64(total) * 100.0
}

// ============================================================================
// SECTION: Intent Progression
// ============================================================================

/// Direction of intent across a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentTrend {
    /// Second half clearly higher than the first.
    Increasing,
    /// Second half clearly lower than the first.
    Decreasing,
    /// No clear direction but large swings.
    Volatile,
    /// No clear direction.
    Stable,
}

impl IntentTrend {
    /// Returns the wire name of the trend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Volatile => "volatile",
            Self::Stable => "stable",
        }
    }
}

/// Result of [`analyze_intent_progression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentAnalysis {
    /// Declared journey pattern, or the trend label when none was declared.
    pub pattern: String,
    /// Estimated conversion probability in [0, 1].
    pub conversion_probability: f64,
    /// Classified trend.
    pub trend: IntentTrend,
}

/// Classifies a journey's intent trend and estimates conversion probability.
#[must_use]
pub fn analyze_intent_progression(journey: &IntentJourney) -> IntentAnalysis {
    let scores: Vec<f64> = journey.turns.iter().map(|turn| turn.intent_score).collect();
    let trend = classify(&scores);
    let final_score = scores.last().copied().unwrap_or(0.0) / 100.0;
    let conversion_probability = match trend {
        IntentTrend::Increasing => (final_score * 1.2).min(0.9),
        IntentTrend::Stable => final_score,
        IntentTrend::Volatile => (final_score * 0.7).max(0.1),
        IntentTrend::Decreasing => (final_score * 0.5).max(0.05),
    };
    let pattern = journey
        .pattern
        .map_or_else(|| trend.as_str().to_string(), |pattern| pattern.as_str().to_string());
    IntentAnalysis {
        pattern,
        conversion_probability,
        trend,
    }
}

/// Classifies a score sequence; fewer than two scores is `Stable`.
fn classify(scores: &[f64]) -> IntentTrend {
    if scores.len() < 2 {
        return IntentTrend::Stable;
    }
    let (first, second) = scores.split_at(scores.len() / 2);
    let shift = mean(second) - mean(first);
    if shift > TREND_SHIFT_THRESHOLD {
        return IntentTrend::Increasing;
    }
    if shift < -TREND_SHIFT_THRESHOLD {
        return IntentTrend::Decreasing;
    }
    let steps: Vec<f64> = scores.windows(2).map(|pair| (pair[1] - pair[0]).abs()).collect();
    if mean(&steps) > VOLATILITY_THRESHOLD { IntentTrend::Volatile } else { IntentTrend::Stable }
}

/// Arithmetic mean; callers never pass an empty slice.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / to_f64(values.len() as u64)
}

/// Lossy widening used for percentages.
#[allow(clippy::cast_precision_loss, reason = "Counters far below 2^53 in practice.")]
const fn to_f64(value: u64) -> f64 {
    value as f64
}
