// crates/aidp-core/src/core/review.rs
// ============================================================================
// Module: Review Model
// Description: Customer reviews and business replies.
// Purpose: Typed shape for the review entity.
// Dependencies: serde, crate::core::identifiers
// ============================================================================

//! Review entity.

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::BusinessId;
use crate::core::identifiers::ReviewId;

/// Customer review of a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review identifier, absent on submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReviewId>,
    /// Reviewed business.
    pub business_id: BusinessId,
    /// Star rating (1..=5).
    #[serde(deserialize_with = "crate::core::integral::deserialize")]
    pub rating: u8,
    /// Optional headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Review body.
    pub content: String,
    /// Review author.
    pub author: ReviewAuthor,
    /// RFC 3339 review date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Verified purchase or visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Helpful votes.
    #[serde(
        default,
        deserialize_with = "crate::core::integral::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub helpful: Option<u32>,
    /// Reply posted by the business.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_response: Option<BusinessResponse>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Photo URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
}

/// Review author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    /// Display name.
    pub name: String,
    /// Verified reviewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Number of reviews written by the author.
    #[serde(
        default,
        deserialize_with = "crate::core::integral::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub review_count: Option<u32>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Business reply to a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessResponse {
    /// Reply text.
    pub text: String,
    /// Reply date.
    pub date: String,
    /// Name or role of the responder.
    pub responder: String,
}
