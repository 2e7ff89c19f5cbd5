// crates/aidp-core/src/core/profile.rs
// ============================================================================
// Module: Business Profile Model
// Description: Typed business profile, location, contact, and service shapes.
// Purpose: Canonical in-memory form of the AIDP business profile entity.
// Dependencies: serde, crate::core::{identifiers, schedule}
// ============================================================================

//! ## Overview
//! A business profile is the central AIDP entity. These types mirror the wire
//! format (camelCase JSON keys) one-to-one. Range and cross-field constraints
//! such as coordinate bounds and pricing completeness are *not* enforced by the
//! types; the validator reports them as field errors instead so that a single
//! pass yields the complete error set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::BusinessId;
use crate::core::identifiers::ServiceId;
use crate::core::schedule::WeeklyHours;

// ============================================================================
// SECTION: Business Profile
// ============================================================================

/// AIDP business profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    /// Business identifier (`biz_` namespace).
    pub id: BusinessId,
    /// Display name.
    pub name: String,
    /// Business category.
    pub category: BusinessCategory,
    /// Long-form description.
    pub description: String,
    /// Optional one-line tagline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Physical location and service area.
    pub location: Location,
    /// Contact channels.
    pub contact: Contact,
    /// Offered services (at least one on a valid profile).
    pub services: Vec<Service>,
    /// Opening hours and blackout dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    /// Photos, videos, and logo references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    /// AI-facing content and visibility scores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_optimization: Option<AiOptimization>,
    /// Verification and reputation signals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust: Option<Trust>,
    /// Subscription tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
    /// Publication metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Closed set of business categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessCategory {
    /// Tours, attractions, and travel services.
    Tourism,
    /// Hotels and lodging.
    Hospitality,
    /// Restaurants, cafes, and bars.
    Restaurants,
    /// Retail stores.
    Retail,
    /// Clinics, pharmacies, and practitioners.
    Healthcare,
    /// Trades and home maintenance.
    HomeServices,
    /// Legal, accounting, and consulting.
    ProfessionalServices,
    /// Spas, gyms, and beauty.
    Wellness,
}

impl BusinessCategory {
    /// Returns the wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tourism => "tourism",
            Self::Hospitality => "hospitality",
            Self::Restaurants => "restaurants",
            Self::Retail => "retail",
            Self::Healthcare => "healthcare",
            Self::HomeServices => "home_services",
            Self::ProfessionalServices => "professional_services",
            Self::Wellness => "wellness",
        }
    }

    /// Returns every category in schema order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Tourism,
            Self::Hospitality,
            Self::Restaurants,
            Self::Retail,
            Self::Healthcare,
            Self::HomeServices,
            Self::ProfessionalServices,
            Self::Wellness,
        ]
    }
}

// ============================================================================
// SECTION: Location & Contact
// ============================================================================

/// Postal address plus coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Postal address.
    pub address: Address,
    /// Geographic coordinates.
    pub coordinates: Coordinates,
    /// Optional service area for mobile businesses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_area: Option<ServiceArea>,
}

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street line.
    pub street: String,
    /// City or locality.
    pub city: String,
    /// State, province, or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Country name or ISO code.
    pub country: String,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// WGS84 coordinates. `lng` is accepted on input as an alias for `lon`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    #[serde(alias = "lng")]
    pub lon: f64,
}

/// Area served by a business that travels to customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    /// Service area shape.
    #[serde(rename = "type")]
    pub kind: ServiceAreaKind,
    /// Radius in miles for `radius` areas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Named regions for `regions` areas.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
}

/// Service area shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceAreaKind {
    /// Circle around the business location.
    Radius,
    /// Explicit list of regions.
    Regions,
}

/// Contact channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Social media handles or URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
}

/// Social media links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    /// Facebook page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    /// Instagram handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    /// Twitter handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// LinkedIn page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

// ============================================================================
// SECTION: Services & Pricing
// ============================================================================

/// A service offered by the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Service identifier.
    pub id: ServiceId,
    /// Service name.
    pub name: String,
    /// Service description.
    pub description: String,
    /// Free-form service category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Pricing mode and amounts.
    pub pricing: Pricing,
    /// Duration in minutes.
    #[serde(
        default,
        deserialize_with = "crate::core::integral::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<u32>,
    /// Whether the service can be booked directly.
    pub bookable: bool,
    /// Whether a quote must be requested first.
    pub requires_quote: bool,
}

/// Service pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    /// Pricing mode.
    #[serde(rename = "type")]
    pub kind: PricingKind,
    /// Amount for `fixed` and `hourly` pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Lower bound for `range` pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    /// Upper bound for `range` pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
    /// ISO 4217 currency code.
    pub currency: String,
}

/// Pricing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingKind {
    /// Single positive amount.
    Fixed,
    /// Per-hour rate.
    Hourly,
    /// Minimum and maximum amount.
    Range,
    /// Price on request.
    Quote,
}

impl PricingKind {
    /// Returns the wire name of the pricing mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Hourly => "hourly",
            Self::Range => "range",
            Self::Quote => "quote",
        }
    }
}

// ============================================================================
// SECTION: Optional Substructures
// ============================================================================

/// Opening hours and closures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Weekly opening hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<WeeklyHours>,
    /// Dates (`YYYY-MM-DD`) on which the business is closed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blackout_dates: Vec<String>,
}

/// Media references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Photo URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    /// Video URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<String>,
    /// Virtual tour URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_tour: Option<String>,
}

/// AI-facing content and scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiOptimization {
    /// Content only exposed to AI assistants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_content: Option<ExclusiveContent>,
    /// Signals that should boost ranking.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boost_signals: Vec<String>,
    /// Visibility score in [0, 100].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_score: Option<f64>,
    /// Uniqueness score in [0, 100].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniqueness_score: Option<f64>,
}

/// Content exclusive to AI assistants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusiveContent {
    /// Insider tips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insider_tips: Option<String>,
    /// Local secrets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_secrets: Option<String>,
    /// Behind-the-scenes story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behind_the_scenes: Option<String>,
    /// Cultural notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_notes: Option<String>,
    /// Sustainability practices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability_practices: Option<String>,
    /// Offers only available through assistants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusive_offers: Vec<String>,
    /// Curated testimonials.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customer_testimonials: Vec<Testimonial>,
}

/// Customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Customer name.
    pub name: String,
    /// Testimonial text.
    pub text: String,
    /// Date of the testimonial.
    pub date: String,
}

/// Verification and reputation signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trust {
    /// Verification level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<VerificationLevel>,
    /// Verification workflow status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
    /// Average rating in [0, 5].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    /// Total number of reviews.
    #[serde(
        default,
        deserialize_with = "crate::core::integral::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_reviews: Option<u64>,
    /// Review counts per star rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_breakdown: Option<RatingBreakdown>,
    /// Risk score in [0, 100].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
}

/// Verification level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationLevel {
    /// Basic checks passed.
    Basic,
    /// Certified by a reviewer.
    Certified,
    /// Highest verification level.
    Elite,
}

/// Verification workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Awaiting review.
    Pending,
    /// Verified.
    Approved,
    /// Verification refused.
    Rejected,
}

/// Review counts keyed by star rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    /// One-star reviews.
    #[serde(rename = "1", deserialize_with = "crate::core::integral::deserialize")]
    pub one: u64,
    /// Two-star reviews.
    #[serde(rename = "2", deserialize_with = "crate::core::integral::deserialize")]
    pub two: u64,
    /// Three-star reviews.
    #[serde(rename = "3", deserialize_with = "crate::core::integral::deserialize")]
    pub three: u64,
    /// Four-star reviews.
    #[serde(rename = "4", deserialize_with = "crate::core::integral::deserialize")]
    pub four: u64,
    /// Five-star reviews.
    #[serde(rename = "5", deserialize_with = "crate::core::integral::deserialize")]
    pub five: u64,
}

/// Subscription tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Tier name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<SubscriptionTier>,
    /// Enabled feature flags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

/// Subscription tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    /// Free listing.
    Free,
    /// Paid professional tier.
    Professional,
    /// Enterprise tier.
    Enterprise,
}

/// Publication metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Publication status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProfileStatus>,
    /// RFC 3339 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// RFC 3339 update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// RFC 3339 publication timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

/// Profile publication status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    /// Not yet submitted.
    Draft,
    /// Submitted for review.
    PendingReview,
    /// Publicly visible.
    Published,
    /// Hidden by moderation.
    Suspended,
}
