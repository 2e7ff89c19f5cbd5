// crates/aidp-core/src/core/mod.rs
// ============================================================================
// Module: AIDP Entity Model
// Description: Entity types, identifiers, and hashing primitives.
// Purpose: Group the serializable AIDP data model.
// Dependencies: serde, sha2, serde_jcs, time
// ============================================================================

//! ## Overview
//! The serializable AIDP data model. Every entity uses camelCase wire
//! names and round-trips through `serde` unchanged.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod analytics;
pub mod booking;
pub mod entity;
pub mod hashing;
pub mod identifiers;
pub mod integral;
pub mod profile;
pub mod review;
pub mod schedule;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use analytics::CitationMetrics;
pub use analytics::CitationPlacement;
pub use analytics::ImpressionMetrics;
pub use analytics::IntentJourney;
pub use analytics::IntentTurn;
pub use analytics::JourneyOutcome;
pub use analytics::JourneyPattern;
pub use analytics::TimeRange;
pub use analytics::UpstreamMetrics;
pub use analytics::ZeroClickMetrics;
pub use booking::BookingInstructions;
pub use booking::BookingRequest;
pub use booking::BookingResponse;
pub use booking::BookingStatus;
pub use booking::Customer;
pub use entity::EntityKind;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use identifiers::BookingId;
pub use identifiers::BusinessId;
pub use identifiers::JourneyId;
pub use identifiers::ReviewId;
pub use identifiers::ServiceId;
pub use profile::Address;
pub use profile::AiOptimization;
pub use profile::Availability;
pub use profile::BusinessCategory;
pub use profile::BusinessProfile;
pub use profile::Contact;
pub use profile::Coordinates;
pub use profile::ExclusiveContent;
pub use profile::Location;
pub use profile::Media;
pub use profile::Metadata;
pub use profile::Pricing;
pub use profile::PricingKind;
pub use profile::ProfileStatus;
pub use profile::RatingBreakdown;
pub use profile::Service;
pub use profile::ServiceArea;
pub use profile::ServiceAreaKind;
pub use profile::SocialMedia;
pub use profile::Subscription;
pub use profile::SubscriptionTier;
pub use profile::Testimonial;
pub use profile::Trust;
pub use profile::VerificationLevel;
pub use profile::VerificationStatus;
pub use review::BusinessResponse;
pub use review::Review;
pub use review::ReviewAuthor;
pub use schedule::DayHours;
pub use schedule::WeeklyHours;
