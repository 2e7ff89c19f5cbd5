// crates/aidp-core/src/utils.rs
// ============================================================================
// Module: AIDP Utilities
// Description: Pure helpers over AIDP entities.
// Purpose: Analytics, hours, field checks, listing import, enrich, sanitize.
// Dependencies: regex, time, tracing, url
// ============================================================================

//! Pure helpers over AIDP entities; nothing here performs I/O.

pub mod analytics;
pub mod checks;
pub mod enrich;
pub mod hours;
pub mod migration;
pub mod sanitize;

pub use analytics::IntentAnalysis;
pub use analytics::IntentTrend;
pub use analytics::analyze_intent_progression;
pub use analytics::calculate_share_of_voice;
pub use checks::is_valid_clock_time;
pub use checks::is_valid_coordinates;
pub use checks::is_valid_email;
pub use checks::is_valid_phone_number;
pub use checks::is_valid_url;
pub use enrich::enrich_exclusive_content;
pub use hours::OpeningWindow;
pub use hours::is_business_open;
pub use hours::parse_business_hours;
pub use migration::ExternalListing;
pub use migration::MigrationError;
pub use migration::ProfileDraft;
pub use migration::map_listing;
pub use sanitize::is_internal_email;
pub use sanitize::sanitize_profile;
