// crates/aidp-core/tests/model_and_checks.rs
// ============================================================================
// Module: Entity Model Integration Tests
// Description: Wire-format behavior of entities plus field predicates.
// Purpose: Pin camelCase keys, aliases, and the stand-alone checks.
// Dependencies: aidp-core, serde_json, proptest
// ============================================================================

//! Wire-format and field-predicate tests for aidp-core.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions."
)]

use aidp_core::BusinessProfile;
use aidp_core::EntityKind;
use aidp_core::ExclusiveContent;
use aidp_core::PricingKind;
use aidp_core::utils::enrich_exclusive_content;
use aidp_core::utils::is_valid_clock_time;
use aidp_core::utils::is_valid_coordinates;
use aidp_core::utils::is_valid_email;
use aidp_core::utils::is_valid_phone_number;
use aidp_core::utils::is_valid_url;
use aidp_core::utils::sanitize_profile;
use proptest::prelude::*;
use serde_json::Value;
use serde_json::json;

type TestResult = Result<(), String>;

fn profile_json() -> Value {
    json!({
        "id": "biz_abcdefghijklmnop",
        "name": "Harbour Kayak Tours",
        "category": "tourism",
        "description": "Guided sea kayak trips.",
        "location": {
            "address": { "street": "12 Wharf Rd", "city": "Sydney", "country": "AU" },
            "coordinates": { "lat": -33.86, "lng": 151.2 }
        },
        "contact": { "phone": "+61 2 9374 4000", "email": "hello@kayak.example.com" },
        "services": [{
            "id": "svc-1",
            "name": "Sunset paddle",
            "description": "Two hours on the water.",
            "pricing": { "type": "fixed", "amount": 89.0, "currency": "AUD" },
            "bookable": true,
            "requiresQuote": false
        }]
    })
}

#[test]
fn profile_accepts_lng_and_emits_lon() -> TestResult {
    let profile: BusinessProfile =
        serde_json::from_value(profile_json()).map_err(|err| err.to_string())?;
    assert!((profile.location.coordinates.lon - 151.2).abs() < 1e-9);
    assert_eq!(profile.services[0].pricing.kind, PricingKind::Fixed);

    let value = serde_json::to_value(&profile).map_err(|err| err.to_string())?;
    let coordinates = &value["location"]["coordinates"];
    assert!(coordinates.get("lon").is_some());
    assert!(coordinates.get("lng").is_none());
    assert_eq!(value["services"][0]["requiresQuote"], json!(false));
    assert!(value.get("availability").is_none());
    Ok(())
}

#[test]
fn entity_kinds_have_distinct_slugs() {
    let mut slugs: Vec<&str> = EntityKind::all().iter().map(|kind| kind.slug()).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), EntityKind::all().len());
    assert_eq!(EntityKind::BusinessProfile.schema_file_name(), "business-profile.schema.json");
    assert_eq!(EntityKind::parse("booking-request"), Some(EntityKind::BookingRequest));
    assert_eq!(EntityKind::parse("intent_journey"), Some(EntityKind::IntentJourney));
    assert_eq!(EntityKind::parse("invoice"), None);
}

#[test]
fn sanitizing_blanks_only_internal_contact_emails() -> TestResult {
    let profile: BusinessProfile =
        serde_json::from_value(profile_json()).map_err(|err| err.to_string())?;
    let public = sanitize_profile(profile.clone());
    assert_eq!(public, profile);

    let mut internal = profile;
    internal.contact.email = "ops@Internal.kayak.example.com".to_string();
    let sanitized = sanitize_profile(internal);
    assert!(sanitized.contact.email.is_empty());
    assert!(!is_valid_email(&sanitized.contact.email));
    assert_eq!(sanitized.contact.phone, "+61 2 9374 4000");
    Ok(())
}

#[test]
fn enrichment_keeps_existing_values() -> TestResult {
    let mut profile: BusinessProfile =
        serde_json::from_value(profile_json()).map_err(|err| err.to_string())?;
    profile = enrich_exclusive_content(
        profile,
        ExclusiveContent {
            insider_tips: Some("Launch from the north ramp.".to_string()),
            ..ExclusiveContent::default()
        },
    );
    profile = enrich_exclusive_content(
        profile,
        ExclusiveContent {
            insider_tips: Some("Overwritten?".to_string()),
            local_secrets: Some("Penguins at dusk.".to_string()),
            ..ExclusiveContent::default()
        },
    );
    let content = profile
        .ai_optimization
        .and_then(|ai| ai.exclusive_content)
        .ok_or("exclusive content missing")?;
    assert_eq!(content.insider_tips.as_deref(), Some("Launch from the north ramp."));
    assert_eq!(content.local_secrets.as_deref(), Some("Penguins at dusk."));
    Ok(())
}

#[test]
fn empty_enrichment_is_a_no_op() -> TestResult {
    let profile: BusinessProfile =
        serde_json::from_value(profile_json()).map_err(|err| err.to_string())?;
    let enriched = enrich_exclusive_content(profile.clone(), ExclusiveContent::default());
    assert_eq!(enriched, profile);
    Ok(())
}

#[test]
fn contact_predicates() {
    assert!(is_valid_email("owner@shop.example.com"));
    assert!(!is_valid_email("owner@shop"));
    assert!(!is_valid_email("owner shop@example.com"));
    assert!(is_valid_phone_number("+1 (415) 749-2060"));
    assert!(!is_valid_phone_number("749-2060"));
    assert!(is_valid_url("https://shop.example.com/menu"));
    assert!(!is_valid_url("shop.example.com"));
}

#[test]
fn clock_time_predicate() {
    assert!(is_valid_clock_time("00:00"));
    assert!(is_valid_clock_time("23:59"));
    assert!(!is_valid_clock_time("24:00"));
    assert!(!is_valid_clock_time("9:00"));
    assert!(!is_valid_clock_time("09:60"));
    assert!(!is_valid_clock_time("09-00"));
}

proptest! {
    #[test]
    fn coordinates_inside_bounds_are_valid(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
        prop_assert!(is_valid_coordinates(lat, lon));
    }

    #[test]
    fn latitude_outside_bounds_is_invalid(lat in 90.000_001f64..1_000.0, lon in -180.0f64..=180.0) {
        prop_assert!(!is_valid_coordinates(lat, lon));
        prop_assert!(!is_valid_coordinates(-lat, lon));
    }
}
