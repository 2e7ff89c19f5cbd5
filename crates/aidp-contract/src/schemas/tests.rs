// crates/aidp-contract/src/schemas/tests.rs
// ============================================================================
// Module: Entity Schema Unit Tests
// Description: Schema ids, compilation, and sample conformance.
// Purpose: Keep published schemas and samples in sync.
// Dependencies: aidp-contract, jsonschema, serde_json
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    clippy::use_debug,
    reason = "Test-only validation helpers use panic-based assertions for clarity."
)]

use aidp_core::EntityKind;
use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;
use serde_json::json;

use super::entity_schema;
use super::schema_id;
use crate::samples::sample;

fn compile(schema: &Value) -> Validator {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .should_validate_formats(true)
        .build(schema)
        .expect("schema compilation failed")
}

fn required(schema: &Value) -> Vec<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

#[test]
fn schema_ids_are_stable_urls() {
    assert_eq!(
        schema_id(EntityKind::BusinessProfile),
        "https://schemas.aidp.dev/v1/business-profile.schema.json"
    );
    for kind in EntityKind::all() {
        let schema = entity_schema(*kind);
        assert_eq!(schema.get("$id").and_then(Value::as_str), Some(schema_id(*kind).as_str()));
        assert_eq!(
            schema.get("$schema").and_then(Value::as_str),
            Some("https://json-schema.org/draft/2020-12/schema")
        );
    }
}

#[test]
fn samples_validate_against_their_schemas() {
    for kind in EntityKind::all() {
        let validator = compile(&entity_schema(*kind));
        let payload = sample(*kind);
        let errors: Vec<String> =
            validator.iter_errors(&payload).map(|error| error.to_string()).collect();
        assert!(errors.is_empty(), "sample for {kind} failed: {errors:?}");
    }
}

#[test]
fn profile_required_fields() {
    let schema = entity_schema(EntityKind::BusinessProfile);
    assert_eq!(
        required(&schema),
        vec!["id", "name", "category", "description", "location", "contact", "services"]
    );
    let service = &schema["properties"]["services"]["items"];
    assert_eq!(
        required(service),
        vec!["id", "name", "description", "pricing", "bookable", "requiresQuote"]
    );
}

#[test]
fn coordinates_accept_exactly_one_longitude_key() {
    let validator = compile(&entity_schema(EntityKind::BusinessProfile));
    let mut profile = sample(EntityKind::BusinessProfile);
    profile["location"]["coordinates"] = json!({ "lat": 1.0, "lng": 2.0 });
    assert!(validator.is_valid(&profile));
    profile["location"]["coordinates"] = json!({ "lat": 1.0, "lon": 2.0, "lng": 2.0 });
    assert!(!validator.is_valid(&profile));
    profile["location"]["coordinates"] = json!({ "lat": 1.0 });
    assert!(!validator.is_valid(&profile));
}

#[test]
fn coordinate_and_score_bounds_are_not_schema_errors() {
    let validator = compile(&entity_schema(EntityKind::BusinessProfile));
    let mut profile = sample(EntityKind::BusinessProfile);
    profile["location"]["coordinates"]["lat"] = json!(95.0);
    profile["aiOptimization"]["visibilityScore"] = json!(150.0);
    assert!(validator.is_valid(&profile));
}

#[test]
fn booking_bounds_live_in_schema() {
    let validator = compile(&entity_schema(EntityKind::BookingRequest));
    let mut booking = sample(EntityKind::BookingRequest);
    booking["partySize"] = json!(51);
    assert!(!validator.is_valid(&booking));
    booking["partySize"] = json!(50);
    booking["time"] = json!("24:00");
    assert!(!validator.is_valid(&booking));
    booking["time"] = json!("7:30");
    assert!(validator.is_valid(&booking));
}

#[test]
fn review_content_length_is_bounded() {
    let validator = compile(&entity_schema(EntityKind::Review));
    let mut review = sample(EntityKind::Review);
    review["content"] = json!("too short");
    assert!(!validator.is_valid(&review));
    review["content"] = json!("x".repeat(5001));
    assert!(!validator.is_valid(&review));
}

#[test]
fn counter_maximums_match_decoded_widths() {
    let validator = compile(&entity_schema(EntityKind::BookingRequest));
    let mut booking = sample(EntityKind::BookingRequest);
    booking["duration"] = json!(super::U32_LIMIT);
    assert!(validator.is_valid(&booking));
    booking["duration"] = json!(5_000_000_000_u64);
    assert!(!validator.is_valid(&booking));

    let validator = compile(&entity_schema(EntityKind::IntentJourney));
    let mut journey = sample(EntityKind::IntentJourney);
    journey["turns"][0]["turn"] = json!(super::U32_LIMIT + 1);
    assert!(!validator.is_valid(&journey));
}

#[test]
fn integral_floats_satisfy_integer_fields() {
    let validator = compile(&entity_schema(EntityKind::BookingRequest));
    let mut booking = sample(EntityKind::BookingRequest);
    booking["partySize"] = json!(2.0);
    assert!(validator.is_valid(&booking));
}
