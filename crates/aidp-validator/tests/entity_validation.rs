//! End-to-end entity validation tests for aidp-validator.
// crates/aidp-validator/tests/entity_validation.rs
// =============================================================================
// Module: Entity Validation Tests
// Description: Two-stage validation of every AIDP entity through the public API.
// Purpose: Pin field addressing, stage ownership, and configuration effects.
// =============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    clippy::use_debug,
    reason = "Test-only assertions."
)]

use aidp_contract::samples;
use aidp_core::BusinessProfile;
use aidp_core::EntityKind;
use aidp_core::utils::sanitize_profile;
use aidp_validator::AidpValidator;
use aidp_validator::ValidationConfig;
use aidp_validator::ValidationReport;
use aidp_validator::ValidatorConfig;
use serde_json::Value;
use serde_json::json;

fn validator() -> AidpValidator {
    AidpValidator::new(&ValidatorConfig::default()).expect("default validator")
}

fn validator_with(validation: ValidationConfig) -> AidpValidator {
    AidpValidator::new(&ValidatorConfig {
        validation,
    })
    .expect("configured validator")
}

fn sorted_fields(report: &ValidationReport) -> Vec<String> {
    let mut fields: Vec<String> =
        report.error_fields().into_iter().map(ToString::to_string).collect();
    fields.sort();
    fields
}

fn minimal_booking() -> Value {
    json!({
        "businessId": "b1",
        "date": "2024-01-01",
        "time": "18:00",
        "partySize": 0,
        "customer": { "name": "A" }
    })
}

#[test]
fn every_sample_is_valid() {
    let validator = validator();
    for kind in EntityKind::all() {
        let report = validator.validate(*kind, &samples::sample(*kind));
        assert!(report.valid, "{kind}: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "{kind}: {:?}", report.warnings);
    }
}

#[test]
fn profile_reports_latitude_and_missing_fixed_amount() {
    let mut profile = samples::business_profile_sample();
    profile["id"] = json!("biz_abc123456789abcd");
    profile["category"] = json!("restaurants");
    profile["location"]["coordinates"] = json!({ "lat": 95, "lon": 0 });
    profile["services"][0]["pricing"] = json!({ "type": "fixed", "currency": "USD" });

    let report = validator().validate_business_profile(&profile);
    assert!(!report.valid);
    assert_eq!(report.error_fields(), vec![
        "location.coordinates.lat",
        "services[0].pricing.amount"
    ]);
    assert_eq!(report.errors[0].message, "Latitude must be between -90 and 90");
    assert_eq!(report.errors[0].value, Some(json!(95.0)));
}

#[test]
fn booking_reports_party_size_and_missing_email() {
    let report = validator().validate_booking_request(&minimal_booking());
    assert!(!report.valid);
    assert_eq!(sorted_fields(&report), vec!["customer.email", "partySize"]);
    let email = report.errors.iter().find(|error| error.field == "customer.email").expect("email");
    assert_eq!(email.message, "Required field missing");
}

#[test]
fn presence_backend_agrees_on_the_booking_example() {
    let validator =
        AidpValidator::with_presence_check(&ValidatorConfig::default()).expect("validator");
    let report = validator.validate_booking_request(&minimal_booking());
    assert_eq!(sorted_fields(&report), vec!["customer.email", "partySize"]);
}

#[test]
fn inverted_range_pricing_is_addressed_at_the_pricing_object() {
    let mut profile = samples::business_profile_sample();
    profile["services"][1]["pricing"]["minAmount"] = json!(900.0);
    profile["services"][1]["pricing"]["maxAmount"] = json!(400.0);
    let report = validator().validate_business_profile(&profile);
    assert_eq!(report.error_fields(), vec!["services[1].pricing"]);
}

#[test]
fn lng_alias_is_checked_as_longitude() {
    let mut profile = samples::business_profile_sample();
    profile["location"]["coordinates"] = json!({ "lat": 10.0, "lng": 200.0 });
    let report = validator().validate_business_profile(&profile);
    assert_eq!(report.error_fields(), vec!["location.coordinates.lon"]);
}

#[test]
fn opening_hours_must_use_the_24_hour_clock() {
    let mut profile = samples::business_profile_sample();
    profile["availability"]["hours"]["monday"]["open"] = json!("8am");
    let report = validator().validate_business_profile(&profile);
    assert_eq!(report.error_fields(), vec!["availability.hours.monday.open"]);
}

#[test]
fn review_rating_is_owned_by_the_schema() {
    let mut review = samples::review_sample();
    review["rating"] = json!(0);
    let report = validator().validate_review(&review);
    assert_eq!(report.error_fields(), vec!["rating"]);
}

#[test]
fn booking_response_price_requires_currency() {
    let mut response = samples::booking_response_sample();
    response.as_object_mut().expect("response").remove("currency");
    let report = validator().validate_booking_response(&response);
    assert_eq!(report.error_fields(), vec!["currency"]);
}

#[test]
fn metrics_placement_cannot_exceed_total() {
    let mut metrics = samples::upstream_metrics_sample();
    metrics["citations"]["total"] = json!(100);
    let report = validator().validate_upstream_metrics(&metrics);
    assert_eq!(report.error_fields(), vec!["citations.placement"]);
}

#[test]
fn journey_scores_are_bounded() {
    let mut journey = samples::intent_journey_sample();
    journey["turns"][0]["intentScore"] = json!(140.0);
    let report = validator().validate_intent_journey(&journey);
    assert_eq!(report.error_fields(), vec!["turns[0].intentScore"]);
}

#[test]
fn permissive_mode_keeps_rule_findings_as_warnings() {
    let mut profile = samples::business_profile_sample();
    profile["trust"]["averageRating"] = json!(7.5);
    let permissive = validator_with(ValidationConfig::permissive());
    let report = permissive.validate_business_profile(&profile);
    assert!(report.valid);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].field, "trust.averageRating");
}

#[test]
fn permissive_mode_still_rejects_structural_failures() {
    let permissive = validator_with(ValidationConfig::permissive());
    let report = permissive.validate_booking_request(&minimal_booking());
    assert!(!report.valid);
    assert!(report.warnings.is_empty());
}

#[test]
fn coercion_accepts_numeric_strings() {
    let mut booking = samples::booking_request_sample();
    booking["partySize"] = json!("4");
    assert_eq!(validator().validate_booking_request(&booking).error_fields(), vec!["partySize"]);

    let coercing = validator_with(ValidationConfig {
        coerce_types: true,
        ..ValidationConfig::default()
    });
    let report = coercing.validate_booking_request(&booking);
    assert!(report.valid, "{:?}", report.errors);
}

#[test]
fn closed_objects_reject_unknown_members() {
    let mut booking = samples::booking_request_sample();
    booking["customer"]["loyaltyTier"] = json!("gold");
    assert!(validator().validate_booking_request(&booking).valid);

    let closed = validator_with(ValidationConfig {
        allow_additional: false,
        ..ValidationConfig::default()
    });
    let report = closed.validate_booking_request(&booking);
    assert_eq!(report.error_fields(), vec!["customer.loyaltyTier"]);
    assert_eq!(report.errors[0].message, "Unknown property");
}

#[test]
fn email_syntax_is_checked_even_without_format_assertions() {
    let mut booking = samples::booking_request_sample();
    booking["customer"]["email"] = json!("not-an-email");
    assert_eq!(validator().validate_booking_request(&booking).error_fields(), vec![
        "customer.email"
    ]);

    let lax = validator_with(ValidationConfig {
        validate_formats: false,
        ..ValidationConfig::default()
    });
    let report = lax.validate_booking_request(&booking);
    assert_eq!(report.error_fields(), vec!["customer.email"]);
    assert_eq!(report.errors[0].message, "Email address is not valid");
}

#[test]
fn profile_email_is_checked_even_without_format_assertions() {
    let lax = validator_with(ValidationConfig {
        validate_formats: false,
        ..ValidationConfig::default()
    });
    let mut profile = samples::business_profile_sample();
    profile["contact"]["email"] = json!("not-an-email");
    let report = lax.validate_business_profile(&profile);
    assert!(!report.valid);
    assert_eq!(report.error_fields(), vec!["contact.email"]);
    assert_eq!(report.errors[0].value, Some(json!("not-an-email")));
}

#[test]
fn integral_floats_reach_the_rule_stage() {
    let validator = validator();
    let mut booking = samples::booking_request_sample();
    booking["partySize"] = json!(2.0);
    let report = validator.validate_booking_request(&booking);
    assert!(report.valid, "{:?}", report.errors);

    booking["customer"]["email"] = json!("not-an-email");
    let lax = validator_with(ValidationConfig {
        validate_formats: false,
        ..ValidationConfig::default()
    });
    assert_eq!(lax.validate_booking_request(&booking).error_fields(), vec!["customer.email"]);

    let mut review = samples::review_sample();
    review["rating"] = json!(5.0);
    review["helpful"] = json!(3.0);
    let report = validator.validate_review(&review);
    assert!(report.valid, "{:?}", report.errors);
}

#[test]
fn oversized_counters_are_addressed_by_field() {
    let validator = validator();
    let mut booking = samples::booking_request_sample();
    booking["duration"] = json!(5_000_000_000_u64);
    let report = validator.validate_booking_request(&booking);
    assert_eq!(report.error_fields(), vec!["duration"]);

    let mut journey = samples::intent_journey_sample();
    journey["turns"][0]["turn"] = json!(5_000_000_000_u64);
    let report = validator.validate_intent_journey(&journey);
    assert_eq!(report.error_fields(), vec!["turns[0].turn"]);
    assert!(report.errors.iter().all(|error| error.field != "$"));
}

#[test]
fn sanitized_internal_email_must_be_replaced_before_publishing() {
    let mut profile: BusinessProfile =
        serde_json::from_value(samples::business_profile_sample()).expect("sample profile");
    profile.contact.email = "desk@internal.example.com".to_string();
    let report =
        validator().validate_entity(EntityKind::BusinessProfile, &sanitize_profile(profile));
    assert!(!report.valid);
    assert_eq!(report.error_fields(), vec!["contact.email"]);
}

#[test]
fn reports_omit_empty_warnings_when_serialized() {
    let report = validator().validate_booking_request(&minimal_booking());
    let encoded = serde_json::to_value(&report).expect("report json");
    assert_eq!(encoded["valid"], json!(false));
    assert!(encoded.get("warnings").is_none());
    assert!(encoded["errors"].as_array().is_some_and(|errors| errors.len() == 2));
}
