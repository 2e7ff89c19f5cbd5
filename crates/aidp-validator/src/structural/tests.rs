// crates/aidp-validator/src/structural/tests.rs
// ============================================================================
// Module: Structural Check Unit Tests
// Description: Field path rendering and schema backend error mapping.
// Purpose: Keep error addressing stable across schema changes.
// Dependencies: aidp-validator, aidp-contract, serde_json
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    clippy::use_debug,
    reason = "Test-only assertions."
)]

use aidp_contract::samples;
use aidp_core::EntityKind;
use serde_json::json;

use super::REQUIRED_MESSAGE;
use super::ROOT_FIELD;
use super::SchemaCheck;
use super::StructuralCheck;
use super::UNKNOWN_PROPERTY_MESSAGE;
use super::child_path;
use super::field_path;
use super::prepared_schemas;
use crate::config::ValidationConfig;

fn fields(errors: &[crate::FieldError]) -> Vec<&str> {
    errors.iter().map(|error| error.field.as_str()).collect()
}

#[test]
fn field_path_brackets_array_indices() {
    let root = json!({ "services": [ { "pricing": { "amount": 1 } } ] });
    assert_eq!(field_path(&root, "/services/0/pricing/amount"), "services[0].pricing.amount");
    assert_eq!(field_path(&root, ""), "");
    assert_eq!(field_path(&root, "/services"), "services");
}

#[test]
fn field_path_keeps_numeric_object_keys_dotted() {
    let root = json!({ "trust": { "ratingBreakdown": { "5": 10 } } });
    assert_eq!(field_path(&root, "/trust/ratingBreakdown/5"), "trust.ratingBreakdown.5");
}

#[test]
fn field_path_decodes_pointer_escapes() {
    let root = json!({ "a/b": { "c~d": 1 } });
    assert_eq!(field_path(&root, "/a~1b/c~0d"), "a/b.c~d");
}

#[test]
fn child_path_joins_from_root() {
    assert_eq!(child_path("", "id"), "id");
    assert_eq!(child_path("customer", "email"), "customer.email");
}

#[test]
fn samples_pass_the_schema_backend() {
    let check = SchemaCheck::new(&ValidationConfig::default()).expect("schemas compile");
    for kind in EntityKind::all() {
        let errors = check.check(*kind, &samples::sample(*kind));
        assert!(errors.is_empty(), "{kind}: {errors:?}");
    }
}

#[test]
fn missing_members_are_addressed_at_the_member() {
    let check = SchemaCheck::new(&ValidationConfig::default()).expect("schemas compile");
    let mut booking = samples::booking_request_sample();
    booking["customer"].as_object_mut().expect("customer").remove("email");
    let errors = check.check(EntityKind::BookingRequest, &booking);
    assert_eq!(fields(&errors), vec!["customer.email"]);
    assert_eq!(errors[0].message, REQUIRED_MESSAGE);
}

#[test]
fn nested_failures_carry_bracketed_paths_and_values() {
    let check = SchemaCheck::new(&ValidationConfig::default()).expect("schemas compile");
    let mut profile = samples::business_profile_sample();
    profile["services"][1]["pricing"]["currency"] = json!("aud");
    let errors = check.check(EntityKind::BusinessProfile, &profile);
    assert_eq!(fields(&errors), vec!["services[1].pricing.currency"]);
    assert_eq!(errors[0].value, Some(json!("aud")));
}

#[test]
fn root_type_errors_use_the_root_label() {
    let check = SchemaCheck::new(&ValidationConfig::default()).expect("schemas compile");
    let errors = check.check(EntityKind::Review, &json!("not an object"));
    assert_eq!(fields(&errors), vec![ROOT_FIELD]);
}

#[test]
fn closed_objects_reject_unknown_members() {
    let config = ValidationConfig {
        allow_additional: false,
        ..ValidationConfig::default()
    };
    let check = SchemaCheck::new(&config).expect("schemas compile");
    let mut booking = samples::booking_request_sample();
    booking["customer"]["loyaltyTier"] = json!("gold");
    let errors = check.check(EntityKind::BookingRequest, &booking);
    assert_eq!(fields(&errors), vec!["customer.loyaltyTier"]);
    assert_eq!(errors[0].message, UNKNOWN_PROPERTY_MESSAGE);
    assert_eq!(errors[0].value, Some(json!("gold")));

    let open = SchemaCheck::new(&ValidationConfig::default()).expect("schemas compile");
    assert!(open.check(EntityKind::BookingRequest, &booking).is_empty());
}

#[test]
fn format_assertions_follow_config() {
    let mut booking = samples::booking_request_sample();
    booking["customer"]["email"] = json!("not-an-email");
    let strict = SchemaCheck::new(&ValidationConfig::default()).expect("schemas compile");
    assert_eq!(fields(&strict.check(EntityKind::BookingRequest, &booking)), vec![
        "customer.email"
    ]);
    let lenient = SchemaCheck::new(&ValidationConfig {
        validate_formats: false,
        ..ValidationConfig::default()
    })
    .expect("schemas compile");
    assert!(lenient.check(EntityKind::BookingRequest, &booking).is_empty());
}

#[test]
fn prepared_schemas_close_nested_objects_only_when_asked() {
    let open = prepared_schemas(&ValidationConfig::default());
    let profile = &open[&EntityKind::BusinessProfile];
    assert!(profile.get("additionalProperties").is_none());

    let closed = prepared_schemas(&ValidationConfig {
        allow_additional: false,
        ..ValidationConfig::default()
    });
    let profile = &closed[&EntityKind::BusinessProfile];
    assert_eq!(profile["additionalProperties"], json!(false));
    assert_eq!(
        profile["properties"]["services"]["items"]["additionalProperties"],
        json!(false)
    );
}
