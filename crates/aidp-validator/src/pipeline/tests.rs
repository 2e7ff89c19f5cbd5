// crates/aidp-validator/src/pipeline/tests.rs
// ============================================================================
// Module: Pipeline Unit Tests
// Description: Stage ordering, mode split, and backend plumbing.
// Purpose: Pin how the stages compose independently of schema details.
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
use serde_json::Value;
use serde_json::json;

use super::AidpValidator;
use super::ValidatorError;
use crate::FieldError;
use crate::config::ValidationConfig;
use crate::config::ValidatorConfig;
use crate::structural::StructuralCheck;

/// Backend that accepts every payload.
struct AcceptAll;

impl StructuralCheck for AcceptAll {
    fn check(&self, _kind: EntityKind, _candidate: &Value) -> Vec<FieldError> {
        Vec::new()
    }

    fn backend(&self) -> &'static str {
        "accept-all"
    }
}

fn config(validation: ValidationConfig) -> ValidatorConfig {
    ValidatorConfig {
        validation,
    }
}

fn out_of_range_profile() -> Value {
    let mut profile = samples::business_profile_sample();
    profile["location"]["coordinates"]["lat"] = json!(95.0);
    profile
}

#[test]
fn backend_labels_follow_constructor() {
    let defaults = ValidatorConfig::default();
    assert_eq!(AidpValidator::new(&defaults).expect("schema").backend(), "jsonschema");
    assert_eq!(
        AidpValidator::with_presence_check(&defaults).expect("presence").backend(),
        "presence"
    );
    let custom = AidpValidator::with_backend(&defaults, Box::new(AcceptAll)).expect("custom");
    assert_eq!(custom.backend(), "accept-all");
}

#[test]
fn inconsistent_config_is_rejected() {
    let validation = ValidationConfig {
        strict: false,
        ..ValidationConfig::default()
    };
    let result = AidpValidator::with_presence_check(&config(validation));
    assert!(matches!(result, Err(ValidatorError::Config(_))));
}

#[test]
fn structural_findings_skip_rules() {
    let validator = AidpValidator::new(&ValidatorConfig::default()).expect("validator");
    let mut profile = out_of_range_profile();
    profile.as_object_mut().expect("profile").remove("name");
    let report = validator.validate_business_profile(&profile);
    assert_eq!(report.error_fields(), vec!["name"]);
}

#[test]
fn strict_rules_are_errors() {
    let validator = AidpValidator::new(&ValidatorConfig::default()).expect("validator");
    let report = validator.validate_business_profile(&out_of_range_profile());
    assert!(!report.valid);
    assert_eq!(report.error_fields(), vec!["location.coordinates.lat"]);
    assert!(report.warnings.is_empty());
}

#[test]
fn permissive_rules_are_warnings() {
    let validator =
        AidpValidator::new(&config(ValidationConfig::permissive())).expect("validator");
    let report = validator.validate_business_profile(&out_of_range_profile());
    assert!(report.valid);
    assert!(report.errors.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].field, "location.coordinates.lat");
}

#[test]
fn decode_failure_is_reported_at_root() {
    let validator = AidpValidator::with_backend(&ValidatorConfig::default(), Box::new(AcceptAll))
        .expect("validator");
    let report = validator.validate_review(&json!({ "rating": "five" }));
    assert_eq!(report.error_fields(), vec!["$"]);
    assert!(report.errors[0].message.contains("review"), "{:?}", report.errors);
}

#[test]
fn typed_entities_validate_like_their_json() {
    let validator = AidpValidator::new(&ValidatorConfig::default()).expect("validator");
    let review: aidp_core::Review =
        serde_json::from_value(samples::review_sample()).expect("review");
    assert!(validator.validate_entity(EntityKind::Review, &review).valid);
}
