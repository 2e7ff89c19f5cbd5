// crates/aidp-validator/src/config/tests.rs
// ============================================================================
// Module: Validator Config Unit Tests
// Description: Defaults, flag consistency, and path guards.
// Purpose: Ensure configuration fails closed on inconsistent input.
// Dependencies: aidp-validator, toml
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions."
)]

use std::path::Path;

use super::ConfigError;
use super::MAX_PATH_COMPONENT_LENGTH;
use super::ValidationConfig;
use super::ValidatorConfig;
use super::validate_path;

#[test]
fn empty_document_yields_defaults() {
    let config = ValidatorConfig::from_toml_str("").expect("empty config");
    assert_eq!(config, ValidatorConfig::default());
    assert!(config.validation.strict);
    assert!(config.validation.allow_additional);
    assert!(config.validation.validate_formats);
    assert!(!config.validation.coerce_types);
}

#[test]
fn partial_table_keeps_remaining_defaults() {
    let config =
        ValidatorConfig::from_toml_str("[validation]\nallow_additional = false\n").expect("config");
    assert!(!config.validation.allow_additional);
    assert!(config.validation.strict);
}

#[test]
fn non_strict_requires_permissive_opt_in() {
    let err = ValidatorConfig::from_toml_str("[validation]\nstrict = false\n")
        .expect_err("strict=false without opt-in");
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("allow_permissive"));

    let config = ValidatorConfig::from_toml_str(
        "[validation]\nstrict = false\nallow_permissive = true\n",
    )
    .expect("permissive config");
    assert_eq!(config.validation, ValidationConfig::permissive());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = ValidatorConfig::from_toml_str("[validation\nstrict = ").expect_err("bad toml");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn wrong_value_type_is_a_parse_error() {
    let err = ValidatorConfig::from_toml_str("[validation]\nstrict = \"yes\"\n")
        .expect_err("string flag");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn path_component_limit_is_inclusive() {
    let at_limit = "a".repeat(MAX_PATH_COMPONENT_LENGTH);
    assert!(validate_path(Path::new(&at_limit)).is_ok());
    let over = "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1);
    assert!(validate_path(Path::new(&over)).is_err());
}
