// crates/aidp-core/tests/hashing.rs
// ============================================================================
// Module: Content Hashing Tests
// Description: SHA-256 digests over bytes and canonical JSON.
// ============================================================================
//! ## Overview
//! Pins known SHA-256 values, key-order independence of canonical JSON
//! digests, and the derived `biz_` identifier scheme built on top of them.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only panic-based assertions are permitted."
)]

use aidp_core::BusinessId;
use aidp_core::HashAlgorithm;
use aidp_core::hashing::HashError;
use aidp_core::hashing::hash_bytes;
use aidp_core::hashing::hash_canonical_json;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

#[test]
fn canonical_hash_is_order_independent_for_maps() {
    let mut map_a = Map::new();
    map_a.insert("partySize".to_string(), json!(2));
    map_a.insert("businessId".to_string(), json!("biz_8f3a2c91d7e64b05a1c3"));

    let mut map_b = Map::new();
    map_b.insert("businessId".to_string(), json!("biz_8f3a2c91d7e64b05a1c3"));
    map_b.insert("partySize".to_string(), json!(2));

    let hash_a = hash_canonical_json(HashAlgorithm::Sha256, &Value::Object(map_a)).expect("a");
    let hash_b = hash_canonical_json(HashAlgorithm::Sha256, &Value::Object(map_b)).expect("b");
    assert_eq!(hash_a, hash_b);
}

#[test]
fn canonical_hash_normalizes_numeric_representation() {
    let hash_a = hash_canonical_json(HashAlgorithm::Sha256, &json!(1.0)).expect("a");
    let hash_b = hash_canonical_json(HashAlgorithm::Sha256, &json!(1)).expect("b");
    assert_eq!(hash_a, hash_b);
}

#[derive(Serialize)]
struct Score {
    value: f64,
}

#[test]
fn canonical_hash_rejects_non_finite_numbers() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = hash_canonical_json(HashAlgorithm::Sha256, &Score {
            value,
        })
        .unwrap_err();
        assert!(matches!(err, HashError::Canonicalization(_)), "{value}");
    }
}

#[test]
fn golden_hash_empty_object() {
    let digest = hash_canonical_json(HashAlgorithm::Sha256, &json!({})).expect("hash");
    assert_eq!(digest.value, "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a");
    assert_eq!(digest.algorithm, HashAlgorithm::Sha256);
}

#[test]
fn golden_hash_bytes() {
    let digest = hash_bytes(HashAlgorithm::Sha256, b"test");
    assert_eq!(digest.value, "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08");
    let empty = hash_bytes(HashAlgorithm::Sha256, b"");
    assert_eq!(empty.value, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
}

#[test]
fn digest_display_carries_algorithm_label() {
    let digest = hash_bytes(HashAlgorithm::Sha256, b"");
    assert_eq!(
        digest.to_string(),
        "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(digest.hex_prefix(8), "e3b0c442");
    assert_eq!(digest.hex_prefix(500).len(), 64);
}

#[test]
fn derived_business_ids_are_stable_and_source_scoped() {
    let first = BusinessId::derive("google", "ChIJ123");
    let again = BusinessId::derive("google", "ChIJ123");
    let other = BusinessId::derive("yelp", "ChIJ123");
    assert_eq!(first, again);
    assert_ne!(first, other);
    assert!(first.is_well_formed());

    let expected = hash_bytes(HashAlgorithm::Sha256, b"google:ChIJ123");
    assert_eq!(first.as_str(), format!("biz_{}", expected.hex_prefix(24)));
}
