// crates/aidp-validator/src/presence.rs
// ============================================================================
// Module: Presence Check
// Description: Schema-library-free structural backend.
// Purpose: Presence and type checking driven by the published schema documents.
// Dependencies: aidp-core, serde_json
// ============================================================================

//! ## Overview
//! [`PresenceCheck`] walks the same schema documents as [`crate::SchemaCheck`]
//! but interprets only a narrow keyword set: `type`, `required`,
//! `minimum`/`maximum`, `oneOf`/`anyOf` branches that list only `required`,
//! nested `properties`/`items`, and `additionalProperties: false`. Patterns,
//! formats, enums, and string lengths are ignored, so anything the schema
//! backend accepts this backend accepts too.

use std::collections::BTreeMap;

use aidp_core::EntityKind;
use serde_json::Map;
use serde_json::Value;

use crate::config::ValidationConfig;
use crate::report::FieldError;
use crate::structural::REQUIRED_MESSAGE;
use crate::structural::ROOT_FIELD;
use crate::structural::StructuralCheck;
use crate::structural::UNKNOWN_PROPERTY_MESSAGE;
use crate::structural::child_path;
use crate::structural::or_root;
use crate::structural::prepared_schemas;

/// Structural backend that interprets presence and type keywords directly.
#[derive(Debug, Clone)]
pub struct PresenceCheck {
    /// Schema documents per entity kind.
    schemas: BTreeMap<EntityKind, Value>,
}

impl PresenceCheck {
    /// Builds the backend over the entity schemas adjusted for `config`.
    #[must_use]
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            schemas: prepared_schemas(config),
        }
    }
}

impl StructuralCheck for PresenceCheck {
    fn check(&self, kind: EntityKind, candidate: &Value) -> Vec<FieldError> {
        let Some(schema) = self.schemas.get(&kind) else {
            return vec![FieldError::new(ROOT_FIELD, format!("no schema loaded for {kind}"))];
        };
        let mut errors = Vec::new();
        walk(schema, candidate, "", &mut errors);
        errors
    }

    fn backend(&self) -> &'static str {
        "presence"
    }
}

/// Checks `value` against `schema`, appending findings under `path`.
fn walk(schema: &Value, value: &Value, path: &str, errors: &mut Vec<FieldError>) {
    if let Some(expected) = schema.get("type").and_then(Value::as_str)
        && !matches_type(expected, value)
    {
        errors.push(
            FieldError::new(or_root(path.to_string()), format!("Expected {expected}"))
                .with_value(value.clone()),
        );
        return;
    }
    if let Some(number) = value.as_f64() {
        check_bounds(schema, number, value, path, errors);
    }
    match value {
        Value::Object(members) => walk_object(schema, members, path, errors),
        Value::Array(items) => {
            if let Some(item_schema) = schema.get("items") {
                for (index, item) in items.iter().enumerate() {
                    walk(item_schema, item, &format!("{path}[{index}]"), errors);
                }
            }
        }
        _ => {}
    }
}

/// Checks required members, alternatives, declared members, and closure.
fn walk_object(
    schema: &Value,
    members: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<FieldError>,
) {
    for name in string_list(schema.get("required")) {
        if !members.contains_key(name) {
            errors.push(FieldError::new(child_path(path, name), REQUIRED_MESSAGE));
        }
    }
    check_alternatives(schema, members, path, errors);
    let declared = schema.get("properties").and_then(Value::as_object);
    if let Some(declared) = declared {
        for (name, member_schema) in declared {
            if let Some(member) = members.get(name) {
                walk(member_schema, member, &child_path(path, name), errors);
            }
        }
    }
    match schema.get("additionalProperties") {
        Some(Value::Bool(false)) => {
            for (name, member) in members {
                if !declared.is_some_and(|declared| declared.contains_key(name)) {
                    errors.push(
                        FieldError::new(child_path(path, name), UNKNOWN_PROPERTY_MESSAGE)
                            .with_value(member.clone()),
                    );
                }
            }
        }
        Some(extra @ Value::Object(_)) => {
            for (name, member) in members {
                if !declared.is_some_and(|declared| declared.contains_key(name)) {
                    walk(extra, member, &child_path(path, name), errors);
                }
            }
        }
        _ => {}
    }
}

/// Applies `oneOf`/`anyOf` branches that consist only of `required` lists.
fn check_alternatives(
    schema: &Value,
    members: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<FieldError>,
) {
    for (keyword, exactly_one) in [("oneOf", true), ("anyOf", false)] {
        let Some(branches) = schema.get(keyword).and_then(Value::as_array) else {
            continue;
        };
        let required_sets: Vec<Vec<&str>> =
            branches.iter().map(|branch| string_list(branch.get("required"))).collect();
        if required_sets.iter().any(Vec::is_empty) {
            continue;
        }
        let satisfied = required_sets
            .iter()
            .filter(|set| set.iter().all(|name| members.contains_key(*name)))
            .count();
        let options: Vec<String> = required_sets.iter().map(|set| set.join("+")).collect();
        if exactly_one && satisfied != 1 {
            errors.push(FieldError::new(
                or_root(path.to_string()),
                format!("Expected exactly one of: {}", options.join(", ")),
            ));
        } else if !exactly_one && satisfied == 0 {
            errors.push(FieldError::new(
                or_root(path.to_string()),
                format!("Expected at least one of: {}", options.join(", ")),
            ));
        }
    }
}

/// Applies inclusive `minimum` and `maximum`.
fn check_bounds(
    schema: &Value,
    number: f64,
    value: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) {
    if let Some(minimum) = schema.get("minimum").and_then(Value::as_f64)
        && number < minimum
    {
        errors.push(
            FieldError::new(or_root(path.to_string()), format!("Must be at least {minimum}"))
                .with_value(value.clone()),
        );
    }
    if let Some(maximum) = schema.get("maximum").and_then(Value::as_f64)
        && number > maximum
    {
        errors.push(
            FieldError::new(or_root(path.to_string()), format!("Must be at most {maximum}"))
                .with_value(value.clone()),
        );
    }
}

/// Returns true when `value` has the JSON Schema type `expected`.
fn matches_type(expected: &str, value: &Value) -> bool {
    match expected {
        "object" => value.is_object(),
        "array" => value.is_array(),
        "string" => value.is_string(),
        "boolean" => value.is_boolean(),
        "number" => value.is_number(),
        "integer" => {
            value.is_i64()
                || value.is_u64()
                || value.as_f64().is_some_and(|number| number.fract().abs() < f64::EPSILON)
        }
        "null" => value.is_null(),
        _ => true,
    }
}

/// Reads an optional array of strings.
fn string_list(value: Option<&Value>) -> Vec<&str> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}
