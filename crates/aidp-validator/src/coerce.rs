// crates/aidp-validator/src/coerce.rs
// ============================================================================
// Module: Type Coercion
// Description: Schema-directed coercion of string scalars.
// Purpose: Accept "42" and "true" where the schema expects a number or boolean.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Coercion runs before the structural stage when `coerce_types` is enabled.
//! Only strings are rewritten, and only when the schema at that location
//! names `integer`, `number`, or `boolean` and the text parses cleanly.
//! Everything else is left for the structural stage to report.

use serde_json::Number;
use serde_json::Value;

/// Returns `value` with string scalars coerced to the types `schema` expects.
#[must_use]
pub fn coerce_to_schema(schema: &Value, mut value: Value) -> Value {
    coerce_in_place(schema, &mut value);
    value
}

/// Coerces `value` in place.
fn coerce_in_place(schema: &Value, value: &mut Value) {
    match value {
        Value::String(text) => {
            let expected = schema.get("type").and_then(Value::as_str);
            if let Some(coerced) = expected.and_then(|expected| coerce_scalar(expected, text)) {
                *value = coerced;
            }
        }
        Value::Object(members) => {
            let declared = schema.get("properties").and_then(Value::as_object);
            let extra = schema.get("additionalProperties").filter(|extra| extra.is_object());
            for (name, member) in members.iter_mut() {
                let member_schema = declared.and_then(|declared| declared.get(name)).or(extra);
                if let Some(member_schema) = member_schema {
                    coerce_in_place(member_schema, member);
                }
            }
        }
        Value::Array(items) => {
            if let Some(item_schema) = schema.get("items") {
                for item in items {
                    coerce_in_place(item_schema, item);
                }
            }
        }
        _ => {}
    }
}

/// Parses `text` as the scalar type `expected`.
fn coerce_scalar(expected: &str, text: &str) -> Option<Value> {
    let trimmed = text.trim();
    match expected {
        "integer" => trimmed
            .parse::<i64>()
            .ok()
            .map(Value::from)
            .or_else(|| trimmed.parse::<u64>().ok().map(Value::from)),
        "number" => {
            if let Ok(integer) = trimmed.parse::<i64>() {
                return Some(Value::from(integer));
            }
            trimmed.parse::<f64>().ok().and_then(Number::from_f64).map(Value::Number)
        }
        "boolean" => match trimmed {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        _ => None,
    }
}
