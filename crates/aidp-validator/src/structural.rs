// crates/aidp-validator/src/structural.rs
// ============================================================================
// Module: Structural Checks
// Description: Schema-stage backends and field path rendering.
// Purpose: Translate structural failures into uniform field errors.
// Dependencies: aidp-contract, aidp-core, jsonschema, serde_json
// ============================================================================

//! ## Overview
//! The structural stage checks shape, types, required members, and the
//! bounds that live in the schema documents. [`SchemaCheck`] compiles each
//! entity schema once with `jsonschema` (draft 2020-12) and reuses it for
//! every call. Failures are collected exhaustively.
//!
//! Instance locations are rendered as dotted paths with bracketed array
//! indices (`services[0].pricing.amount`). A missing required member is
//! addressed at the member itself (`customer.email`), not at its parent.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use aidp_contract::schemas;
use aidp_core::EntityKind;
use jsonschema::Draft;
use jsonschema::Validator;
use jsonschema::error::ValidationErrorKind;
use serde_json::Value;
use tracing::debug;

use crate::config::ValidationConfig;
use crate::pipeline::ValidatorError;
use crate::report::FieldError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Field label used for findings about the whole payload.
pub const ROOT_FIELD: &str = "$";
/// Message for a missing required member.
pub const REQUIRED_MESSAGE: &str = "Required field missing";
/// Message for an undeclared member when additional properties are closed.
pub const UNKNOWN_PROPERTY_MESSAGE: &str = "Unknown property";

// ============================================================================
// SECTION: Backend Trait
// ============================================================================

/// A structural validation backend.
///
/// Implementations are immutable after construction and shareable across
/// threads.
pub trait StructuralCheck: Send + Sync {
    /// Returns every structural finding for `candidate`, in document order.
    fn check(&self, kind: EntityKind, candidate: &Value) -> Vec<FieldError>;

    /// Short backend label used in logs.
    fn backend(&self) -> &'static str;
}

// ============================================================================
// SECTION: Schema Backend
// ============================================================================

/// Structural backend backed by compiled JSON Schema validators.
pub struct SchemaCheck {
    /// One compiled validator per entity kind.
    validators: BTreeMap<EntityKind, Validator>,
}

impl SchemaCheck {
    /// Compiles every entity schema under `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::SchemaCompile`] when a schema document fails
    /// to compile.
    pub fn new(config: &ValidationConfig) -> Result<Self, ValidatorError> {
        let mut validators = BTreeMap::new();
        for (kind, schema) in prepared_schemas(config) {
            let validator = jsonschema::options()
                .with_draft(Draft::Draft202012)
                .should_validate_formats(config.validate_formats)
                .build(&schema)
                .map_err(|err| ValidatorError::SchemaCompile(format!("{kind}: {err}")))?;
            validators.insert(kind, validator);
        }
        debug!(schemas = validators.len(), "compiled entity schemas");
        Ok(Self {
            validators,
        })
    }
}

impl StructuralCheck for SchemaCheck {
    fn check(&self, kind: EntityKind, candidate: &Value) -> Vec<FieldError> {
        let Some(validator) = self.validators.get(&kind) else {
            return vec![FieldError::new(ROOT_FIELD, format!("no schema compiled for {kind}"))];
        };
        let mut errors = Vec::new();
        for error in validator.iter_errors(candidate) {
            let pointer = error.instance_path().to_string();
            let parent = field_path(candidate, &pointer);
            match error.kind() {
                ValidationErrorKind::Required {
                    property,
                } => {
                    let name =
                        property.as_str().map_or_else(|| property.to_string(), str::to_string);
                    errors.push(FieldError::new(child_path(&parent, &name), REQUIRED_MESSAGE));
                }
                ValidationErrorKind::AdditionalProperties {
                    unexpected,
                } => {
                    for name in unexpected {
                        let field = child_path(&parent, name);
                        let value = candidate.pointer(&format!("{pointer}/{}", escape(name)));
                        let mut finding = FieldError::new(field, UNKNOWN_PROPERTY_MESSAGE);
                        finding.value = value.cloned();
                        errors.push(finding);
                    }
                }
                _ => errors.push(
                    FieldError::new(or_root(parent), error.to_string())
                        .with_value(Value::clone(&error.instance())),
                ),
            }
        }
        errors
    }

    fn backend(&self) -> &'static str {
        "jsonschema"
    }
}

// ============================================================================
// SECTION: Schema Preparation
// ============================================================================

/// Returns every entity schema adjusted for `config`.
///
/// When additional properties are disallowed, every object schema that
/// declares `properties` is closed with `additionalProperties: false`.
#[must_use]
pub fn prepared_schemas(config: &ValidationConfig) -> BTreeMap<EntityKind, Value> {
    EntityKind::all()
        .iter()
        .map(|kind| {
            let mut schema = schemas::entity_schema(*kind);
            if !config.allow_additional {
                close_objects(&mut schema);
            }
            (*kind, schema)
        })
        .collect()
}

/// Recursively closes object schemas.
fn close_objects(schema: &mut Value) {
    let Value::Object(map) = schema else {
        return;
    };
    if map.contains_key("properties") {
        map.insert(String::from("additionalProperties"), Value::Bool(false));
    }
    if let Some(Value::Object(properties)) = map.get_mut("properties") {
        for property in properties.values_mut() {
            close_objects(property);
        }
    }
    if let Some(items) = map.get_mut("items") {
        close_objects(items);
    }
}

// ============================================================================
// SECTION: Field Paths
// ============================================================================

/// Renders a JSON pointer into `root` as a dotted field path.
///
/// Segments that index into arrays render as `[i]`; all others as `.key`.
/// The empty pointer renders as the empty string.
#[must_use]
pub fn field_path(root: &Value, pointer: &str) -> String {
    let mut path = String::new();
    let mut current = Some(root);
    for raw in pointer.split('/').skip(1) {
        let segment = unescape(raw);
        match current {
            Some(Value::Array(items)) => {
                path.push('[');
                path.push_str(&segment);
                path.push(']');
                current = segment.parse::<usize>().ok().and_then(|index| items.get(index));
            }
            other => {
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(&segment);
                current = other.and_then(|value| value.get(segment.as_str()));
            }
        }
    }
    path
}

/// Joins a parent field path and a member name.
#[must_use]
pub fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() { name.to_string() } else { format!("{parent}.{name}") }
}

/// Substitutes [`ROOT_FIELD`] for the empty path.
#[must_use]
pub fn or_root(path: String) -> String {
    if path.is_empty() { ROOT_FIELD.to_string() } else { path }
}

/// Decodes a JSON pointer segment.
fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// Encodes a member name as a JSON pointer segment.
fn escape(name: &str) -> String {
    name.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests;
