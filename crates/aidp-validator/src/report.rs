// crates/aidp-validator/src/report.rs
// ============================================================================
// Module: Validation Reports
// Description: Field-addressed findings and the per-call validation report.
// Purpose: One error shape for every validation stage and backend.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`ValidationReport`] is the only output of validation. `valid` is true
//! exactly when `errors` is empty; `warnings` carry rule findings demoted by
//! permissive mode and never affect validity.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted field path with bracketed indices, e.g. `services[0].pricing.amount`.
    pub field: String,
    /// Human-readable message.
    pub message: String,
    /// Offending value, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldError {
    /// Creates a finding without an offending value.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Attaches the offending value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Outcome of validating one candidate payload.
///
/// # Invariants
/// - `valid == errors.is_empty()`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no errors were found.
    pub valid: bool,
    /// Findings that reject the payload.
    #[serde(default)]
    pub errors: Vec<FieldError>,
    /// Findings reported without rejecting the payload.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FieldError>,
}

impl ValidationReport {
    /// Builds a report from errors and warnings.
    #[must_use]
    pub fn new(errors: Vec<FieldError>, warnings: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Returns the report for a clean payload.
    #[must_use]
    pub fn ok() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Returns true when an error is addressed at `field`.
    #[must_use]
    pub fn has_error_at(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// Returns the distinct error field paths in report order.
    #[must_use]
    pub fn error_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::with_capacity(self.errors.len());
        for error in &self.errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(error.field.as_str());
            }
        }
        fields
    }
}
