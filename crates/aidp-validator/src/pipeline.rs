// crates/aidp-validator/src/pipeline.rs
// ============================================================================
// Module: Validation Pipeline
// Description: The two-stage AIDP validator.
// Purpose: Structural check, typed decode, then business rules, in one call.
// Dependencies: aidp-core, serde, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! [`AidpValidator`] is built once from a [`ValidatorConfig`] and is
//! immutable afterwards; share it by reference across threads. Each call:
//!
//! 1. optionally coerces string scalars toward the schema types,
//! 2. runs the structural backend and stops if it reports anything,
//! 3. decodes the payload into the typed entity,
//! 4. runs the business rules for that entity.
//!
//! In strict mode rule findings are errors; in permissive mode they are
//! warnings and the payload stays valid.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use aidp_core::BookingRequest;
use aidp_core::BookingResponse;
use aidp_core::BusinessProfile;
use aidp_core::EntityKind;
use aidp_core::IntentJourney;
use aidp_core::Review;
use aidp_core::UpstreamMetrics;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use tracing::info;

use crate::coerce::coerce_to_schema;
use crate::config::ValidationConfig;
use crate::config::ValidatorConfig;
use crate::presence::PresenceCheck;
use crate::report::FieldError;
use crate::report::ValidationReport;
use crate::rules;
use crate::structural::ROOT_FIELD;
use crate::structural::SchemaCheck;
use crate::structural::StructuralCheck;
use crate::structural::prepared_schemas;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while constructing a validator.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Configuration failed validation.
    #[error("invalid validator config: {0}")]
    Config(String),
    /// An entity schema failed to compile.
    #[error("schema compilation failed: {0}")]
    SchemaCompile(String),
}

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Configured two-stage validator for every AIDP entity.
pub struct AidpValidator {
    /// Structural stage backend.
    structural: Box<dyn StructuralCheck>,
    /// Schemas used for coercion, present only when coercion is enabled.
    coercion_schemas: BTreeMap<EntityKind, Value>,
    /// Validation behaviour.
    settings: ValidationConfig,
}

impl AidpValidator {
    /// Builds a validator with the compiled JSON Schema backend.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError`] when the config is inconsistent or a schema
    /// fails to compile.
    pub fn new(config: &ValidatorConfig) -> Result<Self, ValidatorError> {
        let backend = SchemaCheck::new(&config.validation)?;
        Self::with_backend(config, Box::new(backend))
    }

    /// Builds a validator with the schema-library-free presence backend.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Config`] when the config is inconsistent.
    pub fn with_presence_check(config: &ValidatorConfig) -> Result<Self, ValidatorError> {
        Self::with_backend(config, Box::new(PresenceCheck::new(&config.validation)))
    }

    /// Builds a validator around a caller-supplied structural backend.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Config`] when the config is inconsistent.
    pub fn with_backend(
        config: &ValidatorConfig,
        structural: Box<dyn StructuralCheck>,
    ) -> Result<Self, ValidatorError> {
        config.validate().map_err(|err| ValidatorError::Config(err.to_string()))?;
        let settings = config.validation.clone();
        let coercion_schemas =
            if settings.coerce_types { prepared_schemas(&settings) } else { BTreeMap::new() };
        info!(
            backend = structural.backend(),
            strict = settings.strict,
            allow_additional = settings.allow_additional,
            validate_formats = settings.validate_formats,
            coerce_types = settings.coerce_types,
            "constructed aidp validator"
        );
        Ok(Self {
            structural,
            coercion_schemas,
            settings,
        })
    }

    /// Returns the structural backend label.
    #[must_use]
    pub fn backend(&self) -> &'static str {
        self.structural.backend()
    }

    /// Returns the active validation settings.
    #[must_use]
    pub const fn settings(&self) -> &ValidationConfig {
        &self.settings
    }

    /// Validates a candidate payload as `kind`.
    #[must_use]
    pub fn validate(&self, kind: EntityKind, candidate: &Value) -> ValidationReport {
        let coerced = self
            .coercion_schemas
            .get(&kind)
            .map(|schema| coerce_to_schema(schema, candidate.clone()));
        let candidate = coerced.as_ref().unwrap_or(candidate);

        let structural = self.structural.check(kind, candidate);
        if !structural.is_empty() {
            debug!(
                entity = kind.as_str(),
                stage = "structural",
                errors = structural.len(),
                "entity rejected"
            );
            return ValidationReport::new(structural, Vec::new());
        }

        let findings = match rule_findings(kind, candidate) {
            Ok(findings) => findings,
            Err(decode_error) => {
                debug!(entity = kind.as_str(), stage = "decode", "entity rejected");
                return ValidationReport::new(vec![decode_error], Vec::new());
            }
        };
        let report = if self.settings.strict {
            ValidationReport::new(findings, Vec::new())
        } else {
            ValidationReport::new(Vec::new(), findings)
        };
        debug!(
            entity = kind.as_str(),
            valid = report.valid,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "entity validated"
        );
        report
    }

    /// Serializes a typed entity and validates it as `kind`.
    #[must_use]
    pub fn validate_entity<T: Serialize>(&self, kind: EntityKind, entity: &T) -> ValidationReport {
        match serde_json::to_value(entity) {
            Ok(value) => self.validate(kind, &value),
            Err(err) => ValidationReport::new(
                vec![FieldError::new(ROOT_FIELD, format!("entity failed to serialize: {err}"))],
                Vec::new(),
            ),
        }
    }

    /// Validates a business profile payload.
    #[must_use]
    pub fn validate_business_profile(&self, candidate: &Value) -> ValidationReport {
        self.validate(EntityKind::BusinessProfile, candidate)
    }

    /// Validates a booking request payload.
    #[must_use]
    pub fn validate_booking_request(&self, candidate: &Value) -> ValidationReport {
        self.validate(EntityKind::BookingRequest, candidate)
    }

    /// Validates a booking response payload.
    #[must_use]
    pub fn validate_booking_response(&self, candidate: &Value) -> ValidationReport {
        self.validate(EntityKind::BookingResponse, candidate)
    }

    /// Validates a review payload.
    #[must_use]
    pub fn validate_review(&self, candidate: &Value) -> ValidationReport {
        self.validate(EntityKind::Review, candidate)
    }

    /// Validates an upstream metrics payload.
    #[must_use]
    pub fn validate_upstream_metrics(&self, candidate: &Value) -> ValidationReport {
        self.validate(EntityKind::UpstreamMetrics, candidate)
    }

    /// Validates an intent journey payload.
    #[must_use]
    pub fn validate_intent_journey(&self, candidate: &Value) -> ValidationReport {
        self.validate(EntityKind::IntentJourney, candidate)
    }
}

// ============================================================================
// SECTION: Rule Dispatch
// ============================================================================

/// Decodes the candidate and runs the rules for `kind`.
fn rule_findings(kind: EntityKind, candidate: &Value) -> Result<Vec<FieldError>, FieldError> {
    Ok(match kind {
        EntityKind::BusinessProfile => {
            rules::business_profile_rules(&decode::<BusinessProfile>(kind, candidate)?)
        }
        EntityKind::BookingRequest => {
            rules::booking_request_rules(&decode::<BookingRequest>(kind, candidate)?)
        }
        EntityKind::BookingResponse => {
            rules::booking_response_rules(&decode::<BookingResponse>(kind, candidate)?)
        }
        EntityKind::Review => rules::review_rules(&decode::<Review>(kind, candidate)?),
        EntityKind::UpstreamMetrics => {
            rules::upstream_metrics_rules(&decode::<UpstreamMetrics>(kind, candidate)?)
        }
        EntityKind::IntentJourney => {
            rules::intent_journey_rules(&decode::<IntentJourney>(kind, candidate)?)
        }
    })
}

/// Decodes a structurally valid payload into its typed entity.
fn decode<T: DeserializeOwned>(kind: EntityKind, candidate: &Value) -> Result<T, FieldError> {
    T::deserialize(candidate).map_err(|err| {
        FieldError::new(ROOT_FIELD, format!("payload does not match the {kind} model: {err}"))
    })
}

#[cfg(test)]
mod tests;
