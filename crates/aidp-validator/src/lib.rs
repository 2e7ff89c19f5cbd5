// crates/aidp-validator/src/lib.rs
// ============================================================================
// Module: AIDP Validator Library
// Description: Configurable two-stage validation for AIDP entities.
// Purpose: Turn untrusted JSON payloads into field-addressed error reports.
// Dependencies: aidp-core, aidp-contract, jsonschema, serde, toml, tracing
// ============================================================================

//! ## Overview
//! `aidp-validator` checks candidate payloads against the published entity
//! schemas and then against business rules over the typed entity. Every
//! finding is a [`FieldError`] with a dotted field path; entity problems are
//! never returned as `Err`.
//!
//! Two structural backends share one pipeline through [`StructuralCheck`]:
//! [`SchemaCheck`] compiles the schema documents with `jsonschema`, and
//! [`PresenceCheck`] interprets the presence and type keywords of the same
//! documents directly. Both read the same `required` sets.
//!
//! Configuration comes from `aidp.toml` (see [`ValidatorConfig::load`]).

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod coerce;
pub mod config;
pub mod pipeline;
pub mod presence;
pub mod report;
pub mod rules;
pub mod structural;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::ValidationConfig;
pub use config::ValidatorConfig;
pub use pipeline::AidpValidator;
pub use pipeline::ValidatorError;
pub use presence::PresenceCheck;
pub use report::FieldError;
pub use report::ValidationReport;
pub use structural::SchemaCheck;
pub use structural::StructuralCheck;
