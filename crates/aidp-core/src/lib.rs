// crates/aidp-core/src/lib.rs
// ============================================================================
// Module: AIDP Core
// Description: Entity model, identifiers, tool names, and pure utilities.
// Purpose: Shared vocabulary for the AIDP contract and validator crates.
// Dependencies: serde, serde_jcs, sha2, time, regex, url, tracing
// ============================================================================

//! ## Overview
//! AIDP (AI Discovery Protocol) describes local businesses to AI assistants.
//! This crate holds the typed entities (profiles, bookings, reviews,
//! analytics), the canonical tool names, content hashing, and small pure
//! helpers for analytics, opening hours, field checks, and importing listings
//! from other directories.
//! Invariants:
//! - Entities are plain values; range and cross-field rules are enforced by the validator crate,
//!   not by constructors.
//! - Every helper is synchronous and free of shared state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod tooling;
pub mod utils;

// ============================================================================
// SECTION: Protocol Constants
// ============================================================================

/// Crate and protocol package version.
pub const VERSION: &str = "1.0.0";

/// Wire protocol version.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Base URL under which schema documents are published.
pub const SCHEMA_BASE_URL: &str = "https://schemas.aidp.dev/v1";

/// Protocol documentation home.
pub const DOCUMENTATION_URL: &str = "https://docs.aidp.dev";

/// Source repository.
pub const REPOSITORY_URL: &str = "https://github.com/gugga7/aidp";

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;
pub use crate::tooling::ToolCategory;
pub use crate::tooling::ToolName;
