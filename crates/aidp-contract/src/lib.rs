// crates/aidp-contract/src/lib.rs
// ============================================================================
// Module: AIDP Contract
// Description: Schema documents, tool descriptors, and contract bundle output.
// Purpose: Single source of truth for the AIDP wire contract.
// Dependencies: aidp-core, cap-std, serde, serde_json, serde_jcs, thiserror
// ============================================================================

//! ## Overview
//! This crate owns everything AIDP publishes: one JSON Schema (draft 2020-12)
//! per entity, the assistant tool descriptors, sample entity payloads, and a
//! [`ContractBuilder`] that renders all of it into a hashed, deterministic
//! bundle on disk.
//! Invariants:
//! - Every schema carries a stable `$id` under [`aidp_core::SCHEMA_BASE_URL`].
//! - Tool and artifact ordering is canonical so generated output diffs cleanly.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod contract;
pub mod samples;
pub mod schemas;
pub mod tooling;
pub mod types;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

use std::path::PathBuf;

pub use contract::ContractBuilder;
use thiserror::Error;
pub use tooling::find_tool;
pub use tooling::tool_contract;
pub use tooling::tool_contracts;
pub use tooling::tool_definitions;
pub use tooling::tooling_markdown;
pub use tooling::tools_in_category;
pub use types::ContractBundle;
pub use types::ContractManifest;
pub use types::ToolContract;
pub use types::ToolDefinition;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while generating or verifying contract artifacts.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Filesystem failure.
    #[error("contract io error: {0}")]
    Io(String),
    /// Artifact serialization failure.
    #[error("contract serialization error: {0}")]
    Serialization(String),
    /// Bundle generation or verification failure.
    #[error("contract generation error: {0}")]
    Generation(String),
    /// Output path is unusable (empty, traversing, or a symlink).
    #[error("invalid contract output path: {0}")]
    OutputPath(PathBuf),
}
