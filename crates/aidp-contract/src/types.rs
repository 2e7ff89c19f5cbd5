// crates/aidp-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Manifest, bundle, and tool descriptor shapes.
// Purpose: Serializable forms of the published AIDP contract artifacts.
// Dependencies: aidp-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Shapes written into and read back from a contract bundle: the
//! `index.json` manifest with per-artifact digests, the in-memory bundle,
//! and tool descriptors with their examples.

// ============================================================================
// SECTION: Imports
// ============================================================================

use aidp_core::ToolCategory;
use aidp_core::ToolName;
use aidp_core::hashing::HashAlgorithm;
use aidp_core::hashing::HashDigest;
use aidp_core::hashing::HashError;
use aidp_core::hashing::hash_canonical_json;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Manifest & Bundle
// ============================================================================

/// Manifest written as `index.json` next to the bundle artifacts.
///
/// # Invariants
/// - `artifacts` are ordered by `path` when produced by [`crate::ContractBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractManifest {
    /// Crate version that generated the bundle.
    pub contract_version: String,
    /// Wire protocol version.
    pub protocol_version: String,
    /// Hash algorithm used for artifact digests.
    pub hash_algorithm: HashAlgorithm,
    /// Artifact entries, ordered by path.
    pub artifacts: Vec<ManifestArtifact>,
}

impl ContractManifest {
    /// Returns the digest of the RFC 8785 canonical form of the manifest.
    ///
    /// Two bundles with equal manifests share this digest regardless of how
    /// `index.json` was pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the manifest cannot be canonicalized.
    pub fn digest(&self) -> Result<HashDigest, HashError> {
        hash_canonical_json(self.hash_algorithm, self)
    }
}

/// Manifest entry for one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestArtifact {
    /// Relative path under the output directory.
    pub path: String,
    /// MIME content type.
    pub content_type: String,
    /// Digest of the artifact bytes.
    pub digest: HashDigest,
}

/// Generated bundle held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractBundle {
    /// Manifest derived from `artifacts`.
    pub manifest: ContractManifest,
    /// Artifact payloads.
    pub artifacts: Vec<ContractArtifact>,
}

/// Artifact payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractArtifact {
    /// Relative path under the output directory.
    pub path: String,
    /// MIME content type.
    pub content_type: String,
    /// Serialized bytes.
    pub bytes: Vec<u8>,
}

// ============================================================================
// SECTION: Tool Descriptors
// ============================================================================

/// Tool descriptor as listed to an assistant runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Tool name.
    pub name: ToolName,
    /// Description shown to the model.
    pub description: String,
    /// JSON Schema for the tool input.
    pub input_schema: Value,
}

/// Tool descriptor with documentation extras.
///
/// # Invariants
/// - Every example input validates against `input_schema`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolContract {
    /// Tool name.
    pub name: ToolName,
    /// Tool category.
    pub category: ToolCategory,
    /// Description shown to the model.
    pub description: String,
    /// JSON Schema for the tool input.
    pub input_schema: Value,
    /// Example invocations.
    pub examples: Vec<ToolExample>,
    /// Usage notes.
    pub notes: Vec<String>,
}

impl ToolContract {
    /// Returns the listing form of the contract.
    #[must_use]
    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name,
            description: self.description.clone(),
            input_schema: self.input_schema.clone(),
        }
    }
}

/// Example tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolExample {
    /// Short description of the scenario.
    pub description: String,
    /// Example input payload.
    pub input: Value,
}
