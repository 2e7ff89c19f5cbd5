// crates/aidp-contract/src/contract.rs
// ============================================================================
// Module: Contract Bundle
// Description: Renders, writes, and verifies the published AIDP bundle.
// Purpose: One hashed directory holding every schema, sample, and tool listing.
// Dependencies: aidp-core, cap-std, serde, serde_jcs, serde_json
// ============================================================================

//! ## Overview
//! A bundle is laid out as:
//!
//! ```text
//! index.json                       manifest with one digest per artifact
//! tooling.json / tooling.md        tool contracts, machine and human form
//! schemas/<entity>.schema.json     one JSON Schema per entity
//! samples/<entity>.json            one valid payload per entity
//! ```
//!
//! JSON artifacts use canonical key order and pretty printing with a trailing
//! newline, so rebuilding an unchanged contract reproduces the same bytes.
//! All disk access goes through a `cap-std` directory handle opened on the
//! bundle root. Verification is fail-closed: a missing, stale, symlinked,
//! or stray file rejects the whole directory.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use aidp_core::EntityKind;
use aidp_core::PROTOCOL_VERSION;
use aidp_core::hashing::DEFAULT_HASH_ALGORITHM;
use aidp_core::hashing::HashAlgorithm;
use aidp_core::hashing::hash_bytes;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Serialize;

use crate::ContractError;
use crate::samples;
use crate::schemas;
use crate::tooling;
use crate::types::ContractArtifact;
use crate::types::ContractBundle;
use crate::types::ContractManifest;
use crate::types::ManifestArtifact;

// ============================================================================
// SECTION: Layout
// ============================================================================

/// Manifest location inside the bundle.
const MANIFEST_PATH: &str = "index.json";
/// Default bundle location relative to the working directory.
const DEFAULT_OUTPUT_DIR: &str = "docs/generated/aidp";
/// Content type of JSON artifacts.
const JSON_CONTENT_TYPE: &str = "application/json";
/// Content type of markdown artifacts.
const MARKDOWN_CONTENT_TYPE: &str = "text/markdown";

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Renders the AIDP contract and syncs it with a bundle directory.
///
/// # Invariants
/// - [`ContractBuilder::build`] returns artifacts sorted by path with no duplicates.
/// - Nothing outside the output directory is ever written.
#[derive(Debug, Clone)]
pub struct ContractBuilder {
    /// Bundle root used by [`ContractBuilder::write`].
    output_dir: PathBuf,
    /// Version recorded in the manifest.
    contract_version: String,
    /// Digest algorithm for manifest entries.
    hash_algorithm: HashAlgorithm,
}

impl ContractBuilder {
    /// Creates a builder for the bundle at `output_dir`.
    #[must_use]
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            contract_version: aidp_core::VERSION.to_string(),
            hash_algorithm: DEFAULT_HASH_ALGORITHM,
        }
    }

    /// Returns `docs/generated/aidp`.
    #[must_use]
    pub fn default_output_dir() -> PathBuf {
        PathBuf::from(DEFAULT_OUTPUT_DIR)
    }

    /// Returns the bundle root.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Renders the bundle in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when an artifact fails to serialize or two
    /// artifacts share a path.
    pub fn build(&self) -> Result<ContractBundle, ContractError> {
        let contracts = tooling::tool_contracts();
        let mut artifacts = Vec::with_capacity(2 + EntityKind::all().len() * 2);
        artifacts.push(ContractArtifact::json("tooling.json", &contracts)?);
        let markdown = tooling::tooling_markdown(&contracts);
        artifacts.push(ContractArtifact::markdown("tooling.md", markdown));
        for &kind in EntityKind::all() {
            let schema_path = format!("schemas/{}", kind.schema_file_name());
            artifacts.push(ContractArtifact::json(&schema_path, &schemas::entity_schema(kind))?);
            let sample_path = format!("samples/{}.json", kind.slug());
            artifacts.push(ContractArtifact::json(&sample_path, &samples::sample(kind))?);
        }
        artifacts.sort_by(|lhs, rhs| lhs.path.cmp(&rhs.path));
        if let Some(pair) = artifacts.windows(2).find(|pair| pair[0].path == pair[1].path) {
            return Err(ContractError::Generation(format!(
                "two artifacts render to {}",
                pair[0].path
            )));
        }

        let manifest =
            ContractManifest::describe(&self.contract_version, self.hash_algorithm, &artifacts);
        Ok(ContractBundle {
            manifest,
            artifacts,
        })
    }

    /// Writes the bundle to [`ContractBuilder::output_dir`].
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when rendering or writing fails.
    pub fn write(&self) -> Result<ContractManifest, ContractError> {
        self.write_to(&self.output_dir)
    }

    /// Writes the bundle under `output_dir`, creating it when absent.
    ///
    /// Existing artifacts are overwritten in place; the manifest is written
    /// last.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::OutputPath`] when `output_dir` or an artifact
    /// location is unusable, and [`ContractError::Io`] on write failures.
    pub fn write_to(&self, output_dir: &Path) -> Result<ContractManifest, ContractError> {
        let bundle = self.build()?;
        let root = BundleDir::create(output_dir)?;
        for artifact in &bundle.artifacts {
            root.put(&artifact.path, &artifact.bytes)?;
        }
        root.put(MANIFEST_PATH, &pretty_canonical_json(&bundle.manifest)?)?;
        Ok(bundle.manifest)
    }

    /// Checks that `output_dir` holds exactly the bundle this builder renders.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Generation`] for a missing, stale, or stray
    /// file and [`ContractError::OutputPath`] for a symlink or a missing
    /// bundle root.
    pub fn verify_output(&self, output_dir: &Path) -> Result<(), ContractError> {
        let bundle = self.build()?;
        let root = BundleDir::existing(output_dir)?;
        for artifact in &bundle.artifacts {
            root.confirm(&artifact.path, &artifact.bytes)?;
        }
        root.confirm(MANIFEST_PATH, &pretty_canonical_json(&bundle.manifest)?)?;

        let published: BTreeSet<&str> = bundle
            .artifacts
            .iter()
            .map(|artifact| artifact.path.as_str())
            .chain([MANIFEST_PATH])
            .collect();
        let on_disk = root.inventory()?;
        if let Some(stray) = on_disk.iter().find(|path| !published.contains(path.as_str())) {
            return Err(ContractError::Generation(format!("unexpected artifact: {stray}")));
        }
        Ok(())
    }
}

impl Default for ContractBuilder {
    fn default() -> Self {
        Self::new(Self::default_output_dir())
    }
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

impl ContractArtifact {
    /// Renders `value` as pretty canonical JSON.
    fn json<T: Serialize>(path: &str, value: &T) -> Result<Self, ContractError> {
        Ok(Self {
            path: path.to_string(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            bytes: pretty_canonical_json(value)?,
        })
    }

    /// Wraps rendered markdown.
    fn markdown(path: &str, text: String) -> Self {
        Self {
            path: path.to_string(),
            content_type: MARKDOWN_CONTENT_TYPE.to_string(),
            bytes: text.into_bytes(),
        }
    }
}

impl ContractManifest {
    /// Digests each artifact in the order given.
    fn describe(version: &str, algorithm: HashAlgorithm, artifacts: &[ContractArtifact]) -> Self {
        Self {
            contract_version: version.to_string(),
            protocol_version: PROTOCOL_VERSION.to_string(),
            hash_algorithm: algorithm,
            artifacts: artifacts
                .iter()
                .map(|artifact| ManifestArtifact {
                    path: artifact.path.clone(),
                    content_type: artifact.content_type.clone(),
                    digest: hash_bytes(algorithm, &artifact.bytes),
                })
                .collect(),
        }
    }
}

/// Serializes `value` with RFC 8785 key order, pretty printed, newline terminated.
pub(crate) fn pretty_canonical_json<T: Serialize>(value: &T) -> Result<Vec<u8>, ContractError> {
    let canonical = serde_jcs::to_vec(value).map_err(serialization_error)?;
    let reordered: serde_json::Value =
        serde_json::from_slice(&canonical).map_err(serialization_error)?;
    let mut bytes = serde_json::to_vec_pretty(&reordered).map_err(serialization_error)?;
    bytes.push(b'\n');
    Ok(bytes)
}

// ============================================================================
// SECTION: Bundle Directory
// ============================================================================

/// Capability handle on a bundle root.
struct BundleDir {
    /// Directory handle; every path below is resolved relative to it.
    dir: Dir,
}

impl BundleDir {
    /// Opens `root`, creating it and its parents when absent.
    fn create(root: &Path) -> Result<Self, ContractError> {
        if !check_root(root)? {
            Dir::create_ambient_dir_all(root, ambient_authority()).map_err(io_error)?;
        }
        Self::open(root)
    }

    /// Opens an existing `root`.
    fn existing(root: &Path) -> Result<Self, ContractError> {
        if !check_root(root)? {
            return Err(ContractError::OutputPath(root.to_path_buf()));
        }
        Self::open(root)
    }

    /// Acquires the directory handle.
    fn open(root: &Path) -> Result<Self, ContractError> {
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(io_error)?;
        Ok(Self {
            dir,
        })
    }

    /// Writes `bytes` at `path`, creating intermediate directories.
    fn put(&self, path: &str, bytes: &[u8]) -> Result<(), ContractError> {
        let relative = artifact_location(path)?;
        if let Some(parent) = relative.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            self.dir.create_dir_all(parent).map_err(io_error)?;
        }
        match self.dir.symlink_metadata(&relative) {
            Ok(existing) if existing.is_symlink() || existing.is_dir() => {
                return Err(ContractError::OutputPath(relative));
            }
            Err(err) if err.kind() != ErrorKind::NotFound => return Err(io_error(err)),
            _ => {}
        }
        self.dir.write(&relative, bytes).map_err(io_error)
    }

    /// Checks that `path` is a regular file holding exactly `expected`.
    ///
    /// The size is compared before reading so an oversized file is never
    /// loaded.
    fn confirm(&self, path: &str, expected: &[u8]) -> Result<(), ContractError> {
        let relative = artifact_location(path)?;
        let metadata = match self.dir.symlink_metadata(&relative) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ContractError::Generation(format!("missing artifact: {path}")));
            }
            Err(err) => return Err(io_error(err)),
        };
        if !metadata.is_file() {
            return Err(ContractError::OutputPath(relative));
        }
        let stale = || ContractError::Generation(format!("stale artifact: {path}"));
        if !u64::try_from(expected.len()).is_ok_and(|len| len == metadata.len()) {
            return Err(stale());
        }
        if self.dir.read(&relative).map_err(io_error)? != expected {
            return Err(stale());
        }
        Ok(())
    }

    /// Lists every regular file below the root as a `/`-separated path.
    ///
    /// A symlink anywhere in the tree is an error.
    fn inventory(&self) -> Result<BTreeSet<String>, ContractError> {
        let mut files = BTreeSet::new();
        let mut pending = vec![(self.dir.try_clone().map_err(io_error)?, String::new())];
        while let Some((dir, prefix)) = pending.pop() {
            for entry in dir.entries().map_err(io_error)? {
                let entry = entry.map_err(io_error)?;
                let name = entry.file_name();
                let name = name.to_str().ok_or_else(|| {
                    ContractError::OutputPath(Path::new(&prefix).join(entry.file_name()))
                })?;
                let path =
                    if prefix.is_empty() { name.to_string() } else { format!("{prefix}/{name}") };
                let file_type = entry.file_type().map_err(io_error)?;
                if file_type.is_symlink() {
                    return Err(ContractError::OutputPath(PathBuf::from(path)));
                }
                if file_type.is_dir() {
                    pending.push((entry.open_dir().map_err(io_error)?, path));
                } else if file_type.is_file() {
                    files.insert(path);
                }
            }
        }
        Ok(files)
    }
}

/// Validates a bundle root and reports whether it already exists.
///
/// Empty paths, `..` components, symlinks, and non-directories are rejected.
fn check_root(root: &Path) -> Result<bool, ContractError> {
    let traverses = root.components().any(|component| component == Component::ParentDir);
    if root.as_os_str().is_empty() || traverses {
        return Err(ContractError::OutputPath(root.to_path_buf()));
    }
    match std::fs::symlink_metadata(root) {
        Ok(metadata) if metadata.is_dir() && !metadata.is_symlink() => Ok(true),
        Ok(_) => Err(ContractError::OutputPath(root.to_path_buf())),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(io_error(err)),
    }
}

/// Converts an artifact path into a relative location inside the bundle.
fn artifact_location(path: &str) -> Result<PathBuf, ContractError> {
    let location = PathBuf::from(path);
    let plain = location.components().all(|component| matches!(component, Component::Normal(_)));
    if path.trim().is_empty() || !plain {
        return Err(ContractError::Generation(format!(
            "artifact path is not bundle-relative: '{path}'"
        )));
    }
    Ok(location)
}

/// Maps a serializer failure into [`ContractError::Serialization`].
fn serialization_error(err: impl std::fmt::Display) -> ContractError {
    ContractError::Serialization(err.to_string())
}

/// Maps an I/O failure into [`ContractError::Io`].
fn io_error(err: std::io::Error) -> ContractError {
    ContractError::Io(err.to_string())
}

#[cfg(test)]
mod tests;
