// crates/aidp-contract/src/contract/tests.rs
// ============================================================================
// Module: Contract Bundle Unit Tests
// Description: Write, rewrite, and fail-closed verification of bundle dirs.
// Purpose: Pin how drift, stray files, and unsafe paths are reported.
// Dependencies: aidp-contract, tempfile, std
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions and fixtures."
)]

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use tempfile::TempDir;

use super::artifact_location;
use crate::ContractBuilder;
use crate::ContractError;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Writes a fresh bundle under a temporary `out` directory.
fn written_bundle() -> Result<(TempDir, PathBuf, ContractBuilder), Box<dyn std::error::Error>> {
    let temp = tempfile::tempdir()?;
    let root = temp.path().join("out");
    let builder = ContractBuilder::new(root.clone());
    builder.write()?;
    Ok((temp, root, builder))
}

/// Asserts a generation error whose message contains `needle`.
fn assert_generation(result: Result<(), ContractError>, needle: &str) -> TestResult {
    match result {
        Err(ContractError::Generation(message)) if message.contains(needle) => Ok(()),
        Err(other) => Err(format!("expected generation error with {needle}, got {other}").into()),
        Ok(()) => Err(format!("expected generation error with {needle}").into()),
    }
}

/// Asserts an output path error.
fn assert_output_path<T>(result: Result<T, ContractError>) -> TestResult {
    match result {
        Err(ContractError::OutputPath(_)) => Ok(()),
        Err(other) => Err(format!("expected output path error, got {other}").into()),
        Ok(_) => Err("expected output path error".into()),
    }
}

/// Returns true when the platform refused to create a symlink.
fn symlinks_unavailable(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::PermissionDenied | io::ErrorKind::Unsupported)
}

#[cfg(unix)]
fn symlink(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

#[cfg(windows)]
fn symlink(src: &Path, dst: &Path) -> io::Result<()> {
    if src.is_dir() {
        std::os::windows::fs::symlink_dir(src, dst)
    } else {
        std::os::windows::fs::symlink_file(src, dst)
    }
}

#[test]
fn written_bundle_verifies_and_lists_fourteen_artifacts() -> TestResult {
    let temp = tempfile::tempdir()?;
    let root = temp.path().join("nested").join("out");
    let builder = ContractBuilder::new(root.clone());
    let manifest = builder.write()?;
    builder.verify_output(&root)?;

    assert_eq!(manifest.artifacts.len(), 14);
    assert!(root.join("index.json").is_file());
    assert!(root.join("schemas").join("business-profile.schema.json").is_file());
    assert!(root.join("samples").join("intent-journey.json").is_file());
    Ok(())
}

#[test]
fn rewriting_reproduces_the_manifest() -> TestResult {
    let (_temp, root, builder) = written_bundle()?;
    let before = fs::read(root.join("index.json"))?;
    builder.write()?;
    assert_eq!(fs::read(root.join("index.json"))?, before);
    builder.verify_output(&root)?;
    Ok(())
}

#[test]
fn edited_artifact_is_stale() -> TestResult {
    let (_temp, root, builder) = written_bundle()?;
    let tooling = root.join("tooling.json");
    let mut bytes = fs::read(&tooling)?;
    bytes.extend_from_slice(b" ");
    fs::write(&tooling, &bytes)?;
    assert_generation(builder.verify_output(&root), "stale artifact: tooling.json")
}

#[test]
fn same_size_edit_is_stale() -> TestResult {
    let (_temp, root, builder) = written_bundle()?;
    let markdown = root.join("tooling.md");
    let original = fs::read_to_string(&markdown)?;
    fs::write(&markdown, original.replacen("AIDP", "ADIP", 1))?;
    assert_generation(builder.verify_output(&root), "stale artifact: tooling.md")
}

#[test]
fn deleted_artifact_is_missing() -> TestResult {
    let (_temp, root, builder) = written_bundle()?;
    fs::remove_file(root.join("samples").join("review.json"))?;
    assert_generation(builder.verify_output(&root), "missing artifact: samples/review.json")
}

#[test]
fn deleted_manifest_is_missing() -> TestResult {
    let (_temp, root, builder) = written_bundle()?;
    fs::remove_file(root.join("index.json"))?;
    assert_generation(builder.verify_output(&root), "missing artifact: index.json")
}

#[test]
fn stray_file_is_reported_by_path() -> TestResult {
    let (_temp, root, builder) = written_bundle()?;
    fs::write(root.join("schemas").join("stray.json"), b"{}")?;
    assert_generation(builder.verify_output(&root), "schemas/stray.json")
}

#[test]
fn missing_root_is_not_created_by_verify() -> TestResult {
    let temp = tempfile::tempdir()?;
    let root = temp.path().join("never-written");
    assert_output_path(ContractBuilder::new(root.clone()).verify_output(&root))?;
    assert!(!root.exists());
    Ok(())
}

#[test]
fn parent_traversal_is_rejected() -> TestResult {
    let temp = tempfile::tempdir()?;
    let root = temp.path().join("out").join("..").join("escape");
    assert_output_path(ContractBuilder::new(root).write())
}

#[test]
fn file_in_place_of_root_is_rejected() -> TestResult {
    let temp = tempfile::tempdir()?;
    let root = temp.path().join("out");
    fs::write(&root, b"not a directory")?;
    assert_output_path(ContractBuilder::new(root).write())
}

#[test]
fn symlinked_root_is_rejected() -> TestResult {
    let temp = tempfile::tempdir()?;
    let real = temp.path().join("real");
    fs::create_dir_all(&real)?;
    let link = temp.path().join("link");
    if let Err(err) = symlink(&real, &link) {
        return if symlinks_unavailable(&err) { Ok(()) } else { Err(err.into()) };
    }
    assert_output_path(ContractBuilder::new(link).write())
}

#[test]
fn symlinked_artifact_is_rejected() -> TestResult {
    let (temp, root, builder) = written_bundle()?;
    let target = root.join("tooling.json");
    let copy = temp.path().join("tooling-copy.json");
    fs::copy(&target, &copy)?;
    fs::remove_file(&target)?;
    if let Err(err) = symlink(&copy, &target) {
        return if symlinks_unavailable(&err) { Ok(()) } else { Err(err.into()) };
    }
    assert_output_path(builder.verify_output(&root))?;
    assert_output_path(builder.write())
}

#[test]
fn artifact_locations_must_stay_inside_the_bundle() {
    assert!(artifact_location("schemas/review.schema.json").is_ok());
    for path in ["", " ", "../index.json", "/etc/passwd", "schemas/../../x"] {
        assert!(
            matches!(artifact_location(path), Err(ContractError::Generation(_))),
            "accepted {path}"
        );
    }
}
