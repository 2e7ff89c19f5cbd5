//! Config load validation tests for aidp-validator.
// crates/aidp-validator/tests/config_load.rs
// =============================================================================
// Module: Config Load Tests
// Description: Validate config loading guards (path, size, encoding, content).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

use std::io::Write;
use std::path::Path;

use aidp_validator::AidpValidator;
use aidp_validator::ConfigError;
use aidp_validator::ValidatorConfig;
use tempfile::NamedTempFile;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<ValidatorConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

fn write_config(content: &[u8]) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(content).map_err(|err| err.to_string())?;
    Ok(file)
}

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(ValidatorConfig::load(Some(path)), "config path longer than 4096 bytes")
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(ValidatorConfig::load(Some(path)), "config path segment longer than 255 bytes")
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let file = write_config(&vec![b'#'; 1_048_577])?;
    assert_invalid(ValidatorConfig::load(Some(file.path())), "config file larger than 1 MiB")
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let file = write_config(&[0xFF, 0xFE, 0xFF])?;
    assert_invalid(ValidatorConfig::load(Some(file.path())), "config file is not valid UTF-8")
}

#[test]
fn load_rejects_missing_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    match ValidatorConfig::load(Some(&path)) {
        Err(ConfigError::Io(_)) => Ok(()),
        other => Err(format!("expected io error, got {:?}", other.map(|_| ()))),
    }
}

#[test]
fn load_rejects_permissive_without_opt_in() -> TestResult {
    let file = write_config(b"[validation]\nstrict = false\n")?;
    assert_invalid(ValidatorConfig::load(Some(file.path())), "allow_permissive")
}

#[test]
fn loaded_config_drives_the_validator() -> TestResult {
    let file = write_config(
        b"[validation]\nstrict = false\nallow_permissive = true\nallow_additional = false\n",
    )?;
    let config = ValidatorConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.validation.strict || config.validation.allow_additional {
        return Err("flags not applied".to_string());
    }
    if !config.validation.validate_formats {
        return Err("unset flag lost its default".to_string());
    }
    let validator = AidpValidator::new(&config).map_err(|err| err.to_string())?;
    if validator.settings() != &config.validation {
        return Err("validator settings diverge from config".to_string());
    }
    Ok(())
}
