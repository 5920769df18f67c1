//! Tests for the po2lmo binary
//!
//! These tests verify:
//! - Exit code 0 and a correct file on success
//! - Non-zero exit code and a message on stderr for every failure class
//! - `--debug` writes the entry trace to stderr without changing the output

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn run(input: &Path, output: &Path, debug: bool) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_po2lmo"));
    command.arg(input).arg(output).env_remove("RUST_LOG");
    if debug {
        command.arg("--debug");
    }
    command.output().unwrap()
}

// =============================================================================
// Success
// =============================================================================

#[test]
fn test_cli_converts_reference_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("de.lmo");

    let result = run(&data_path("reference.po"), &output, false);

    assert!(result.status.success());
    assert_eq!(
        fs::read(&output).unwrap(),
        fs::read(data_path("reference.lmo")).unwrap()
    );
}

#[test]
fn test_cli_debug_trace() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("de.lmo");

    let result = run(&data_path("reference.po"), &output, true);

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("0x219966c7"), "{stderr}");
    assert!(stderr.contains("skipped"), "{stderr}");
    assert!(result.stdout.is_empty());
    assert_eq!(
        fs::read(&output).unwrap(),
        fs::read(data_path("reference.lmo")).unwrap()
    );
}

// =============================================================================
// Failure
// =============================================================================

#[test]
fn test_cli_missing_input() {
    let temp = TempDir::new().unwrap();

    let result = run(
        &temp.path().join("missing.po"),
        &temp.path().join("out.lmo"),
        false,
    );

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Cannot open input file"), "{stderr}");
    assert!(stderr.contains("missing.po"), "{stderr}");
}

#[test]
fn test_cli_unwritable_output_names_output_path() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("no_such_dir").join("out.lmo");

    let result = run(&data_path("reference.po"), &output, false);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Cannot write to output file"), "{stderr}");
    assert!(stderr.contains(&output.display().to_string()), "{stderr}");
    assert!(!stderr.contains("reference.po"), "{stderr}");
}

#[test]
fn test_cli_duplicate_key() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("dup.po");
    fs::write(&input, "msgid \"x\"\nmsgstr \"1\"\nmsgid \"x\"\nmsgstr \"2\"\n").unwrap();

    let result = run(&input, &temp.path().join("out.lmo"), false);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Duplicate msgid"), "{stderr}");
    assert!(stderr.contains("line 3"), "{stderr}");
}

#[test]
fn test_cli_missing_arguments() {
    let result = Command::new(env!("CARGO_BIN_EXE_po2lmo")).output().unwrap();
    assert!(!result.status.success());
}
