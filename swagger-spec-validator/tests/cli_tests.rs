//! Exit status and output of the `swagger-spec-validator` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SWAGGER20_JSON: &str = r#"{
  "swagger": "2.0",
  "info": {"title": "Petstore", "version": "1.0.0"},
  "paths": {"/pets": {}}
}"#;

fn run_cli(spec_file: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swagger-spec-validator"))
        .arg(spec_file)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_valid_spec_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("swagger.json");
    fs::write(&path, SWAGGER20_JSON).unwrap();

    let output = run_cli(&path);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "swagger validate start!\nswagger validate finished!\n"
    );
}

#[test]
fn test_unsupported_extension_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("swagger.txt");
    fs::write(&path, SWAGGER20_JSON).unwrap();

    let output = run_cli(&path);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "swagger validate start!\nswagger file neither json nor yaml\n"
    );
}

#[test]
fn test_validation_error_exits_one() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("swagger.json");
    fs::write(&path, r#"{"info": {"title": "no version"}}"#).unwrap();

    let output = run_cli(&path);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error:"), "got: {stderr}");
    assert!(
        stderr.contains("Swagger spec unknown missing version"),
        "got: {stderr}"
    );
}

#[test]
fn test_missing_file_exits_one() {
    let tmp = TempDir::new().unwrap();

    let output = run_cli(&tmp.path().join("missing.json"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to open spec file"), "got: {stderr}");
}
