//! Integration tests for the ndvi binary
//!
//! These tests run the binary with a scrubbed environment in a temporary
//! working directory, so no local ndvi.toml or NDVI_* variables leak in.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ndvi"))
        .args(args)
        .current_dir(dir)
        .env_remove("NDVI_API_URL")
        .env_remove("NDVI_DEFAULT_CENTER")
        .env_remove("NDVI_DEFAULT_ZOOM")
        .env_remove("NDVI_RELAYOUT_DELAY_MS")
        .env_remove("NDVI_REPORT_DIR")
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute command")
}

fn json_data(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert_eq!(parsed["status"], "success");
    parsed["data"].clone()
}

#[test]
fn test_config_json_defaults() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["config", "--json"]);
    assert!(output.status.success(), "Command should succeed");

    let data = json_data(&output);
    assert_eq!(data["api_url"]["value"], "http://localhost:7860");
    assert_eq!(data["api_url"]["source"], "Default");
    assert_eq!(data["default_zoom"]["value"], "8");
    assert_eq!(data["relayout_delay_ms"]["value"], "200");
}

#[test]
fn test_config_precedence_file_then_cli() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("ndvi.toml"),
        "api_url = \"http://from-file:7860\"\ndefault_zoom = 12\n",
    )
    .unwrap();

    let output = run(dir.path(), &["config", "--json", "--api-url", "http://from-cli:7860"]);
    assert!(output.status.success());

    let data = json_data(&output);
    assert_eq!(data["api_url"]["value"], "http://from-cli:7860");
    assert_eq!(data["api_url"]["source"], "Cli");
    assert_eq!(data["default_zoom"]["value"], "12");
    assert_eq!(data["default_zoom"]["source"], "File");
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("broken.toml"), "default_zoom = [").unwrap();

    let output = run(dir.path(), &["config", "--config", "broken.toml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid configuration"));
}

#[test]
fn test_analyze_without_parcel_fails_before_network() {
    let dir = TempDir::new().unwrap();

    let output = run(
        dir.path(),
        &["analyze", "--email", "a@b.com", "--password", "x", "--api-url", "http://127.0.0.1:9"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No parcel given"));
}

#[test]
fn test_analyze_rejects_bad_bbox() {
    let dir = TempDir::new().unwrap();

    let output = run(
        dir.path(),
        &["analyze", "--email", "a@b.com", "--password", "x", "--bbox", "30.1,-2.0,30.0,-1.9"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid parcel"));
}
