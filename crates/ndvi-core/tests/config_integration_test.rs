//! Configuration layering across file, environment and CLI sources

use ndvi_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use ndvi_core::models::MapView;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;

const VARS: [&str; 5] = [
    "NDVI_API_URL",
    "NDVI_DEFAULT_CENTER",
    "NDVI_DEFAULT_ZOOM",
    "NDVI_RELAYOUT_DELAY_MS",
    "NDVI_REPORT_DIR",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    let file = config_file("api_url = \"http://from-file:7860\"\ndefault_zoom = 10\n");
    env::set_var("NDVI_API_URL", "http://from-env:7860");

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.api_url.value, "http://from-env:7860");
    assert_eq!(config.api_url.source, ConfigSource::Environment);
    assert_eq!(config.default_zoom.value, 10);
    assert_eq!(config.default_zoom.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_environment() {
    clear_env();
    env::set_var("NDVI_API_URL", "http://from-env:7860");
    env::set_var("NDVI_REPORT_DIR", "/var/reports");

    let mut config = LayeredConfig::with_defaults().load_from_env();
    config.update_from_cli(CliConfigOverrides {
        api_url: Some("http://from-cli:7860".to_string()),
        report_dir: None,
    });

    assert_eq!(config.api_url.value, "http://from-cli:7860");
    assert_eq!(config.api_url.source, ConfigSource::Cli);
    assert_eq!(config.report_dir.value, PathBuf::from("/var/reports"));
    assert_eq!(config.report_dir.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();
    env::set_var("NDVI_DEFAULT_CENTER", "nowhere");
    env::set_var("NDVI_DEFAULT_ZOOM", "99");
    env::set_var("NDVI_RELAYOUT_DELAY_MS", "soon");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.default_center.source, ConfigSource::Default);
    assert_eq!(config.default_zoom.source, ConfigSource::Default);
    assert_eq!(config.relayout_delay_ms.value, 200);

    clear_env();
}

#[test]
#[serial]
fn test_environment_view_settings() {
    clear_env();
    env::set_var("NDVI_DEFAULT_CENTER", "0.35,32.58");
    env::set_var("NDVI_DEFAULT_ZOOM", "13");
    env::set_var("NDVI_RELAYOUT_DELAY_MS", "0");

    let settings = LayeredConfig::with_defaults().load_from_env().view_settings();

    assert_eq!(settings.default_view, MapView::new(0.35, 32.58, 13));
    assert_eq!(settings.relayout_delay, Duration::ZERO);

    clear_env();
}

#[test]
#[serial]
fn test_missing_file_is_an_error() {
    clear_env();
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/ndvi.toml");
    assert!(result.is_err());
}
