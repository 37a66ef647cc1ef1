use crate::error::{NdviError, Result};
use crate::models::MapView;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Settings the workflow controller needs from configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    /// Where the map recenters after login and logout
    pub default_view: MapView,
    /// Delay before the map recalculates its layout after a panel change
    pub relayout_delay: Duration,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            default_view: MapView::default(),
            relayout_delay: Duration::from_millis(200),
        }
    }
}

/// Layered configuration for NDVI Watch
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub api_url: ConfigValue<String>,
    pub default_center: ConfigValue<[f64; 2]>,
    pub default_zoom: ConfigValue<u8>,
    pub relayout_delay_ms: ConfigValue<u64>,
    pub report_dir: ConfigValue<PathBuf>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        let view = MapView::default();
        Self {
            api_url: ConfigValue::new("http://localhost:7860".to_string(), ConfigSource::Default),
            default_center: ConfigValue::new(view.center, ConfigSource::Default),
            default_zoom: ConfigValue::new(view.zoom, ConfigSource::Default),
            relayout_delay_ms: ConfigValue::new(200, ConfigSource::Default),
            report_dir: ConfigValue::new(PathBuf::from("."), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| NdviError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| NdviError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(api_url) = file_config.api_url {
            self.api_url.update(api_url, ConfigSource::File);
        }

        if let Some(center) = file_config.default_center {
            self.default_center.update(center, ConfigSource::File);
        }

        if let Some(zoom) = file_config.default_zoom {
            self.default_zoom.update(zoom, ConfigSource::File);
        }

        if let Some(delay) = file_config.relayout_delay_ms {
            self.relayout_delay_ms.update(delay, ConfigSource::File);
        }

        if let Some(report_dir) = file_config.report_dir {
            self.report_dir.update(report_dir, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // NDVI_API_URL
        if let Ok(api_url) = env::var("NDVI_API_URL") {
            self.api_url.update(api_url, ConfigSource::Environment);
        }

        // NDVI_DEFAULT_CENTER
        if let Ok(center_str) = env::var("NDVI_DEFAULT_CENTER") {
            match parse_center(&center_str) {
                Ok(center) => self.default_center.update(center, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid NDVI_DEFAULT_CENTER value '{}': expected 'lat,lon'",
                    center_str
                ),
            }
        }

        // NDVI_DEFAULT_ZOOM
        if let Ok(zoom_str) = env::var("NDVI_DEFAULT_ZOOM") {
            match parse_zoom(&zoom_str) {
                Ok(zoom) => self.default_zoom.update(zoom, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid NDVI_DEFAULT_ZOOM value '{}': expected integer 0-22",
                    zoom_str
                ),
            }
        }

        // NDVI_RELAYOUT_DELAY_MS
        if let Ok(delay_str) = env::var("NDVI_RELAYOUT_DELAY_MS") {
            match delay_str.parse::<u64>() {
                Ok(delay) => self.relayout_delay_ms.update(delay, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid NDVI_RELAYOUT_DELAY_MS value '{}': expected milliseconds",
                    delay_str
                ),
            }
        }

        // NDVI_REPORT_DIR
        if let Ok(report_dir) = env::var("NDVI_REPORT_DIR") {
            self.report_dir.update(PathBuf::from(report_dir), ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(api_url) = overrides.api_url {
            self.api_url.update(api_url, ConfigSource::Cli);
        }

        if let Some(report_dir) = overrides.report_dir {
            self.report_dir.update(report_dir, ConfigSource::Cli);
        }
    }

    /// Workflow view settings derived from the current values
    pub fn view_settings(&self) -> ViewSettings {
        let [lat, lon] = self.default_center.value;
        ViewSettings {
            default_view: MapView::new(lat, lon, self.default_zoom.value),
            relayout_delay: Duration::from_millis(self.relayout_delay_ms.value),
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("api_url".to_string(), (self.api_url.value.clone(), self.api_url.source));

        let [lat, lon] = self.default_center.value;
        map.insert(
            "default_center".to_string(),
            (format!("{}, {}", lat, lon), self.default_center.source),
        );

        map.insert(
            "default_zoom".to_string(),
            (self.default_zoom.value.to_string(), self.default_zoom.source),
        );

        map.insert(
            "relayout_delay_ms".to_string(),
            (self.relayout_delay_ms.value.to_string(), self.relayout_delay_ms.source),
        );

        map.insert(
            "report_dir".to_string(),
            (self.report_dir.value.display().to_string(), self.report_dir.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    api_url: Option<String>,
    default_center: Option<[f64; 2]>,
    default_zoom: Option<u8>,
    relayout_delay_ms: Option<u64>,
    report_dir: Option<PathBuf>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub api_url: Option<String>,
    pub report_dir: Option<PathBuf>,
}

/// Parse a `lat,lon` pair
pub fn parse_center(s: &str) -> Result<[f64; 2]> {
    let invalid = || NdviError::ConfigInvalid {
        key: "default_center".to_string(),
        reason: format!("Invalid center: {}. Use 'lat,lon' in decimal degrees", s),
    };

    let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(invalid());
    }

    Ok([lat, lon])
}

/// Parse a web-map zoom level
pub fn parse_zoom(s: &str) -> Result<u8> {
    match s.trim().parse::<u8>() {
        Ok(zoom) if zoom <= 22 => Ok(zoom),
        _ => Err(NdviError::ConfigInvalid {
            key: "default_zoom".to_string(),
            reason: format!("Invalid zoom level: {}. Use an integer from 0 to 22", s),
        }),
    }
}
