//! Configuration loading utilities for CLI commands

use crate::cli::Cli;
use crate::errors;
use anyhow::Result;
use ndvi_core::config::{CliConfigOverrides, LayeredConfig};
use std::path::{Path, PathBuf};

/// File picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "ndvi.toml";

/// Load layered configuration: defaults, file, environment, then CLI flags
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = config_path(cli.config.as_deref()) {
        tracing::debug!(path = %path.display(), "Loading configuration file");
        config = config
            .load_from_file(&path)
            .map_err(|e| errors::invalid_config(&e.to_string()))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        api_url: cli.api_url.clone(),
        report_dir: cli.report_dir.clone(),
    });

    Ok(config)
}

/// An explicit path is always used; the default file only when it exists
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    }
}
