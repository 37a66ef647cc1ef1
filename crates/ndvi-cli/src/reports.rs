//! Saving downloaded reports to disk

use anyhow::{Context, Result};
use ndvi_core::gateway::ReportFile;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the report into `dir`, creating the directory when needed.
/// Returns the path of the written file.
pub fn save_report(report: &ReportFile, dir: &Path) -> Result<PathBuf> {
    let file_name = report
        .file_name
        .as_deref()
        .and_then(|name| Path::new(name).file_name())
        .context("Report has no usable file name")?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory {}", dir.display()))?;

    let path = dir.join(file_name);
    fs::write(&path, &report.bytes)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = report.bytes.len(), "Report saved");
    Ok(path)
}
