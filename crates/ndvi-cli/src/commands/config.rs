//! Config command implementation

use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};
use anyhow::Result;
use ndvi_core::config::{ConfigSource, LayeredConfig};
use std::collections::HashMap;
use tabled::Tabled;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let inspection_map = config.to_inspection_map();

    if output.is_json() {
        let entry = |key: &str| {
            inspection_map
                .get(key)
                .map(|(value, source)| ConfigEntry {
                    value: value.clone(),
                    source: format!("{:?}", source),
                })
                .unwrap_or(ConfigEntry {
                    value: String::new(),
                    source: format!("{:?}", ConfigSource::Default),
                })
        };

        output.result(ConfigOutput {
            api_url: entry("api_url"),
            default_center: entry("default_center"),
            default_zoom: entry("default_zoom"),
            relayout_delay_ms: entry("relayout_delay_ms"),
            report_dir: entry("report_dir"),
        })?;
    } else {
        output.section("Configuration Values");
        output.table(config_rows(inspection_map), "no configuration values");

        output.section("Configuration Precedence");
        output.status("CLI arguments > Environment variables > Config file > Defaults");
    }

    Ok(())
}

#[derive(Tabled)]
struct ConfigRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: String,
}

fn config_rows(inspection_map: HashMap<String, (String, ConfigSource)>) -> Vec<ConfigRow> {
    let mut rows: Vec<ConfigRow> = inspection_map
        .into_iter()
        .map(|(key, (value, source))| ConfigRow {
            key,
            value,
            source: format!("{:?}", source),
        })
        .collect();

    // Sort by key for consistent output
    rows.sort_by(|a, b| a.key.cmp(&b.key));
    rows
}
