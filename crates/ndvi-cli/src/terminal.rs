//! Terminal implementations of the workflow UI ports
//!
//! The status line, result area and alerts are printed through the
//! [`OutputWriter`]; the map is reduced to a parcel summary and the chart to
//! a table with a bar per observation. In JSON mode everything stays silent
//! so stdout carries a single document.

use crate::output::OutputWriter;
use console::style;
use ndvi_core::models::{ChartSpec, MapView, Panel, ParcelFeature};
use ndvi_core::ports::{ChartBackend, ChartInstance, MapCanvas, Surface};
use std::time::Duration;
use tabled::Tabled;

const BAR_WIDTH: usize = 40;

pub struct TerminalSurface {
    output: OutputWriter,
}

impl TerminalSurface {
    pub fn new(output: OutputWriter) -> Self {
        Self { output }
    }
}

impl Surface for TerminalSurface {
    fn set_status(&mut self, text: &str) {
        tracing::debug!(status = text, "Status updated");
        if !text.is_empty() {
            self.output.status(text);
        }
    }

    fn set_result(&mut self, text: &str) {
        if self.output.is_json() || text.is_empty() {
            return;
        }
        if text.contains('\n') {
            self.output.section("Result");
            self.output.block(text);
        } else {
            println!("{}", style(text).dim());
        }
    }

    fn alert(&mut self, message: &str) {
        self.output.warning(message);
    }

    fn set_panel_visible(&mut self, panel: Panel, visible: bool) {
        tracing::debug!(?panel, visible, "Panel visibility changed");
    }

    fn clear_credentials(&mut self) {
        tracing::debug!("Credential inputs cleared");
    }
}

/// Map stand-in that reports the drawn parcel and overlays
pub struct TerminalMap {
    output: OutputWriter,
}

impl TerminalMap {
    pub fn new(output: OutputWriter) -> Self {
        Self { output }
    }
}

impl MapCanvas for TerminalMap {
    fn clear_shapes(&mut self) {
        tracing::debug!("Drawing layer cleared");
    }

    fn add_shape(&mut self, feature: &ParcelFeature) {
        let kind = feature.geometry_type().unwrap_or("unknown geometry");
        self.output.field("Parcel", format!("{} with {} vertices", kind, feature.vertex_count()));
    }

    fn schedule_refresh(&mut self, view: MapView, delay: Duration) {
        let [lat, lon] = view.center;
        tracing::debug!(lat, lon, zoom = view.zoom, delay_ms = delay.as_millis() as u64, "Map recentered");
    }

    fn show_overlay(&mut self, url: &str) {
        self.output.field("NDVI overlay", url);
    }
}

#[derive(Tabled)]
struct ChartRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "NDVI")]
    ndvi: String,
    #[tabled(rename = "Trend")]
    bar: String,
}

/// Renders line charts as tables
pub struct TerminalCharts {
    output: OutputWriter,
}

impl TerminalCharts {
    pub fn new(output: OutputWriter) -> Self {
        Self { output }
    }
}

impl ChartBackend for TerminalCharts {
    fn create(&mut self, spec: ChartSpec) -> Box<dyn ChartInstance> {
        if !self.output.is_json() {
            self.output.section(&spec.dataset.label);
            let rows: Vec<ChartRow> = spec
                .labels
                .iter()
                .zip(&spec.dataset.data)
                .map(|(date, value)| ChartRow {
                    date: date.clone(),
                    ndvi: format!("{:.3}", value),
                    bar: bar(*value),
                })
                .collect();
            self.output.table(rows, "no NDVI observations");
        }
        Box::new(TerminalChart { points: spec.labels.len() })
    }
}

pub struct TerminalChart {
    points: usize,
}

impl ChartInstance for TerminalChart {
    fn destroy(self: Box<Self>) {
        tracing::debug!(points = self.points, "Chart destroyed");
    }
}

/// Horizontal bar for an NDVI value; negative values draw nothing
fn bar(value: f64) -> String {
    let filled = (value.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_with_value() {
        assert_eq!(bar(0.0).chars().count(), 0);
        assert_eq!(bar(0.5).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(1.0).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_bar_clamps_out_of_range() {
        assert_eq!(bar(-0.3), "");
        assert_eq!(bar(1.7).chars().count(), BAR_WIDTH);
    }
}
