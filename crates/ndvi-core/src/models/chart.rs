use crate::models::NdviSeries;
use serde::{Deserialize, Serialize};

/// Chart type requested from the charting capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartKind {
    #[default]
    Line,
}

/// Single plotted dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_width: u32,
    pub border_color: String,
    pub fill: bool,
    pub tension: f64,
}

/// Everything a charting backend needs to draw one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub dataset: ChartDataset,
}

impl ChartSpec {
    /// NDVI trend line: dates on x, NDVI on y, in series order
    pub fn ndvi_trend(series: &NdviSeries) -> Self {
        Self {
            kind: ChartKind::Line,
            labels: series.labels(),
            dataset: ChartDataset {
                label: "NDVI Trend".to_string(),
                data: series.values(),
                border_width: 2,
                border_color: "#2a7a2e".to_string(),
                fill: false,
                tension: 0.2,
            },
        }
    }
}
