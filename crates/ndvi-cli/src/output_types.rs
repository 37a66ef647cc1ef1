use chrono::{DateTime, Utc};
use ndvi_core::models::{AnalysisResult, NdviPoint};
use serde::Serialize;

/// Output for analyze command
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    pub user_id: String,
    pub parcel_id: String,
    pub degradation_score: f64,
    pub ai_insight: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_message: Option<String>,
    pub message: String,
    pub series: Vec<NdviPoint>,
    pub report_path: Option<String>,
    pub overlay_url: Option<String>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalyzeOutput {
    pub fn new(user_id: String, result: AnalysisResult, series: Vec<NdviPoint>) -> Self {
        Self {
            user_id,
            parcel_id: result.parcel_id.to_string(),
            degradation_score: result.degradation_score,
            ai_insight: result.ai_insight,
            ai_message: result.ai_message,
            message: result.message,
            series,
            report_path: None,
            overlay_url: None,
            analyzed_at: Utc::now(),
        }
    }
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub api_url: ConfigEntry,
    pub default_center: ConfigEntry,
    pub default_zoom: ConfigEntry,
    pub relayout_delay_ms: ConfigEntry,
    pub report_dir: ConfigEntry,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: String,
}
