use crate::models::{AnalysisResult, ChartSpec, NdviSeries};
use crate::ports::{ChartBackend, ChartInstance, Surface};

/// Renders analysis results as text and NDVI series as a line chart
pub struct ResultPresenter {
    backend: Box<dyn ChartBackend>,
    chart: Option<Box<dyn ChartInstance>>,
}

impl ResultPresenter {
    pub fn new(backend: Box<dyn ChartBackend>) -> Self {
        Self { backend, chart: None }
    }

    /// Write the result block to the result area
    pub fn show_summary(&self, surface: &mut dyn Surface, result: &AnalysisResult) {
        surface.set_result(&summary_text(result));
    }

    /// Draw the series, replacing any chart from an earlier call
    pub fn show_chart(&mut self, series: &NdviSeries) {
        self.destroy_chart();
        self.chart = Some(self.backend.create(ChartSpec::ndvi_trend(series)));
    }

    pub fn destroy_chart(&mut self) {
        if let Some(chart) = self.chart.take() {
            chart.destroy();
        }
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }
}

/// Multi-line summary of an analysis
pub fn summary_text(result: &AnalysisResult) -> String {
    let mut text = format!(
        "Degradation Score: {}\nAI Insight: {}\n{}",
        result.degradation_score, result.ai_insight, result.message
    );
    if let Some(ref recommendation) = result.ai_message {
        text.push_str("\nRecommendation: ");
        text.push_str(recommendation);
    }
    text
}
