//! Shared test doubles: a scripted backend and recording UI ports
#![allow(dead_code)]

use async_trait::async_trait;
use ndvi_core::config::ViewSettings;
use ndvi_core::gateway::{ApiGateway, GatewayError, HttpMethod, ReportFile};
use ndvi_core::models::{ChartSpec, MapView, Panel, ParcelFeature};
use ndvi_core::ports::{ChartBackend, ChartInstance, MapCanvas, Surface};
use ndvi_core::WorkflowController;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A request the controller sent to the backend
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: String,
    pub method: HttpMethod,
    pub body: Option<Value>,
}

/// Backend double answering from a queue of scripted outcomes
#[derive(Default)]
pub struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<Value, GatewayError>>>,
    downloads: Mutex<VecDeque<Result<ReportFile, GatewayError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGateway {
    pub fn respond(&self, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(body));
    }

    pub fn fail(&self, message: &str) {
        self.responses.lock().unwrap().push_back(Err(GatewayError::new(message)));
    }

    pub fn respond_download(&self, outcome: Result<ReportFile, GatewayError>) {
        self.downloads.lock().unwrap().push_back(outcome);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ApiGateway for ScriptedGateway {
    async fn call(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            method,
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::new("no scripted response")))
    }

    async fn download(&self, endpoint: &str) -> Result<ReportFile, GatewayError> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            method: HttpMethod::Get,
            body: None,
        });
        self.downloads
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::new("no scripted download")))
    }
}

/// Everything the UI ports were asked to do
#[derive(Debug, Default)]
pub struct UiLog {
    pub status: String,
    pub result: String,
    pub alerts: Vec<String>,
    pub panels: HashMap<Panel, bool>,
    pub credentials_cleared: usize,
    pub shapes: Vec<Value>,
    pub shape_clears: usize,
    pub refreshes: Vec<(MapView, Duration)>,
    pub overlays: Vec<String>,
    pub charts_created: Vec<ChartSpec>,
    pub charts_destroyed: usize,
}

impl UiLog {
    pub fn panel_visible(&self, panel: Panel) -> bool {
        self.panels.get(&panel).copied().unwrap_or(false)
    }
}

pub type SharedLog = Arc<Mutex<UiLog>>;

pub struct RecordingSurface(pub SharedLog);
pub struct RecordingCanvas(pub SharedLog);
pub struct RecordingCharts(pub SharedLog);
pub struct RecordingChart(pub SharedLog);

impl Surface for RecordingSurface {
    fn set_status(&mut self, text: &str) {
        self.0.lock().unwrap().status = text.to_string();
    }

    fn set_result(&mut self, text: &str) {
        self.0.lock().unwrap().result = text.to_string();
    }

    fn alert(&mut self, message: &str) {
        self.0.lock().unwrap().alerts.push(message.to_string());
    }

    fn set_panel_visible(&mut self, panel: Panel, visible: bool) {
        self.0.lock().unwrap().panels.insert(panel, visible);
    }

    fn clear_credentials(&mut self) {
        self.0.lock().unwrap().credentials_cleared += 1;
    }
}

impl MapCanvas for RecordingCanvas {
    fn clear_shapes(&mut self) {
        let mut log = self.0.lock().unwrap();
        log.shapes.clear();
        log.shape_clears += 1;
    }

    fn add_shape(&mut self, feature: &ParcelFeature) {
        self.0.lock().unwrap().shapes.push(feature.as_json().clone());
    }

    fn schedule_refresh(&mut self, view: MapView, delay: Duration) {
        self.0.lock().unwrap().refreshes.push((view, delay));
    }

    fn show_overlay(&mut self, url: &str) {
        self.0.lock().unwrap().overlays.push(url.to_string());
    }
}

impl ChartBackend for RecordingCharts {
    fn create(&mut self, spec: ChartSpec) -> Box<dyn ChartInstance> {
        self.0.lock().unwrap().charts_created.push(spec);
        Box::new(RecordingChart(self.0.clone()))
    }
}

impl ChartInstance for RecordingChart {
    fn destroy(self: Box<Self>) {
        self.0.lock().unwrap().charts_destroyed += 1;
    }
}

/// Controller wired to a scripted backend and recording ports
pub struct Harness {
    pub controller: WorkflowController,
    pub gateway: Arc<ScriptedGateway>,
    pub log: SharedLog,
}

impl Harness {
    pub fn new() -> Self {
        let gateway = Arc::new(ScriptedGateway::default());
        let log = SharedLog::default();
        let controller = WorkflowController::new(
            gateway.clone(),
            Box::new(RecordingSurface(log.clone())),
            Box::new(RecordingCanvas(log.clone())),
            Box::new(RecordingCharts(log.clone())),
            ViewSettings::default(),
        );
        Self { controller, gateway, log }
    }

    pub fn ui(&self) -> std::sync::MutexGuard<'_, UiLog> {
        self.log.lock().unwrap()
    }
}

pub fn login_ok() -> Value {
    json!({"message": "ok", "user_id": 1, "access_token": "tok"})
}

pub fn compute_ok() -> Value {
    json!({
        "series": [{"date": "2024-01-01", "ndvi": 0.42}],
        "parcel_id": "p1",
        "degradation_score": 0.3,
        "ai_insight": "stable",
        "message": "done"
    })
}

pub fn parcel() -> ParcelFeature {
    ParcelFeature::rectangle(30.0, -2.0, 30.1, -1.9)
}
