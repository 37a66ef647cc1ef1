//! Parcel-analysis workflow controller
//!
//! Drives the session through `LoggedOut -> Idle -> Computing -> ResultReady`
//! and back, talking to the backend through an [`ApiGateway`] and to the host
//! UI through the [`ports`](crate::ports) traits.
//!
//! Every failure leaves the controller in a stable state. Precondition
//! failures raise an alert and never reach the backend; backend and transport
//! failures are written to the status or result area.

use crate::capture::GeometryCapture;
use crate::config::ViewSettings;
use crate::dto::{
    AuthResponse, ComputeRequest, ComputeResponse, CredentialsRequest, NdviMapRequest,
    NdviMapResponse,
};
use crate::error::{NdviError, Precondition, Result};
use crate::gateway::{
    application_error, endpoints, ApiGateway, GatewayError, HttpMethod, ReportFile,
};
use crate::models::{AnalysisResult, Panel, ParcelFeature, Session, UserId};
use crate::ports::{ChartBackend, MapCanvas, Surface};
use crate::presenter::ResultPresenter;
use crate::session::SessionStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// User-visible workflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkflowState {
    LoggedOut,
    /// Logged in, no computation running
    Idle,
    Computing,
    ResultReady,
}

impl WorkflowState {
    pub fn is_logged_in(&self) -> bool {
        !matches!(self, WorkflowState::LoggedOut)
    }
}

/// Which authentication endpoint to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn endpoint(&self) -> &'static str {
        match self {
            AuthMode::Login => endpoints::LOGIN,
            AuthMode::Signup => endpoints::SIGNUP,
        }
    }
}

/// Email and password as typed; surrounding whitespace is ignored
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        Self {
            email: email.as_ref().trim().to_string(),
            password: password.as_ref().trim().to_string(),
        }
    }
}

/// Claim on the single compute slot of a session.
///
/// Issued by [`WorkflowController::begin_compute`]; only the ticket matching
/// the current session generation and compute sequence may complete.
#[derive(Debug, Clone)]
pub struct ComputeTicket {
    generation: u64,
    sequence: u64,
    previous: WorkflowState,
    request: ComputeRequest,
}

impl ComputeTicket {
    /// JSON body for `/api/compute_ndvi`
    pub fn request_body(&self) -> Value {
        serde_json::to_value(&self.request).unwrap_or(Value::Null)
    }
}

/// Orchestrates login, compute, chart, report and logout actions
pub struct WorkflowController {
    gateway: Arc<dyn ApiGateway>,
    surface: Box<dyn Surface>,
    capture: GeometryCapture,
    presenter: ResultPresenter,
    store: SessionStore,
    settings: ViewSettings,
    state: WorkflowState,
    compute_sequence: u64,
    active_compute: Option<u64>,
}

impl WorkflowController {
    pub fn new(
        gateway: Arc<dyn ApiGateway>,
        surface: Box<dyn Surface>,
        canvas: Box<dyn MapCanvas>,
        charts: Box<dyn ChartBackend>,
        settings: ViewSettings,
    ) -> Self {
        Self {
            gateway,
            surface,
            capture: GeometryCapture::new(canvas),
            presenter: ResultPresenter::new(charts),
            store: SessionStore::new(),
            settings,
            state: WorkflowState::LoggedOut,
            compute_sequence: 0,
            active_compute: None,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn session(&self) -> Option<&Session> {
        self.store.session()
    }

    pub fn current_feature(&self) -> Option<&ParcelFeature> {
        self.capture.current_feature()
    }

    /// Drawing tool callback: replace the current parcel
    pub fn on_draw_created(&mut self, feature: ParcelFeature) {
        self.capture.on_draw_created(feature);
    }

    pub async fn login(&mut self, credentials: Credentials) -> Result<()> {
        self.authenticate(AuthMode::Login, credentials).await
    }

    pub async fn signup(&mut self, credentials: Credentials) -> Result<()> {
        self.authenticate(AuthMode::Signup, credentials).await
    }

    /// Log in or sign up.
    ///
    /// On success the session is replaced, results from any earlier session
    /// are dropped and the map panel is revealed. On failure nothing changes
    /// except the status text.
    pub async fn authenticate(&mut self, mode: AuthMode, credentials: Credentials) -> Result<()> {
        let endpoint = mode.endpoint();
        let body = CredentialsRequest { email: credentials.email, password: credentials.password };
        let outcome = self
            .gateway
            .call(endpoint, HttpMethod::Post, serde_json::to_value(&body).ok())
            .await;

        let response: AuthResponse = match decode(endpoint, outcome) {
            Ok(response) => response,
            Err(err) => {
                tracing::info!(?mode, error = %err, "Authentication failed");
                self.surface.set_status(&err.to_string());
                return Err(err);
            }
        };

        let (session, message) = response.into_session();
        let was_logged_out = !self.state.is_logged_in();

        // A new identity never inherits the previous one's artifacts
        if !was_logged_out {
            self.reset_artifacts();
            self.store.clear_result();
        }
        self.store.set_session(session);
        self.active_compute = None;
        self.state = WorkflowState::Idle;

        self.surface.set_status(&message);
        if was_logged_out {
            self.surface.set_panel_visible(Panel::Auth, false);
            self.surface.set_panel_visible(Panel::Map, true);
            self.refresh_map();
        }

        if let Some(user_id) = self.user_id() {
            tracing::info!(?mode, user = %user_id, "Session started");
        }
        Ok(())
    }

    /// Run a full compute: claim the slot, call the backend, apply the result
    pub async fn compute(&mut self, name: Option<String>) -> Result<AnalysisResult> {
        let ticket = self.begin_compute(name)?;
        let outcome = self
            .gateway
            .call(endpoints::COMPUTE_NDVI, HttpMethod::Post, Some(ticket.request_body()))
            .await;

        self.complete_compute(ticket, outcome)?.ok_or(NdviError::Superseded)
    }

    /// Check preconditions and enter `Computing`.
    ///
    /// The caller sends [`ComputeTicket::request_body`] to
    /// `/api/compute_ndvi` and hands the outcome to
    /// [`complete_compute`](Self::complete_compute).
    pub fn begin_compute(&mut self, name: Option<String>) -> Result<ComputeTicket> {
        let Some(user_id) = self.user_id().cloned() else {
            return Err(self.reject(Precondition::NotLoggedIn));
        };
        if self.state == WorkflowState::Computing {
            return Err(self.reject(Precondition::ComputeInFlight));
        }
        let Some(feature) = self.capture.current_feature().cloned() else {
            return Err(self.reject(Precondition::NoFeature));
        };

        self.compute_sequence += 1;
        self.active_compute = Some(self.compute_sequence);

        let ticket = ComputeTicket {
            generation: self.store.generation(),
            sequence: self.compute_sequence,
            previous: self.state,
            request: ComputeRequest { feature, user_id, name },
        };

        self.state = WorkflowState::Computing;
        self.surface.set_result("Computing...");
        tracing::info!(sequence = ticket.sequence, "NDVI computation started");

        Ok(ticket)
    }

    /// Apply the backend outcome of a compute request.
    ///
    /// Returns `Ok(None)` when the ticket is stale (the session changed or the
    /// slot was released since it was issued); the outcome is then ignored.
    pub fn complete_compute(
        &mut self,
        ticket: ComputeTicket,
        outcome: std::result::Result<Value, GatewayError>,
    ) -> Result<Option<AnalysisResult>> {
        if ticket.generation != self.store.generation()
            || self.active_compute != Some(ticket.sequence)
        {
            tracing::warn!(sequence = ticket.sequence, "Discarding stale compute response");
            return Ok(None);
        }
        self.active_compute = None;

        let response: ComputeResponse = match decode(endpoints::COMPUTE_NDVI, outcome) {
            Ok(response) => response,
            Err(err) => {
                tracing::info!(sequence = ticket.sequence, error = %err, "NDVI computation failed");
                self.state = ticket.previous;
                self.surface.set_result(&err.to_string());
                return Err(err);
            }
        };

        let (result, series) = response.into_parts();
        tracing::info!(
            sequence = ticket.sequence,
            parcel = %result.parcel_id,
            points = series.len(),
            "NDVI computation finished"
        );

        self.store.set_result(result.clone(), series);
        self.state = WorkflowState::ResultReady;
        self.presenter.show_summary(self.surface.as_mut(), &result);

        Ok(Some(result))
    }

    /// Open the chart modal and draw the current series
    pub fn view_chart(&mut self) -> Result<()> {
        if self.store.series().is_empty() {
            return Err(self.reject(Precondition::NoSeries));
        }

        self.surface.set_panel_visible(Panel::ChartModal, true);
        self.presenter.show_chart(self.store.series());
        Ok(())
    }

    /// Hide the chart modal; the chart itself is kept until the next render
    pub fn close_chart(&mut self) {
        self.surface.set_panel_visible(Panel::ChartModal, false);
    }

    /// Fetch the PDF report of the latest analysis
    pub async fn download_report(&mut self) -> Result<ReportFile> {
        let Some(parcel_id) = self.store.parcel_id().cloned() else {
            return Err(self.reject(Precondition::NoParcel));
        };

        match self.gateway.download(&endpoints::download_report(&parcel_id)).await {
            Ok(mut report) => {
                report.file_name = Some(report.file_name_or_default(&parcel_id));
                tracing::info!(parcel = %parcel_id, bytes = report.bytes.len(), "Report downloaded");
                Ok(report)
            }
            Err(err) => {
                self.surface.set_status(&err.message);
                Err(err.into())
            }
        }
    }

    /// Ask the backend for an NDVI tile overlay of the current parcel and
    /// show it on the map. Returns the overlay URL.
    pub async fn request_ndvi_map(&mut self) -> Result<String> {
        if self.store.session().is_none() {
            return Err(self.reject(Precondition::NotLoggedIn));
        }
        let Some(feature) = self.capture.current_feature().cloned() else {
            return Err(self.reject(Precondition::NoFeature));
        };

        let body = serde_json::to_value(NdviMapRequest { feature }).ok();
        let outcome = self.gateway.call(endpoints::NDVI_MAP, HttpMethod::Post, body).await;

        match decode::<NdviMapResponse>(endpoints::NDVI_MAP, outcome) {
            Ok(response) => {
                self.capture.canvas_mut().show_overlay(&response.map_url);
                Ok(response.map_url)
            }
            Err(err) => {
                self.surface.set_status(&err.to_string());
                Err(err)
            }
        }
    }

    /// Return to the login screen from any state
    pub fn logout(&mut self) {
        self.surface.set_panel_visible(Panel::ChartModal, false);
        self.surface.set_panel_visible(Panel::Map, false);
        self.surface.set_panel_visible(Panel::Auth, true);
        self.surface.clear_credentials();
        self.surface.set_result("");
        self.surface.set_status("Logged out successfully.");

        self.reset_artifacts();
        self.store.clear();
        self.active_compute = None;
        self.state = WorkflowState::LoggedOut;

        self.refresh_map();
        tracing::info!("Logged out");
    }

    /// User id to attribute requests to, if logged in
    pub fn user_id(&self) -> Option<&UserId> {
        self.store.session().map(|s| &s.user_id)
    }

    fn reset_artifacts(&mut self) {
        self.capture.clear();
        self.presenter.destroy_chart();
    }

    fn refresh_map(&mut self) {
        let ViewSettings { default_view, relayout_delay } = self.settings;
        self.capture.canvas_mut().schedule_refresh(default_view, relayout_delay);
    }

    fn reject(&mut self, precondition: Precondition) -> NdviError {
        tracing::debug!(?precondition, state = ?self.state, "Action rejected");
        self.surface.alert(&precondition.to_string());
        NdviError::Precondition(precondition)
    }
}

/// Turn a gateway outcome into a typed response, classifying failures
fn decode<T: DeserializeOwned>(
    endpoint: &str,
    outcome: std::result::Result<Value, GatewayError>,
) -> Result<T> {
    let body = outcome?;
    if let Some(message) = application_error(&body) {
        return Err(NdviError::Application { message });
    }

    serde_json::from_value(body).map_err(|e| NdviError::MalformedResponse {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}
