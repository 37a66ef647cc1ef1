//! Session and workflow artifact store
//!
//! Owns the authenticated session, the latest NDVI series and the parcel id
//! of the latest analysis. Each mutator replaces the fields it owns in one
//! step, so no caller can observe a half-applied update.

use crate::models::{AnalysisResult, NdviSeries, ParcelId, Session};

#[derive(Debug, Default)]
pub struct SessionStore {
    session: Option<Session>,
    series: NdviSeries,
    parcel_id: Option<ParcelId>,
    latest: Option<AnalysisResult>,

    /// Bumped on every session change
    generation: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn series(&self) -> &NdviSeries {
        &self.series
    }

    pub fn parcel_id(&self) -> Option<&ParcelId> {
        self.parcel_id.as_ref()
    }

    pub fn latest_result(&self) -> Option<&AnalysisResult> {
        self.latest.as_ref()
    }

    /// Identifies the current session; compute responses issued under an
    /// older generation must be discarded
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
        self.generation += 1;
    }

    pub fn clear_session(&mut self) {
        self.session = None;
        self.generation += 1;
    }

    /// Replace the series and parcel id with those of a new analysis
    pub fn set_result(&mut self, result: AnalysisResult, series: NdviSeries) {
        self.parcel_id = Some(result.parcel_id.clone());
        self.latest = Some(result);
        self.series = series;
    }

    /// Drop the series, parcel id and latest analysis, keeping the session
    pub fn clear_result(&mut self) {
        self.series = NdviSeries::default();
        self.parcel_id = None;
        self.latest = None;
    }

    /// Reset everything to the logged-out state
    pub fn clear(&mut self) {
        self.session = None;
        self.series = NdviSeries::default();
        self.parcel_id = None;
        self.latest = None;
        self.generation += 1;
    }
}
