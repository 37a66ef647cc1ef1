//! Request and response bodies of the NDVI backend API

use crate::models::{AnalysisResult, NdviSeries, ParcelFeature, ParcelId, Session, UserId};
use serde::{Deserialize, Serialize};

/// Body of `/api/login` and `/api/signup`
#[derive(Debug, Clone, Serialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Success body of `/api/login` and `/api/signup`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user_id: UserId,

    /// Only issued by login
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl AuthResponse {
    pub fn into_session(self) -> (Session, String) {
        let session = Session {
            user_id: self.user_id,
            access_token: self.access_token,
            email: self.email,
        };
        (session, self.message)
    }
}

/// Body of `/api/compute_ndvi`
#[derive(Debug, Clone, Serialize)]
pub struct ComputeRequest {
    pub feature: ParcelFeature,
    pub user_id: UserId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Success body of `/api/compute_ndvi`
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeResponse {
    pub series: NdviSeries,
    pub parcel_id: ParcelId,
    pub degradation_score: f64,
    pub ai_insight: String,

    #[serde(default)]
    pub ai_message: Option<String>,

    pub message: String,
}

impl ComputeResponse {
    pub fn into_parts(self) -> (AnalysisResult, NdviSeries) {
        let result = AnalysisResult {
            parcel_id: self.parcel_id,
            degradation_score: self.degradation_score,
            ai_insight: self.ai_insight,
            ai_message: self.ai_message,
            message: self.message,
        };
        (result, self.series)
    }
}

/// Body of `/api/ndvi_map`
#[derive(Debug, Clone, Serialize)]
pub struct NdviMapRequest {
    pub feature: ParcelFeature,
}

/// Success body of `/api/ndvi_map`
#[derive(Debug, Clone, Deserialize)]
pub struct NdviMapResponse {
    pub map_url: String,
}
