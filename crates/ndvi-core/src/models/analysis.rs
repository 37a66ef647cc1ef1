use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-issued parcel identifier (e.g. `parcel-<uuid>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParcelId(pub String);

impl ParcelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParcelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a successful NDVI computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub parcel_id: ParcelId,
    pub degradation_score: f64,
    pub ai_insight: String,

    /// Land-management recommendation derived from the score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_message: Option<String>,

    pub message: String,
}
