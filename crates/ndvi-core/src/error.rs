//! Error types for NDVI Watch

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NdviError {
    // Backend errors
    #[error("{message}")]
    Transport { message: String },

    #[error("{message}")]
    Application { message: String },

    #[error("Unexpected response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    #[error("Response discarded: the session or computation it belonged to is no longer active")]
    Superseded,

    // Local workflow errors
    #[error("{0}")]
    Precondition(Precondition),

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

impl NdviError {
    /// True for failures caused by local workflow state rather than the backend
    pub fn is_precondition(&self) -> bool {
        matches!(self, NdviError::Precondition(_))
    }
}

/// Local state violations, reported to the user without contacting the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Precondition {
    #[error("Draw a parcel first!")]
    NoFeature,

    #[error("Compute NDVI first!")]
    NoSeries,

    #[error("Compute first!")]
    NoParcel,

    #[error("Log in first!")]
    NotLoggedIn,

    #[error("A computation is already running.")]
    ComputeInFlight,
}

impl From<Precondition> for NdviError {
    fn from(precondition: Precondition) -> Self {
        NdviError::Precondition(precondition)
    }
}

pub type Result<T> = std::result::Result<T, NdviError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_errors_show_backend_message() {
        let err = NdviError::Application { message: "Invalid geometry".to_string() };
        assert_eq!(err.to_string(), "Invalid geometry");
        assert!(!err.is_precondition());

        let err = NdviError::Transport { message: "connection refused".to_string() };
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_precondition_converts_with_alert_text() {
        let err: NdviError = Precondition::NoParcel.into();
        assert!(err.is_precondition());
        assert_eq!(err.to_string(), "Compute first!");
    }
}
