//! Backend API gateway
//!
//! Every backend call goes through [`ApiGateway`]. Failures in the transport
//! or in JSON decoding come back as a [`GatewayError`] value carrying the
//! underlying message; the gateway never validates response schemas, which
//! is left to the caller of each endpoint.

pub mod http;

pub use http::HttpGateway;

use crate::error::NdviError;
use crate::models::ParcelId;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Endpoint paths relative to the backend base URL
pub mod endpoints {
    use crate::models::ParcelId;

    pub const LOGIN: &str = "/api/login";
    pub const SIGNUP: &str = "/api/signup";
    pub const COMPUTE_NDVI: &str = "/api/compute_ndvi";
    pub const NDVI_MAP: &str = "/api/ndvi_map";

    pub fn download_report(parcel_id: &ParcelId) -> String {
        format!("/api/download_report/{}", parcel_id)
    }
}

/// HTTP method of a gateway call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Transport or decoding failure, normalized to its message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<GatewayError> for NdviError {
    fn from(err: GatewayError) -> Self {
        NdviError::Transport { message: err.message }
    }
}

/// Downloaded report file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    /// File name suggested by the backend, if any
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ReportFile {
    /// Suggested file name, falling back to `soil_report_<parcel>.pdf`
    pub fn file_name_or_default(&self, parcel_id: &ParcelId) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| format!("soil_report_{}.pdf", parcel_id))
    }
}

/// Port for backend calls
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// Perform one request and return the parsed JSON body as-is.
    ///
    /// The body is returned whatever the HTTP status: the backend reports
    /// business errors inside the JSON (`{"error": ...}`).
    async fn call(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> Result<Value, GatewayError>;

    /// Fetch a binary resource such as a generated report
    async fn download(&self, endpoint: &str) -> Result<ReportFile, GatewayError>;
}

/// Extract the business error a backend response carries, if any.
///
/// Absent, `null`, `false`, `0` and empty-string error fields do not count.
pub fn application_error(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_application_error_detection() {
        assert_eq!(
            application_error(&json!({"error": "Invalid credentials"})),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(application_error(&json!({"error": {"code": 4}})), Some("{\"code\":4}".into()));
        assert_eq!(application_error(&json!({"message": "ok"})), None);
        assert_eq!(application_error(&json!({"error": null})), None);
        assert_eq!(application_error(&json!({"error": ""})), None);
        assert_eq!(application_error(&json!({"error": 0})), None);
        assert_eq!(application_error(&json!({"error": 0.0})), None);
        assert_eq!(application_error(&json!({"error": 5})), Some("5".to_string()));
        assert_eq!(application_error(&json!([1, 2])), None);
    }

    #[test]
    fn test_report_file_name_fallback() {
        let parcel = ParcelId::new("parcel-9");
        let report = ReportFile { file_name: None, content_type: None, bytes: vec![] };
        assert_eq!(report.file_name_or_default(&parcel), "soil_report_parcel-9.pdf");

        let named = ReportFile { file_name: Some("r.pdf".into()), ..report };
        assert_eq!(named.file_name_or_default(&parcel), "r.pdf");
    }

    #[test]
    fn test_report_endpoint() {
        assert_eq!(
            endpoints::download_report(&ParcelId::new("parcel-1")),
            "/api/download_report/parcel-1"
        );
    }
}
