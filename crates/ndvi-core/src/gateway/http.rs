use crate::error::{NdviError, Result};
use crate::gateway::{ApiGateway, GatewayError, HttpMethod, ReportFile};
use async_trait::async_trait;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use serde_json::Value;
use std::fmt::Display;

/// NDVI backend gateway over HTTP
pub struct HttpGateway {
    /// Base URL of the backend (e.g., "http://localhost:7860")
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpGateway {
    /// Create a gateway for the backend at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(NdviError::ConfigMissing { key: "api_url".to_string() });
        }

        Ok(Self { base_url, client: reqwest::Client::new() })
    }

    /// Create with the default local backend URL
    pub fn localhost() -> Self {
        Self {
            base_url: "http://localhost:7860".to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path; absolute URLs are returned unchanged
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

#[async_trait]
impl ApiGateway for HttpGateway {
    async fn call(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> std::result::Result<Value, GatewayError> {
        let url = self.resolve(endpoint);
        tracing::debug!(%url, ?method, "Sending API request");

        let mut request = self.client.request(method.into(), &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response =
            request.send().await.map_err(|e| transport_failure(endpoint, e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| transport_failure(endpoint, e))?;
        let body = serde_json::from_str::<Value>(&text).map_err(|e| {
            if status.is_success() {
                transport_failure(endpoint, e)
            } else {
                transport_failure(endpoint, format!("Request failed ({})", status))
            }
        })?;

        tracing::debug!(%url, %status, "API response received");
        Ok(body)
    }

    async fn download(&self, endpoint: &str) -> std::result::Result<ReportFile, GatewayError> {
        let url = self.resolve(endpoint);
        tracing::debug!(%url, "Downloading file");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_failure(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&error_text)
                .ok()
                .and_then(|body| crate::gateway::application_error(&body))
                .unwrap_or_else(|| format!("Download failed ({})", status));
            tracing::warn!(%url, %status, "Download rejected by backend");
            return Err(GatewayError::new(message));
        }

        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(file_name_from_disposition);
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_failure(endpoint, e))?;

        Ok(ReportFile { file_name, content_type, bytes: bytes.to_vec() })
    }
}

fn transport_failure(endpoint: &str, err: impl Display) -> GatewayError {
    tracing::error!(endpoint, error = %err, "Fetch error");
    GatewayError::new(err.to_string())
}

/// Pull `filename` out of a `Content-Disposition` header value
fn file_name_from_disposition(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_creation() {
        let gateway = HttpGateway::new("http://backend:8080/").unwrap();
        assert_eq!(gateway.base_url(), "http://backend:8080");
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = HttpGateway::new("  ").err().unwrap();
        assert!(matches!(err, NdviError::ConfigMissing { ref key } if key == "api_url"));
    }

    #[test]
    fn test_localhost_gateway() {
        assert_eq!(HttpGateway::localhost().base_url(), "http://localhost:7860");
    }

    #[test]
    fn test_resolve() {
        let gateway = HttpGateway::new("http://backend").unwrap();
        assert_eq!(gateway.resolve("/api/login"), "http://backend/api/login");
        assert_eq!(gateway.resolve("ndvi_map"), "http://backend/ndvi_map");
        assert_eq!(gateway.resolve("https://tiles.example/x"), "https://tiles.example/x");
    }

    #[test]
    fn test_file_name_from_disposition() {
        assert_eq!(
            file_name_from_disposition("attachment; filename=soil_report_p1.pdf"),
            Some("soil_report_p1.pdf".to_string())
        );
        assert_eq!(
            file_name_from_disposition("attachment; filename=\"report.pdf\""),
            Some("report.pdf".to_string())
        );
        assert_eq!(file_name_from_disposition("inline"), None);
    }
}
