use std::path::Path;
use std::time::Duration;

use docdash_logging::{dash_debug, dash_warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use serde_json::json;

use crate::types::ErrorDetail;
use crate::{BackendError, FailureKind, QueryResponse, StatsSnapshot, UploadReceipt};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const UPLOAD_FAILED: &str = "Upload failed";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Whole-request limit. `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// The dashboard backend: `/upload`, `/query` and `/stats`.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Uploads a single file as the multipart field `file`.
    async fn upload(&self, path: &Path, filename: &str) -> Result<UploadReceipt, BackendError>;

    /// Sends one query. A reply with `success: false` is `Ok`; only transport
    /// and decoding problems are errors.
    async fn query(&self, query: &str) -> Result<QueryResponse, BackendError>;

    async fn stats(&self) -> Result<StatsSnapshot, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: ClientSettings) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn upload(&self, path: &Path, filename: &str) -> Result<UploadReceipt, BackendError> {
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            BackendError::new(
                FailureKind::Io,
                format!("failed to read {}: {err}", path.display()),
            )
        })?;
        dash_debug!("Uploading {} ({} bytes)", filename, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime_for(filename))
            .map_err(map_reqwest_error)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorDetail>(&body)
                .ok()
                .and_then(|e| e.detail)
                .unwrap_or_else(|| UPLOAD_FAILED.to_string());
            dash_warn!("Upload of {} rejected with {}: {}", filename, status, detail);
            return Err(BackendError::new(
                FailureKind::HttpStatus(status.as_u16()),
                detail,
            ));
        }
        decode(&body)
    }

    async fn query(&self, query: &str) -> Result<QueryResponse, BackendError> {
        let payload = json!({ "query": query }).to_string();
        let response = self
            .client
            .post(self.endpoint("/query"))
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The success flag in the body decides the outcome, not the status.
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        decode(&body)
    }

    async fn stats(&self) -> Result<StatsSnapshot, BackendError> {
        let response = self
            .client
            .get(self.endpoint("/stats"))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        decode(&body)
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, BackendError> {
    serde_json::from_slice(body).map_err(|err| BackendError::new(FailureKind::Decode, err.to_string()))
}

fn mime_for(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return BackendError::new(FailureKind::Decode, err.to_string());
    }
    BackendError::new(FailureKind::Network, err.to_string())
}
