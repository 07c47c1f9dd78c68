use std::fmt;
use std::time::Duration;

use serde::Deserialize;

pub type BatchId = u64;
pub type Generation = u64;

/// Body of a 2xx `POST /upload`. Any 2xx counts as success.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub chunks_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorDetail {
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResponse {
    /// Missing means failure; the client trusts this flag and nothing else.
    #[serde(default)]
    pub success: bool,
    pub answer: Option<String>,
    pub sources: Option<Vec<SourceWire>>,
    pub error: Option<String>,
}

/// One ranked source. Missing fields fall back to empty values so an odd
/// entry never costs the whole answer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SourceWire {
    #[serde(default, alias = "documentId")]
    pub document_id: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default, alias = "textPreview")]
    pub text_preview: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub total_documents: u64,
    #[serde(default)]
    pub total_chunks: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    UploadCompleted {
        batch_id: BatchId,
        index: usize,
        result: Result<UploadReceipt, BackendError>,
    },
    QueryCompleted {
        generation: Generation,
        query: String,
        elapsed: Duration,
        result: Result<QueryResponse, BackendError>,
    },
    StatsLoaded(Result<StatsSnapshot, BackendError>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct BackendError {
    pub kind: FailureKind,
    pub message: String,
}

impl BackendError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-2xx reply; `message` carries the server's detail when it sent one.
    HttpStatus(u16),
    Timeout,
    Network,
    /// Body was not the JSON we expected.
    Decode,
    /// Local file could not be read.
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Io => write!(f, "io error"),
        }
    }
}
