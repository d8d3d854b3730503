use std::fmt;

use bytes::Bytes;
use thiserror::Error;

pub type RequestId = u64;

/// Everything the backend receives for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub filename: String,
    pub bytes: Bytes,
    /// Sent exactly as typed, surrounding whitespace included.
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadReply {
    Failed(String),
    Translated(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UploadStarted {
        request_id: RequestId,
    },
    UploadCompleted {
        request_id: RequestId,
        result: Result<UploadReply, UploadError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct UploadError {
    pub kind: FailureKind,
    pub message: String,
}

impl UploadError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Connect,
    Timeout,
    Network,
    MalformedReply,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid backend url"),
            FailureKind::Connect => write!(f, "connection failed"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedReply => write!(f, "malformed reply"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start upload worker: {0}")]
    Startup(#[from] std::io::Error),
    #[error("upload worker is no longer running")]
    Disconnected,
}
