use std::fmt;

use resume_core::{AnalysisResult, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisResult, AnalyzeError>,
    },
}

/// A failed analysis. `message` is what the user is shown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AnalyzeError {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalyzeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Io,
    HttpStatus(u16),
    Timeout,
    Network,
    InvalidResponse,
    EngineUnavailable,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Io => write!(f, "file read error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
            FailureKind::EngineUnavailable => write!(f, "engine unavailable"),
        }
    }
}
