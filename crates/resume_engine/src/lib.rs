//! Resume engine: backend analysis requests, the worker thread that runs
//! them, and report persistence.
mod client;
mod engine;
mod report;
mod types;

pub use client::{
    analyze_endpoint, extract_error_message, AnalyzeSettings, Analyzer, ReqwestAnalyzer,
    DEFAULT_BASE_URL, GENERIC_FAILURE_MESSAGE,
};
pub use engine::EngineHandle;
pub use report::{report_filename, ReportError, ReportWriter};
pub use types::{AnalyzeError, EngineEvent, FailureKind};
