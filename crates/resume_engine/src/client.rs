use std::time::Duration;

use engine_logging::{engine_debug, engine_info, engine_warn};
use reqwest::multipart::{Form, Part};
use resume_core::{AnalysisResult, StagedFile};
use serde_json::Value;
use url::Url;

use crate::{AnalyzeError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Shown when the backend gives no usable reason for a failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Analysis failed";

#[derive(Debug, Clone)]
pub struct AnalyzeSettings {
    pub base_url: String,
    /// No timeout when unset; the request waits for the backend.
    pub request_timeout: Option<Duration>,
}

impl Default for AnalyzeSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, file: &StagedFile) -> Result<AnalysisResult, AnalyzeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalyzer {
    settings: AnalyzeSettings,
}

impl ReqwestAnalyzer {
    pub fn new(settings: AnalyzeSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, AnalyzeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| AnalyzeError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Analyzer for ReqwestAnalyzer {
    async fn analyze(&self, file: &StagedFile) -> Result<AnalysisResult, AnalyzeError> {
        let endpoint = analyze_endpoint(&self.settings.base_url)?;
        let bytes = tokio::fs::read(&file.path).await.map_err(|err| {
            AnalyzeError::new(
                FailureKind::Io,
                format!("could not read {}: {err}", file.path.display()),
            )
        })?;
        engine_debug!("Read {} bytes from {}", bytes.len(), file.path.display());

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(file.kind.mime_type())
            .map_err(|err| AnalyzeError::new(FailureKind::Network, err.to_string()))?;
        let form = Form::new().part("file", part);

        let client = self.build_client()?;
        engine_info!("POST {} ({})", endpoint, file.name);
        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let message = extract_error_message(&body);
            engine_warn!("Backend returned {}: {}", status, message);
            return Err(AnalyzeError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        serde_json::from_slice::<AnalysisResult>(&body).map_err(|err| {
            engine_warn!("Undecodable analysis body: {}", err);
            AnalyzeError::new(FailureKind::InvalidResponse, GENERIC_FAILURE_MESSAGE)
        })
    }
}

/// `{base_url}/analyze`, tolerating a trailing slash or a path prefix on the base.
pub fn analyze_endpoint(base_url: &str) -> Result<Url, AnalyzeError> {
    let mut base = Url::parse(base_url)
        .map_err(|err| AnalyzeError::new(FailureKind::InvalidUrl, format!("{base_url}: {err}")))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("analyze")
        .map_err(|err| AnalyzeError::new(FailureKind::InvalidUrl, err.to_string()))
}

/// Best reason found in an error body: `detail`, then `error`, then the generic message.
pub fn extract_error_message(body: &[u8]) -> String {
    let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) else {
        return GENERIC_FAILURE_MESSAGE.to_string();
    };
    ["detail", "error"]
        .iter()
        .filter_map(|key| fields.get(*key))
        .find_map(|value| match value {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Null | Value::String(_) | Value::Bool(false) => None,
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> AnalyzeError {
    if err.is_timeout() {
        return AnalyzeError::new(FailureKind::Timeout, err.to_string());
    }
    AnalyzeError::new(FailureKind::Network, err.to_string())
}
