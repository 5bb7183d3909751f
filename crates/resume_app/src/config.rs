//! Application settings: a RON file, then command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use engine_logging::{engine_info, LogDestination, DEFAULT_LOG_FILE};
use log::LevelFilter;
use resume_engine::{AnalyzeSettings, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Read from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "resume_app.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    File,
    Terminal,
    #[default]
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub request_timeout_secs: Option<u64>,
    pub output_dir: PathBuf,
    pub frame_interval_ms: u64,
    pub log_destination: LogTarget,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            output_dir: PathBuf::from("output"),
            frame_interval_ms: 16,
            log_destination: LogTarget::default(),
        }
    }
}

impl AppConfig {
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.base_url = endpoint.clone();
        }
        if let Some(dir) = &cli.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(secs) = cli.timeout {
            self.request_timeout_secs = Some(secs);
        }
        if let Some(target) = cli.log {
            self.log_destination = target;
        }
    }

    pub fn analyze_settings(&self) -> AnalyzeSettings {
        AnalyzeSettings {
            base_url: self.base_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    pub fn init_logging(&self, verbose: bool) {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        engine_logging::initialize(
            self.log_destination.into(),
            level,
            Path::new(DEFAULT_LOG_FILE),
        );
        engine_info!("Configuration: {:?}", self);
    }
}

/// Loads `explicit`, or the default file when present, or built-in defaults.
/// An explicitly named file must exist.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_config(path)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> anyhow::Result<AppConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
}
