use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use resume_core::AppState;
use resume_engine::ReportWriter;

/// Saves the current dashboard as HTML under `output_dir`. Needs a staged file
/// to name the report after.
pub(crate) fn export_dashboard(state: &AppState, output_dir: &Path) -> anyhow::Result<PathBuf> {
    let source = state
        .staged_file()
        .map(|file| file.name.clone())
        .context("no resume staged; nothing to export")?;
    let generated_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    ReportWriter::new(output_dir.to_path_buf())
        .write(&source, &state.view(), &generated_at)
        .with_context(|| format!("writing dashboard to {}", output_dir.display()))
}
