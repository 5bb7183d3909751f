//! Standalone HTML snapshots of the dashboard.
//!
//! A report is staged next to its final name and renamed into place, so a
//! reader opening `dashboard--*.html` never sees a half-written page.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use engine_logging::{engine_debug, engine_info};
use resume_core::{render_document, AppViewModel};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report location {} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot create report directory {}: {source}", dir.display())]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot save dashboard {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// `dashboard--{short_hash(source_name)}.html`; the same upload always maps to
/// the same report file.
pub fn report_filename(source_name: &str) -> String {
    format!("dashboard--{}.html", short_hash(source_name))
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}

/// Saves rendered dashboards under one output directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the report for `source_name` lands.
    pub fn path_for(&self, source_name: &str) -> PathBuf {
        self.output_dir.join(report_filename(source_name))
    }

    /// Renders `view` and replaces any earlier report for the same upload.
    pub fn write(
        &self,
        source_name: &str,
        view: &AppViewModel,
        generated_at: &str,
    ) -> Result<PathBuf, ReportError> {
        self.prepare_dir()?;
        let path = self.path_for(source_name);
        let html = render_document(view, generated_at);

        let save_err = |source: io::Error| ReportError::Save {
            path: path.clone(),
            source,
        };
        let mut staged = tempfile::Builder::new()
            .prefix(".dashboard-")
            .suffix(".partial")
            .tempfile_in(&self.output_dir)
            .map_err(save_err)?;
        staged.write_all(html.as_bytes()).map_err(save_err)?;
        staged.as_file().sync_all().map_err(save_err)?;
        // Replaces an earlier report for the same upload.
        staged.persist(&path).map_err(|err| save_err(err.error))?;

        engine_info!("Saved dashboard for {} to {}", source_name, path.display());
        Ok(path)
    }

    fn prepare_dir(&self) -> Result<(), ReportError> {
        let dir = &self.output_dir;
        if dir.is_dir() {
            return Ok(());
        }
        if dir.exists() {
            return Err(ReportError::NotADirectory(dir.clone()));
        }
        fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
            dir: dir.clone(),
            source,
        })?;
        engine_debug!("Created report directory {}", dir.display());
        Ok(())
    }
}
