use std::path::PathBuf;

use clap::Parser;

use crate::config::LogTarget;

#[derive(Debug, Parser)]
#[command(name = "resume_app")]
#[command(about = "Analyze a resume against the backend and explore the dashboard", long_about = None)]
pub struct Cli {
    /// Resume to analyze (.pdf, .docx or .txt). Without it the app starts interactively.
    pub file: Option<PathBuf>,
    /// Base URL of the analysis backend
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
    /// RON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Directory for exported dashboards
    #[arg(long = "out", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
    /// Keep running and read commands from stdin
    #[arg(short, long)]
    pub interactive: bool,
    /// Where log lines go
    #[arg(long, value_enum)]
    pub log: Option<LogTarget>,
    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
