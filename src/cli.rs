//! CLI interface for the job ranker

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "job-ranker")]
#[command(about = "Score and rank job postings against a resume")]
#[command(
    long_about = "Score how well a resume matches a batch of job postings (0-100 per posting, \
with human-readable reasons) and rank the batch by descending score"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a batch of job postings against a resume and rank them
    Rank {
        /// Path to the jobs batch (JSON array of postings)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Path to the resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Show per-dimension score breakdowns
        #[arg(short, long)]
        detailed: bool,

        /// Only display the top N postings
        #[arg(short, long)]
        top: Option<usize>,

        /// Save the ranked batch to a JSON file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
