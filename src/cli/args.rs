//! Command-line argument definitions
//!
//! The binary takes a batch of candidate files and funnels them through the
//! same admission contract the drop gesture uses. Policy overrides layer on
//! top of whatever the configuration file provides.

use std::path::PathBuf;

use clap::Parser;

/// Validate files against the admission policy and simulate uploading them
#[derive(Debug, Parser)]
#[command(name = "drop_uploader", version, about)]
pub struct Cli {
    /// Candidate files to validate and upload
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Override the maximum admitted file size in bytes
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<u64>,

    /// Admit an additional MIME type (repeatable)
    #[arg(long = "allow", value_name = "MIME")]
    pub allow: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the final list statistics as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Tracing level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
