//! Uploader CLI application
//!
//! Command-line front-end for the admission and simulated-upload engine.
//! Candidates named on the command line are validated against the admission
//! policy and uploaded with per-file progress bars.

use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use drop_uploader::cli::{handle_upload, Cli};
use drop_uploader::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    init_logging(&cli);

    info!("drop_uploader v{} starting", env!("CARGO_PKG_VERSION"));

    handle_upload(cli).await
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("drop_uploader={}", log_level).parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
