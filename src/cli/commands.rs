//! Command implementations
//!
//! The single `upload` flow: load configuration, apply CLI overrides, build
//! descriptors for the named files, then hand the batch to the admission
//! controller and drive it until every simulated upload has settled.

use tracing::{info, warn};

use crate::app::{AdmissionController, FileDescriptor};
use crate::cli::args::Cli;
use crate::cli::progress::terminal_sinks;
use crate::config::UploaderConfig;
use crate::errors::Result;

/// Run the upload flow for the CLI invocation
pub async fn handle_upload(cli: Cli) -> Result<()> {
    let mut config = UploaderConfig::load(cli.config.as_deref())?;

    // CLI overrides layer on top of the configuration file.
    if let Some(max_size) = cli.max_size {
        config.policy.max_size_bytes = max_size;
    }
    config
        .policy
        .allowed_mime_types
        .extend(cli.allow.iter().cloned());
    config.validate()?;

    // Unreadable candidates are skipped, not fatal: the batch contract says
    // every candidate is decided independently.
    let mut candidates = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        match FileDescriptor::from_path(path) {
            Ok(descriptor) => candidates.push(descriptor),
            Err(error) => warn!("skipping {}: {}", path.display(), error),
        }
    }
    info!("submitting {} candidates", candidates.len());

    let (list_sink, notify_sink) = terminal_sinks()?;
    let mut controller = AdmissionController::new(
        config.admission_policy(),
        config.upload_config(),
        config.notify_config(),
        list_sink,
        notify_sink,
    );

    controller.submit(candidates);
    controller.run_until_settled().await;

    let stats = controller.stats();
    let (list_sink, _notifier) = controller.into_sinks();
    list_sink.finish();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats.summary());
    }

    Ok(())
}
