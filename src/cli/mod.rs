//! Command-line interface components
//!
//! This module contains CLI-specific code for the uploader binary: argument
//! parsing, the upload command, and the terminal implementations of the
//! controller's sink capabilities.

pub mod args;
pub mod commands;
pub mod progress;

pub use args::Cli;
pub use commands::handle_upload;
pub use progress::{terminal_sinks, TerminalListSink, TerminalNotifier};
