//! Error types for the uploader
//!
//! The widget itself has exactly one runtime error taxonomy: admission
//! rejection. Everything else here covers the edges of the program — building
//! descriptors from the filesystem for the CLI and loading configuration.
//! Rejections are recoverable by design: they are reported per candidate and
//! never abort a batch.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a candidate file is refused admission
///
/// The display strings are the user-facing rejection messages; the type check
/// takes precedence over the size check when both fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionError {
    /// MIME type is not in the policy's allowed set
    #[error("Unsupported file type")]
    UnsupportedType,

    /// File is larger than the policy's size cap
    #[error("File exceeds size limit")]
    SizeExceeded,
}

/// Errors building a [`crate::app::FileDescriptor`] from the filesystem
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// Candidate has no usable file name
    #[error("Candidate file has an empty name")]
    EmptyName,

    /// Path exists but is not a regular file
    #[error("Not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Metadata for the candidate could not be read
    #[error("Cannot read candidate file: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Configuration value failed validation
    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },

    /// I/O error reading the configuration file
    #[error("I/O error reading configuration")]
    Io(#[from] std::io::Error),
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Admission rejection
    #[error(transparent)]
    Admission(#[from] AdmissionError),

    /// Descriptor construction error
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON serialization error (stats output)
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Check if the error is recoverable
    ///
    /// Admission rejections never halt the widget; each rejected candidate is
    /// reported independently and processing continues for the rest of the
    /// batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Admission(_) | AppError::Descriptor(_))
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Admission(_) => "admission",
            AppError::Descriptor(_) => "descriptor",
            AppError::Config(_) => "config",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Admission result type alias
pub type AdmissionResult<T> = std::result::Result<T, AdmissionError>;

/// Descriptor result type alias
pub type DescriptorResult<T> = std::result::Result<T, DescriptorError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
