//! Configuration management for the uploader
//!
//! Unified, TOML-backed configuration with zero-config defaults. The file is
//! read once at process start; the resulting policy and timings are fixed for
//! the lifetime of the widget — there is no runtime reconfiguration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::{AdmissionPolicy, NotifyConfig, UploadConfig};
use crate::constants::{notify, policy, upload};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UploaderConfig {
    /// Admission policy settings
    pub policy: PolicySection,
    /// Simulated upload timing
    pub upload: UploadSection,
    /// Transient notification behavior
    pub notify: NotifySection,
}

/// TOML-friendly admission policy settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySection {
    /// MIME types admitted into the list
    pub allowed_mime_types: Vec<String>,
    /// Maximum admitted file size in bytes
    pub max_size_bytes: u64,
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            allowed_mime_types: policy::ALLOWED_MIME_TYPES
                .iter()
                .map(|mime| mime.to_string())
                .collect(),
            max_size_bytes: policy::MAX_SIZE_BYTES,
        }
    }
}

/// TOML-friendly upload timing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSection {
    /// Interval between progress ticks
    #[serde(with = "humantime_serde")]
    pub tick_interval: Duration,
    /// Upper bound of the random per-tick advance, in percent
    pub max_step_percent: f64,
    /// Pause between the 100% report and the completion signal
    #[serde(with = "humantime_serde")]
    pub settle_delay: Duration,
}

impl Default for UploadSection {
    fn default() -> Self {
        Self {
            tick_interval: upload::TICK_INTERVAL,
            max_step_percent: upload::MAX_STEP_PERCENT,
            settle_delay: upload::SETTLE_DELAY,
        }
    }
}

/// TOML-friendly notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifySection {
    /// How long a notice stays visible before auto-dismissal
    #[serde(with = "humantime_serde")]
    pub dismiss_after: Duration,
}

impl Default for NotifySection {
    fn default() -> Self {
        Self {
            dismiss_after: notify::DISMISS_AFTER,
        }
    }
}

impl UploaderConfig {
    /// Default configuration file location, when a home directory exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("drop-uploader").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location
    ///
    /// With no explicit path, a missing default file falls back to the
    /// shipped defaults instead of failing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when an explicitly named file is missing or
    /// either source fails to parse or validate.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(explicit) => Self::from_file(explicit),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::from_file(&default),
                _ => {
                    debug!("no configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and validate a configuration file
    fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io(source)
            }
        })?;

        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.policy.max_size_bytes == 0 {
            return Err(ConfigError::Invalid {
                reason: "policy.max_size_bytes must be greater than 0".to_string(),
            });
        }
        if self.policy.allowed_mime_types.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "policy.allowed_mime_types must not be empty".to_string(),
            });
        }
        self.upload_config()
            .validate()
            .map_err(|reason| ConfigError::Invalid { reason })?;
        Ok(())
    }

    /// The runtime admission policy this configuration describes
    pub fn admission_policy(&self) -> AdmissionPolicy {
        AdmissionPolicy::new(
            self.policy.allowed_mime_types.iter().cloned(),
            self.policy.max_size_bytes,
        )
    }

    /// The runtime upload timing this configuration describes
    pub fn upload_config(&self) -> UploadConfig {
        UploadConfig {
            tick_interval: self.upload.tick_interval,
            max_step_percent: self.upload.max_step_percent,
            settle_delay: self.upload.settle_delay,
        }
    }

    /// The runtime notification timing this configuration describes
    pub fn notify_config(&self) -> NotifyConfig {
        NotifyConfig {
            dismiss_after: self.notify.dismiss_after,
        }
    }
}
