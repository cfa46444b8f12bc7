//! Application constants for the uploader
//!
//! This module centralizes the constants used throughout the application,
//! organized by functional domain. The admission policy values mirror the
//! widget's shipped defaults; all of them can be overridden through the
//! configuration file at startup.

use std::time::Duration;

/// Default admission policy
pub mod policy {
    /// MIME types admitted by default
    pub const ALLOWED_MIME_TYPES: [&str; 6] = [
        "image/jpeg",
        "image/png",
        "image/gif",
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ];

    /// Maximum admitted file size (5MB)
    pub const MAX_SIZE_BYTES: u64 = 5 * 1024 * 1024;
}

/// Simulated upload timing
pub mod upload {
    use super::Duration;

    /// Interval between progress ticks
    pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

    /// Upper bound of the random per-tick advance, in percent
    pub const MAX_STEP_PERCENT: f64 = 20.0;

    /// Delay between reporting 100% and signalling completion, so observers
    /// can render a full bar before finalization
    pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

    /// Terminal progress value
    pub const COMPLETE_PERCENT: u8 = 100;
}

/// Transient notification behavior
pub mod notify {
    use super::Duration;

    /// How long a notice stays visible before auto-dismissal
    pub const DISMISS_AFTER: Duration = Duration::from_secs(3);
}

/// Human-readable size formatting
pub mod format {
    /// Unit labels, smallest first; sizes at or above 1024^3 stay in GB
    pub const UNIT_LABELS: [&str; 4] = ["B", "KB", "MB", "GB"];

    /// Bytes per unit step
    pub const UNIT_BASE: f64 = 1024.0;
}

/// Terminal display tuning
pub mod display {
    /// Widest a file name is rendered before truncation
    pub const MAX_FILENAME_WIDTH: usize = 32;

    /// Narrowest useful file-name column
    pub const MIN_FILENAME_WIDTH: usize = 12;

    /// Progress bar fill characters
    pub const PROGRESS_CHARS: &str = "##-";
}

// Re-export commonly used constants for convenience
pub use notify::DISMISS_AFTER;
pub use policy::{ALLOWED_MIME_TYPES, MAX_SIZE_BYTES};
pub use upload::{COMPLETE_PERCENT, MAX_STEP_PERCENT, SETTLE_DELAY, TICK_INTERVAL};
