//! Transient notifications
//!
//! Rejections and upload successes surface as notices that self-dismiss
//! after a fixed duration. Each notice carries a process-unique id so the
//! dismissal can be routed back to the surface that rendered it.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::notify::DISMISS_AFTER;

/// Identifier tying a dismissal to the notice it retracts
pub type NoticeId = u64;

/// What a notice is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// A candidate was refused admission
    Rejection,
    /// A simulated upload finished
    Success,
}

/// A message shown to the user until it self-dismisses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Process-unique identifier
    pub id: NoticeId,
    /// Rejection or success
    pub kind: NoticeKind,
    /// User-facing text
    pub message: String,
    /// When the notice was posted
    pub posted_at: DateTime<Utc>,
}

impl Notice {
    /// Create a notice stamped with the current time
    pub fn new(id: NoticeId, kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
            posted_at: Utc::now(),
        }
    }

    /// Whether this notice reports a rejection
    pub fn is_rejection(&self) -> bool {
        self.kind == NoticeKind::Rejection
    }
}

/// Notification timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// How long a notice stays visible before auto-dismissal
    pub dismiss_after: Duration,
}

impl NotifyConfig {
    /// Create a configuration with the shipped default
    pub fn new() -> Self {
        Self {
            dismiss_after: DISMISS_AFTER,
        }
    }

    /// Millisecond-scale dismissal for tests
    pub fn for_testing() -> Self {
        Self {
            dismiss_after: Duration::from_millis(5),
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self::new()
    }
}
