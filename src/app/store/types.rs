//! Core data structures for the file list
//!
//! This module defines the per-file upload state, the list entry pairing a
//! descriptor with its state, and the aggregate statistics snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::format::format_size;
use crate::app::models::FileDescriptor;
use crate::constants::upload::COMPLETE_PERCENT;

/// Live progress of one simulated upload
///
/// Created at admission time at zero. Progress never decreases and is
/// terminal at 100 with `completed` set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadState {
    /// Progress in percent, always within [0, 100]
    pub progress_percent: u8,
    /// Whether the completion signal has been observed
    pub completed: bool,
}

impl UploadState {
    /// Advance progress to `percent`, clamped to 100
    ///
    /// Returns `true` when the stored value changed. Regressions are ignored,
    /// which keeps the reported sequence non-decreasing even if ticks arrive
    /// with repeated floor values.
    pub fn advance_to(&mut self, percent: u8) -> bool {
        let clamped = percent.min(COMPLETE_PERCENT);
        if clamped > self.progress_percent {
            self.progress_percent = clamped;
            true
        } else {
            false
        }
    }

    /// Enter the terminal state
    pub fn mark_completed(&mut self) {
        self.progress_percent = COMPLETE_PERCENT;
        self.completed = true;
    }

    /// Whether the upload has reached its terminal state
    pub fn is_terminal(&self) -> bool {
        self.completed
    }
}

/// One admitted file and its upload state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    /// The admitted descriptor
    pub descriptor: FileDescriptor,
    /// Simulated upload progress for this entry
    pub upload: UploadState,
    /// When the file was admitted
    pub added_at: DateTime<Utc>,
}

impl ListEntry {
    /// Create an entry for a freshly admitted descriptor
    pub fn new(descriptor: FileDescriptor) -> Self {
        Self {
            descriptor,
            upload: UploadState::default(),
            added_at: Utc::now(),
        }
    }

    /// The entry's identity within the list
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

/// Read-only aggregate snapshot of the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStats {
    /// Number of admitted files
    pub count: usize,
    /// Sum of admitted sizes in bytes
    pub total_size_bytes: u64,
}

impl ListStats {
    /// Human-readable total size
    pub fn formatted_total(&self) -> String {
        format_size(self.total_size_bytes)
    }

    /// One-line summary for display surfaces
    pub fn summary(&self) -> String {
        let plural = if self.count == 1 { "" } else { "s" };
        format!("{} file{}, {}", self.count, plural, self.formatted_total())
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
