//! Admission policy and validation
//!
//! A pure, deterministic check mapping a file descriptor to an
//! admit-or-reject decision. The type check short-circuits ahead of the size
//! check, so a candidate failing both is reported as an unsupported type.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::app::models::FileDescriptor;
use crate::constants::policy::{ALLOWED_MIME_TYPES, MAX_SIZE_BYTES};
use crate::errors::{AdmissionError, AdmissionResult};

/// Process-wide admission configuration
///
/// Fixed at startup; the widget offers no way to reconfigure it at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionPolicy {
    allowed_mime_types: HashSet<String>,
    max_size_bytes: u64,
}

impl AdmissionPolicy {
    /// Create a policy from an allowed-type set and a size cap
    pub fn new(
        allowed_mime_types: impl IntoIterator<Item = impl Into<String>>,
        max_size_bytes: u64,
    ) -> Self {
        Self {
            allowed_mime_types: allowed_mime_types
                .into_iter()
                .map(Into::into)
                .collect(),
            max_size_bytes,
        }
    }

    /// Decide whether a candidate may enter the list
    ///
    /// # Errors
    ///
    /// [`AdmissionError::UnsupportedType`] when the MIME type is not allowed,
    /// otherwise [`AdmissionError::SizeExceeded`] when the candidate is over
    /// the cap. No side effects either way.
    pub fn check(&self, descriptor: &FileDescriptor) -> AdmissionResult<()> {
        if !self.allowed_mime_types.contains(&descriptor.mime_type) {
            return Err(AdmissionError::UnsupportedType);
        }

        if descriptor.size_bytes > self.max_size_bytes {
            return Err(AdmissionError::SizeExceeded);
        }

        Ok(())
    }

    /// Whether a MIME type is in the allowed set
    pub fn allows_type(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.contains(mime_type)
    }

    /// The size cap in bytes
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self::new(ALLOWED_MIME_TYPES, MAX_SIZE_BYTES)
    }
}
