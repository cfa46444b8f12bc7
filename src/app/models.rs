//! Data models for the uploader
//!
//! This module defines the descriptor type identifying a candidate or
//! admitted file, and the helpers that build descriptors from the local
//! filesystem for the terminal front-end.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DescriptorError, DescriptorResult};

/// The name/type/size triple identifying a candidate or admitted file
///
/// Immutable once admitted. Identity is `name`: there is no deduplication by
/// content or path, so two candidates sharing a name collide in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name as presented to the user (non-empty)
    pub name: String,
    /// MIME type string checked against the admission policy
    pub mime_type: String,
    /// Size in bytes
    pub size_bytes: u64,
}

impl FileDescriptor {
    /// Create a descriptor from its parts
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::EmptyName`] when `name` is empty.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
    ) -> DescriptorResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DescriptorError::EmptyName);
        }

        Ok(Self {
            name,
            mime_type: mime_type.into(),
            size_bytes,
        })
    }

    /// Build a descriptor for a file on disk
    ///
    /// The name comes from the final path component, the size from file
    /// metadata, and the MIME type from the extension. Unknown extensions map
    /// to `application/octet-stream` and are left for the admission policy to
    /// refuse.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::Unreadable`] when metadata cannot be read
    /// and [`DescriptorError::NotAFile`] for directories and other
    /// non-regular files.
    pub fn from_path(path: &Path) -> DescriptorResult<Self> {
        let metadata = std::fs::metadata(path).map_err(|source| DescriptorError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(DescriptorError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or(DescriptorError::EmptyName)?;

        Self::new(name, mime_type_for(path), metadata.len())
    }

    /// Whether this descriptor names an image
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

impl std::fmt::Display for FileDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mime_type)
    }
}

/// Map a file extension to the MIME type the admission policy speaks
///
/// Covers the document and image kinds the default policy admits; anything
/// else is reported as a generic octet stream.
pub fn mime_type_for(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
    .to_string()
}
