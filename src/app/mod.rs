//! Core logic for the uploader
//!
//! This module contains the widget's working parts: the descriptor model,
//! the admission policy, the ordered file list with aggregate accounting,
//! the simulated upload lifecycle, and the controller that orchestrates them
//! in response to external events.
//!
//! # Examples
//!
//! ```rust,no_run
//! use drop_uploader::app::{
//!     AdmissionController, AdmissionPolicy, FileDescriptor, NotifyConfig,
//!     NullListSink, NullNotificationSink, UploadConfig,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut controller = AdmissionController::new(
//!     AdmissionPolicy::default(),
//!     UploadConfig::default(),
//!     NotifyConfig::default(),
//!     NullListSink,
//!     NullNotificationSink,
//! );
//!
//! controller.submit(vec![
//!     FileDescriptor::new("a.png", "image/png", 2048)?,
//!     FileDescriptor::new("b.pdf", "application/pdf", 4096)?,
//! ]);
//! controller.run_until_settled().await;
//! println!("{}", controller.stats().summary());
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod format;
pub mod models;
pub mod policy;
pub mod store;
pub mod upload;

// Re-export main public API
pub use controller::{
    AdmissionController, DragCounter, DragEvent, ListSink, Notice, NoticeId, NoticeKind,
    NotificationSink, NotifyConfig, NullListSink, NullNotificationSink,
};
pub use format::format_size;
pub use models::{mime_type_for, FileDescriptor};
pub use policy::AdmissionPolicy;
pub use store::{FileListStore, ListEntry, ListStats, UploadState};
pub use upload::{UploadConfig, UploadEvent};
