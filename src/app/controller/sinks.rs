//! Observer capabilities for the widget's surfaces
//!
//! The controller never touches a concrete visual tree. It depends on two
//! capabilities — a list surface and a notification surface — each
//! satisfiable by a test double. The terminal front-end provides real
//! implementations over indicatif.

use crate::app::models::FileDescriptor;
use crate::app::store::types::ListStats;

use super::notify::{Notice, NoticeId};

/// Surface rendering the file list, its stats, and the drop target
pub trait ListSink {
    /// A file was admitted and appended to the list
    fn entry_added(&mut self, descriptor: &FileDescriptor);

    /// The first entry named `name` was removed
    fn entry_removed(&mut self, name: &str);

    /// The whole list was cleared
    fn entries_cleared(&mut self);

    /// A progress tick for `name`; values are non-decreasing up to 100
    fn progress_changed(&mut self, name: &str, percent: u8);

    /// The upload for `name` finished; the entry may render as final
    fn upload_finished(&mut self, name: &str);

    /// Aggregate stats changed after an add/remove/clear
    fn stats_changed(&mut self, stats: ListStats);

    /// The drag-hover preview changed; an empty slice clears it
    fn preview_changed(&mut self, names: &[String]);

    /// The drop target's hover highlight toggled
    fn hover_changed(&mut self, hovering: bool);
}

/// Surface showing transient notices
pub trait NotificationSink {
    /// A notice became visible
    fn notice_posted(&mut self, notice: &Notice);

    /// A previously posted notice self-dismissed
    fn notice_dismissed(&mut self, id: NoticeId);
}

/// List sink that ignores everything, for headless operation
#[derive(Debug, Default)]
pub struct NullListSink;

impl ListSink for NullListSink {
    fn entry_added(&mut self, _descriptor: &FileDescriptor) {}
    fn entry_removed(&mut self, _name: &str) {}
    fn entries_cleared(&mut self) {}
    fn progress_changed(&mut self, _name: &str, _percent: u8) {}
    fn upload_finished(&mut self, _name: &str) {}
    fn stats_changed(&mut self, _stats: ListStats) {}
    fn preview_changed(&mut self, _names: &[String]) {}
    fn hover_changed(&mut self, _hovering: bool) {}
}

/// Notification sink that ignores everything, for headless operation
#[derive(Debug, Default)]
pub struct NullNotificationSink;

impl NotificationSink for NullNotificationSink {
    fn notice_posted(&mut self, _notice: &Notice) {}
    fn notice_dismissed(&mut self, _id: NoticeId) {}
}
