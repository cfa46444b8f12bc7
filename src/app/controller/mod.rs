//! Admission orchestration
//!
//! The controller wires the validator, the file list, and the upload
//! simulator together in response to external events. Each candidate in a
//! submitted batch is decided independently: a rejection posts a transient
//! notice and never blocks the rest of the batch; an admission appends to the
//! list and starts a simulation whose ticks arrive back here as discrete
//! messages.
//!
//! Everything runs on one logical event loop. The externally triggered
//! operations (submit, removal, clear, drag events) are synchronous and run
//! to completion between simulator ticks, so the list's sequence and
//! aggregate counter are never mutated concurrently. Removing a file
//! mid-upload simply stops the list from reacting to that file's remaining
//! ticks — the simulation itself runs to completion and its success notice
//! still fires.
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
//! let batch = vec![FileDescriptor::new("a.png", "image/png", 2048)?];
//! controller.submit(batch);
//! controller.run_until_settled().await;
//! assert_eq!(controller.stats().count, 1);
//! # Ok(())
//! # }
//! ```

pub mod drag;
pub mod notify;
pub mod sinks;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::app::models::FileDescriptor;
use crate::app::policy::AdmissionPolicy;
use crate::app::store::{FileListStore, ListEntry, ListStats};
use crate::app::upload::{self, UploadConfig, UploadEvent};

pub use drag::{DragCounter, DragEvent};
pub use notify::{Notice, NoticeId, NoticeKind, NotifyConfig};
pub use sinks::{ListSink, NotificationSink, NullListSink, NullNotificationSink};

/// Message delivered to the controller's event loop
#[derive(Debug)]
enum ControllerMessage {
    /// An upload simulation tick or completion
    Upload(UploadEvent),
    /// A notice's display duration elapsed
    NoticeExpired(NoticeId),
}

/// Orchestrates admission, list state, and simulated uploads
///
/// Owns the store outright; observers are reached only through the injected
/// sink capabilities.
pub struct AdmissionController<L, N> {
    policy: AdmissionPolicy,
    upload_config: UploadConfig,
    notify_config: NotifyConfig,
    store: FileListStore,
    drag: DragCounter,
    list_sink: L,
    notify_sink: N,
    upload_tx: mpsc::UnboundedSender<UploadEvent>,
    upload_rx: mpsc::UnboundedReceiver<UploadEvent>,
    expiry_tx: mpsc::UnboundedSender<NoticeId>,
    expiry_rx: mpsc::UnboundedReceiver<NoticeId>,
    active_uploads: usize,
    pending_notices: HashSet<NoticeId>,
    next_notice_id: NoticeId,
}

impl<L: ListSink, N: NotificationSink> AdmissionController<L, N> {
    /// Create a controller over the given policy, timings, and surfaces
    pub fn new(
        policy: AdmissionPolicy,
        upload_config: UploadConfig,
        notify_config: NotifyConfig,
        list_sink: L,
        notify_sink: N,
    ) -> Self {
        let (upload_tx, upload_rx) = mpsc::unbounded_channel();
        let (expiry_tx, expiry_rx) = mpsc::unbounded_channel();

        Self {
            policy,
            upload_config,
            notify_config,
            store: FileListStore::new(),
            drag: DragCounter::new(),
            list_sink,
            notify_sink,
            upload_tx,
            upload_rx,
            expiry_tx,
            expiry_rx,
            active_uploads: 0,
            pending_notices: HashSet::new(),
            next_notice_id: 0,
        }
    }

    /// Submit a batch of candidates for admission
    ///
    /// Candidates are decided independently and in order. Rejections are
    /// reported through the notification sink and do not stop later
    /// candidates; admitted files enter the list and start uploading
    /// immediately. Must run inside a tokio runtime — each admission spawns
    /// a simulation task.
    pub fn submit(&mut self, candidates: Vec<FileDescriptor>) {
        for candidate in candidates {
            match self.policy.check(&candidate) {
                Err(rejection) => {
                    warn!("rejected {}: {}", candidate.name, rejection);
                    self.post_notice(NoticeKind::Rejection, rejection.to_string());
                }
                Ok(()) => self.admit(candidate),
            }
        }
    }

    /// Remove the first list entry matching `name`
    ///
    /// A request naming an absent file is a silent no-op. An upload still in
    /// flight for the removed file keeps running; its remaining ticks are
    /// dropped on arrival.
    pub fn request_removal(&mut self, name: &str) {
        match self.store.remove(name) {
            Some(_removed) => {
                self.list_sink.entry_removed(name);
                self.list_sink.stats_changed(self.store.stats());
            }
            None => debug!("removal requested for unknown file {name}"),
        }
    }

    /// Clear the whole list
    pub fn request_clear_all(&mut self) {
        let removed = self.store.clear();
        info!("cleared {removed} files");
        self.list_sink.entries_cleared();
        self.list_sink.stats_changed(self.store.stats());
    }

    /// Feed a drag gesture event into the hover state machine
    pub fn drag_event(&mut self, event: DragEvent) {
        match event {
            DragEvent::Enter { names } => {
                if self.drag.enter() == 1 {
                    self.list_sink.hover_changed(true);
                }
                self.list_sink.preview_changed(&names);
            }
            DragEvent::Over { names } => {
                self.list_sink.preview_changed(&names);
            }
            DragEvent::Leave => {
                if self.drag.leave() == 0 {
                    self.list_sink.hover_changed(false);
                    self.list_sink.preview_changed(&[]);
                }
            }
            DragEvent::Drop { files } => {
                self.drag.reset();
                self.list_sink.hover_changed(false);
                self.list_sink.preview_changed(&[]);
                self.submit(files);
            }
        }
    }

    /// Process messages until every in-flight upload has completed
    ///
    /// Notice-expiry messages that arrive along the way are handled too;
    /// dismissal timers still pending when the last upload finishes are left
    /// for a later [`run_until_idle`](Self::run_until_idle).
    pub async fn run_until_settled(&mut self) {
        while self.active_uploads > 0 {
            let message = self.next_message().await;
            self.dispatch(message);
        }
    }

    /// Process messages until uploads are done and all notices dismissed
    pub async fn run_until_idle(&mut self) {
        while self.active_uploads > 0 || !self.pending_notices.is_empty() {
            let message = self.next_message().await;
            self.dispatch(message);
        }
    }

    /// Current aggregate stats of the list
    pub fn stats(&self) -> ListStats {
        self.store.stats()
    }

    /// The list entries in insertion order
    pub fn entries(&self) -> &[ListEntry] {
        self.store.entries()
    }

    /// Number of uploads still in flight
    pub fn active_uploads(&self) -> usize {
        self.active_uploads
    }

    /// Number of notices not yet dismissed
    pub fn pending_notices(&self) -> usize {
        self.pending_notices.len()
    }

    /// Whether a drag is currently over the drop target
    pub fn is_drag_hovering(&self) -> bool {
        self.drag.is_hovering()
    }

    /// Tear the controller down and recover the injected surfaces
    ///
    /// Simulations still in flight keep running against a closed channel and
    /// wind down silently.
    pub fn into_sinks(self) -> (L, N) {
        (self.list_sink, self.notify_sink)
    }

    /// Admit a validated candidate: list it and start its upload
    fn admit(&mut self, descriptor: FileDescriptor) {
        info!("admitting {descriptor}");
        let name = descriptor.name.clone();

        self.store.add(descriptor.clone());
        self.list_sink.entry_added(&descriptor);
        self.list_sink.stats_changed(self.store.stats());

        upload::spawn(name, self.upload_config.clone(), self.upload_tx.clone());
        self.active_uploads += 1;
    }

    /// Post a transient notice and schedule its dismissal
    fn post_notice(&mut self, kind: NoticeKind, message: String) {
        let id = self.next_notice_id;
        self.next_notice_id += 1;

        let notice = Notice::new(id, kind, message);
        self.pending_notices.insert(id);
        self.notify_sink.notice_posted(&notice);

        let expiry_tx = self.expiry_tx.clone();
        let dismiss_after = self.notify_config.dismiss_after;
        tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;
            let _ = expiry_tx.send(id);
        });
    }

    /// Wait for the next message from either channel
    ///
    /// Both senders live on `self`, so the channels never close and the
    /// select cannot be starved of branches.
    async fn next_message(&mut self) -> ControllerMessage {
        tokio::select! {
            Some(event) = self.upload_rx.recv() => ControllerMessage::Upload(event),
            Some(id) = self.expiry_rx.recv() => ControllerMessage::NoticeExpired(id),
        }
    }

    fn dispatch(&mut self, message: ControllerMessage) {
        match message {
            ControllerMessage::Upload(event) => self.on_upload_event(event),
            ControllerMessage::NoticeExpired(id) => self.on_notice_expired(id),
        }
    }

    fn on_upload_event(&mut self, event: UploadEvent) {
        match event {
            UploadEvent::Progress { name, percent } => {
                match self.store.set_progress(&name, percent) {
                    Some(current) => self.list_sink.progress_changed(&name, current),
                    // The file was removed mid-upload; ticks become no-ops.
                    None => debug!("dropping progress tick for removed file {name}"),
                }
            }
            UploadEvent::Completed { name } => {
                self.active_uploads = self.active_uploads.saturating_sub(1);
                if self.store.mark_completed(&name) {
                    self.list_sink.upload_finished(&name);
                }
                // The success notice fires even when the file was removed
                // before its upload finished.
                self.post_notice(NoticeKind::Success, format!("{name} uploaded"));
            }
        }
    }

    fn on_notice_expired(&mut self, id: NoticeId) {
        if self.pending_notices.remove(&id) {
            self.notify_sink.notice_dismissed(id);
        }
    }
}
