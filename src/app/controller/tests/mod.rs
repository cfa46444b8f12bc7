//! Scenario tests for the admission controller
//!
//! The controller is exercised end to end through recording sink doubles:
//! every externally visible effect lands in a call log the assertions can
//! inspect.

use std::sync::{Arc, Mutex};

use crate::app::models::FileDescriptor;
use crate::app::policy::AdmissionPolicy;
use crate::app::store::ListStats;
use crate::app::upload::UploadConfig;

use super::sinks::{ListSink, NotificationSink};
use super::{AdmissionController, DragEvent, Notice, NoticeId, NoticeKind, NotifyConfig};

#[derive(Debug, Clone, PartialEq)]
enum ListCall {
    Added(String),
    Removed(String),
    Cleared,
    Progress(String, u8),
    Finished(String),
    Stats(ListStats),
    Preview(Vec<String>),
    Hover(bool),
}

#[derive(Clone, Default)]
struct RecordingListSink {
    calls: Arc<Mutex<Vec<ListCall>>>,
}

impl RecordingListSink {
    fn calls(&self) -> Vec<ListCall> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: ListCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ListSink for RecordingListSink {
    fn entry_added(&mut self, descriptor: &FileDescriptor) {
        self.push(ListCall::Added(descriptor.name.clone()));
    }

    fn entry_removed(&mut self, name: &str) {
        self.push(ListCall::Removed(name.to_string()));
    }

    fn entries_cleared(&mut self) {
        self.push(ListCall::Cleared);
    }

    fn progress_changed(&mut self, name: &str, percent: u8) {
        self.push(ListCall::Progress(name.to_string(), percent));
    }

    fn upload_finished(&mut self, name: &str) {
        self.push(ListCall::Finished(name.to_string()));
    }

    fn stats_changed(&mut self, stats: ListStats) {
        self.push(ListCall::Stats(stats));
    }

    fn preview_changed(&mut self, names: &[String]) {
        self.push(ListCall::Preview(names.to_vec()));
    }

    fn hover_changed(&mut self, hovering: bool) {
        self.push(ListCall::Hover(hovering));
    }
}

#[derive(Debug, Clone, PartialEq)]
enum NotifyCall {
    Posted(NoticeId, NoticeKind, String),
    Dismissed(NoticeId),
}

#[derive(Clone, Default)]
struct RecordingNotificationSink {
    calls: Arc<Mutex<Vec<NotifyCall>>>,
}

impl RecordingNotificationSink {
    fn calls(&self) -> Vec<NotifyCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notice_posted(&mut self, notice: &Notice) {
        self.calls.lock().unwrap().push(NotifyCall::Posted(
            notice.id,
            notice.kind,
            notice.message.clone(),
        ));
    }

    fn notice_dismissed(&mut self, id: NoticeId) {
        self.calls.lock().unwrap().push(NotifyCall::Dismissed(id));
    }
}

type TestController = AdmissionController<RecordingListSink, RecordingNotificationSink>;

fn test_controller() -> (TestController, RecordingListSink, RecordingNotificationSink) {
    let list_sink = RecordingListSink::default();
    let notify_sink = RecordingNotificationSink::default();
    let controller = AdmissionController::new(
        AdmissionPolicy::default(),
        UploadConfig::for_testing(),
        NotifyConfig::for_testing(),
        list_sink.clone(),
        notify_sink.clone(),
    );
    (controller, list_sink, notify_sink)
}

fn png(name: &str, size: u64) -> FileDescriptor {
    FileDescriptor::new(name, "image/png", size).unwrap()
}

fn progress_values(calls: &[ListCall], name: &str) -> Vec<u8> {
    calls
        .iter()
        .filter_map(|call| match call {
            ListCall::Progress(n, percent) if n == name => Some(*percent),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn admitting_a_file_tracks_stats_and_runs_its_upload() {
    let (mut controller, list, notify) = test_controller();

    controller.submit(vec![png("a.png", 2048)]);

    let stats = controller.stats();
    assert_eq!(stats.count, 1);
    assert_eq!(stats.total_size_bytes, 2048);
    assert_eq!(stats.formatted_total(), "2 KB");
    assert_eq!(controller.active_uploads(), 1);

    controller.run_until_settled().await;
    assert_eq!(controller.active_uploads(), 0);

    // Progress ticks are non-decreasing integers ending at exactly 100.
    let calls = list.calls();
    let percents = progress_values(&calls, "a.png");
    assert!(!percents.is_empty());
    assert!(percents.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(*percents.last().unwrap(), 100);

    // Exactly one finish signal, and the entry is terminal.
    let finishes = calls
        .iter()
        .filter(|call| matches!(call, ListCall::Finished(name) if name == "a.png"))
        .count();
    assert_eq!(finishes, 1);
    assert!(controller.entries()[0].upload.is_terminal());

    // The success notice carries the file name.
    assert!(notify.calls().iter().any(|call| matches!(
        call,
        NotifyCall::Posted(_, NoticeKind::Success, message) if message == "a.png uploaded"
    )));
}

#[tokio::test]
async fn unsupported_types_are_rejected() {
    let (mut controller, list, notify) = test_controller();

    let candidate = FileDescriptor::new("b.exe", "application/x-msdownload", 100).unwrap();
    controller.submit(vec![candidate]);

    assert_eq!(controller.stats().count, 0);
    assert!(!list
        .calls()
        .iter()
        .any(|call| matches!(call, ListCall::Added(_))));
    assert!(notify.calls().iter().any(|call| matches!(
        call,
        NotifyCall::Posted(_, NoticeKind::Rejection, message) if message == "Unsupported file type"
    )));
}

#[tokio::test]
async fn oversized_files_are_rejected() {
    let (mut controller, _list, notify) = test_controller();

    let candidate =
        FileDescriptor::new("c.pdf", "application/pdf", 6 * 1024 * 1024).unwrap();
    controller.submit(vec![candidate]);

    assert_eq!(controller.stats().count, 0);
    assert!(notify.calls().iter().any(|call| matches!(
        call,
        NotifyCall::Posted(_, NoticeKind::Rejection, message) if message == "File exceeds size limit"
    )));
}

#[tokio::test]
async fn a_rejection_never_blocks_the_rest_of_the_batch() {
    let (mut controller, _list, notify) = test_controller();

    let bad = FileDescriptor::new("b.exe", "application/x-msdownload", 100).unwrap();
    let good = png("a.png", 2048);
    controller.submit(vec![bad, good]);

    assert_eq!(controller.stats().count, 1);
    assert_eq!(controller.entries()[0].name(), "a.png");

    let rejections = notify
        .calls()
        .iter()
        .filter(|call| matches!(call, NotifyCall::Posted(_, NoticeKind::Rejection, _)))
        .count();
    assert_eq!(rejections, 1);

    controller.run_until_settled().await;
}

#[tokio::test]
async fn removal_restores_stats_and_repeats_are_no_ops() {
    let (mut controller, list, _notify) = test_controller();

    controller.submit(vec![png("a.png", 2048)]);
    controller.run_until_settled().await;

    controller.request_removal("a.png");
    assert_eq!(controller.stats(), ListStats::default());

    // A second removal of the same name is a silent no-op.
    controller.request_removal("a.png");

    let removals = list
        .calls()
        .iter()
        .filter(|call| matches!(call, ListCall::Removed(name) if name == "a.png"))
        .count();
    assert_eq!(removals, 1);
}

#[tokio::test]
async fn removal_mid_upload_drops_ticks_but_still_reports_success() {
    let (mut controller, list, notify) = test_controller();

    controller.submit(vec![png("fleeting.png", 4096)]);
    // Remove before any tick has been processed: every later tick must be
    // ignored against the missing entry.
    controller.request_removal("fleeting.png");

    controller.run_until_settled().await;

    let calls = list.calls();
    assert!(progress_values(&calls, "fleeting.png").is_empty());
    assert!(!calls
        .iter()
        .any(|call| matches!(call, ListCall::Finished(name) if name == "fleeting.png")));

    // Completion is independent of presence in the list.
    assert!(notify.calls().iter().any(|call| matches!(
        call,
        NotifyCall::Posted(_, NoticeKind::Success, message) if message == "fleeting.png uploaded"
    )));
    assert_eq!(controller.stats(), ListStats::default());
}

#[tokio::test]
async fn clear_all_empties_the_list() {
    let (mut controller, list, _notify) = test_controller();

    controller.submit(vec![png("a.png", 10), png("b.png", 20)]);
    controller.run_until_settled().await;

    controller.request_clear_all();
    assert_eq!(controller.stats(), ListStats::default());
    assert!(list
        .calls()
        .iter()
        .any(|call| matches!(call, ListCall::Cleared)));
}

#[tokio::test]
async fn nested_drag_enters_keep_the_preview_until_the_last_leave() {
    let (mut controller, list, _notify) = test_controller();
    let names = vec!["a.png".to_string()];

    controller.drag_event(DragEvent::Enter {
        names: names.clone(),
    });
    controller.drag_event(DragEvent::Enter {
        names: names.clone(),
    });
    controller.drag_event(DragEvent::Leave);
    controller.drag_event(DragEvent::Leave);

    let calls = list.calls();

    // Hover toggles exactly once each way.
    let hovers: Vec<bool> = calls
        .iter()
        .filter_map(|call| match call {
            ListCall::Hover(hovering) => Some(*hovering),
            _ => None,
        })
        .collect();
    assert_eq!(hovers, vec![true, false]);

    // The preview is shown on both enters and cleared exactly once, at the
    // matching second leave.
    let previews: Vec<Vec<String>> = calls
        .iter()
        .filter_map(|call| match call {
            ListCall::Preview(names) => Some(names.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(previews, vec![names.clone(), names, Vec::new()]);
    assert!(!controller.is_drag_hovering());
}

#[tokio::test]
async fn a_drop_resets_the_gesture_and_submits_the_files() {
    let (mut controller, list, _notify) = test_controller();

    controller.drag_event(DragEvent::Enter {
        names: vec!["a.png".to_string()],
    });
    controller.drag_event(DragEvent::Drop {
        files: vec![png("a.png", 2048)],
    });

    assert!(!controller.is_drag_hovering());
    assert_eq!(controller.stats().count, 1);

    let calls = list.calls();
    assert!(calls
        .iter()
        .any(|call| matches!(call, ListCall::Added(name) if name == "a.png")));
    assert!(calls.iter().any(|call| matches!(call, ListCall::Hover(false))));

    controller.run_until_settled().await;
}

#[tokio::test]
async fn notices_dismiss_themselves_after_the_configured_duration() {
    let (mut controller, _list, notify) = test_controller();

    let candidate = FileDescriptor::new("b.exe", "application/x-msdownload", 100).unwrap();
    controller.submit(vec![candidate]);
    assert_eq!(controller.pending_notices(), 1);

    controller.run_until_idle().await;
    assert_eq!(controller.pending_notices(), 0);

    let calls = notify.calls();
    let posted_id = calls
        .iter()
        .find_map(|call| match call {
            NotifyCall::Posted(id, NoticeKind::Rejection, _) => Some(*id),
            _ => None,
        })
        .unwrap();
    assert!(calls.contains(&NotifyCall::Dismissed(posted_id)));
}

#[tokio::test]
async fn duplicate_names_share_the_first_row() {
    let (mut controller, _list, _notify) = test_controller();

    controller.submit(vec![png("dup.png", 100), png("dup.png", 200)]);
    controller.run_until_settled().await;

    // Both files are listed and counted.
    let stats = controller.stats();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.total_size_bytes, 300);

    // Every tick routed to the first match; the later duplicate never moved.
    let entries = controller.entries();
    assert_eq!(entries[0].upload.progress_percent, 100);
    assert_eq!(entries[1].upload.progress_percent, 0);

    // Name-based removal also targets the first match.
    controller.request_removal("dup.png");
    assert_eq!(controller.stats().total_size_bytes, 200);
}
