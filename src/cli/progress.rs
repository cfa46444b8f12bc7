//! Terminal rendering of the file list and notices
//!
//! Implements the controller's sink capabilities over indicatif: one
//! progress bar per admitted file under a summary line, with notices printed
//! above the bars so they are not clobbered by redraws. File names are
//! truncated to fit the terminal width.

use std::collections::HashMap;

use crossterm::terminal;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing::debug;

use crate::app::controller::{ListSink, Notice, NoticeId, NoticeKind, NotificationSink};
use crate::app::format::format_size;
use crate::app::models::FileDescriptor;
use crate::app::store::ListStats;
use crate::constants::display::{MAX_FILENAME_WIDTH, MIN_FILENAME_WIDTH, PROGRESS_CHARS};
use crate::errors::{AppError, Result};

/// List surface rendering one bar per admitted file
pub struct TerminalListSink {
    multi: MultiProgress,
    summary: ProgressBar,
    bar_style: ProgressStyle,
    bars: HashMap<String, ProgressBar>,
    name_width: usize,
}

/// Notification surface printing above the bars
pub struct TerminalNotifier {
    multi: MultiProgress,
}

/// Build the paired terminal surfaces over one shared display
pub fn terminal_sinks() -> Result<(TerminalListSink, TerminalNotifier)> {
    let multi = MultiProgress::new();

    let summary = multi.add(ProgressBar::new_spinner());
    summary.set_style(
        ProgressStyle::default_spinner()
            .template("{msg}")
            .map_err(|e| AppError::generic(format!("Summary template error: {}", e)))?,
    );
    summary.set_message(ListStats::default().summary());

    let bar_style = ProgressStyle::default_bar()
        .template("{prefix:.bold} [{bar:30.cyan/blue}] {pos:>3}% {msg}")
        .map_err(|e| AppError::generic(format!("Progress bar template error: {}", e)))?
        .progress_chars(PROGRESS_CHARS);

    let list_sink = TerminalListSink {
        multi: multi.clone(),
        summary,
        bar_style,
        bars: HashMap::new(),
        name_width: filename_width(),
    };
    let notifier = TerminalNotifier { multi };

    Ok((list_sink, notifier))
}

/// File-name column width for the current terminal
fn filename_width() -> usize {
    match terminal::size() {
        Ok((columns, _rows)) => {
            ((columns as usize) / 3).clamp(MIN_FILENAME_WIDTH, MAX_FILENAME_WIDTH)
        }
        Err(_) => MAX_FILENAME_WIDTH,
    }
}

/// Truncate a file name to `max_len`, adding an ellipsis when needed
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else {
        let kept: String = name.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

impl ListSink for TerminalListSink {
    fn entry_added(&mut self, descriptor: &FileDescriptor) {
        // Duplicate names share the first row, matching the list's
        // first-match routing of progress ticks.
        if self.bars.contains_key(&descriptor.name) {
            debug!("duplicate name {}, reusing its bar", descriptor.name);
            return;
        }

        let bar = self.multi.add(ProgressBar::new(100));
        bar.set_style(self.bar_style.clone());
        bar.set_prefix(truncate_name(&descriptor.name, self.name_width));

        let size = format_size(descriptor.size_bytes);
        bar.set_message(if descriptor.is_image() {
            format!("{size} (image)")
        } else {
            size
        });

        self.bars.insert(descriptor.name.clone(), bar);
    }

    fn entry_removed(&mut self, name: &str) {
        if let Some(bar) = self.bars.remove(name) {
            bar.finish_and_clear();
            self.multi.remove(&bar);
        }
    }

    fn entries_cleared(&mut self) {
        for (_name, bar) in self.bars.drain() {
            bar.finish_and_clear();
            self.multi.remove(&bar);
        }
    }

    fn progress_changed(&mut self, name: &str, percent: u8) {
        if let Some(bar) = self.bars.get(name) {
            bar.set_position(u64::from(percent));
        }
    }

    fn upload_finished(&mut self, name: &str) {
        if let Some(bar) = self.bars.get(name) {
            bar.finish();
        }
    }

    fn stats_changed(&mut self, stats: ListStats) {
        self.summary.set_message(stats.summary());
    }

    fn preview_changed(&mut self, _names: &[String]) {
        // The terminal has no drag surface.
    }

    fn hover_changed(&mut self, _hovering: bool) {}
}

impl TerminalListSink {
    /// Stop the summary spinner so the process can exit cleanly
    pub fn finish(&self) {
        self.summary.finish_and_clear();
    }
}

impl NotificationSink for TerminalNotifier {
    fn notice_posted(&mut self, notice: &Notice) {
        let label = match notice.kind {
            NoticeKind::Rejection => "error",
            NoticeKind::Success => "ok",
        };
        let _ = self.multi.println(format!("[{label}] {}", notice.message));
    }

    fn notice_dismissed(&mut self, _id: NoticeId) {
        // Terminal output is append-only; there is nothing to retract.
    }
}
