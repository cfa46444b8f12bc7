//! In-memory file list
//!
//! Ordered collection of admitted files with aggregate size tracking. The
//! store is pure state: it performs no validation and drives no observers —
//! the controller owns both concerns. Every operation maintains the invariant
//! that `total_size_bytes` equals the sum of the remaining entries' sizes.
//!
//! Duplicate names are allowed to enter; name-based operations always act on
//! the first match in insertion order.

pub mod types;

pub use types::{ListEntry, ListStats, UploadState};

use tracing::debug;

use crate::app::models::FileDescriptor;

/// Ordered list of admitted files with aggregate accounting
#[derive(Debug, Default)]
pub struct FileListStore {
    entries: Vec<ListEntry>,
    total_size_bytes: u64,
}

impl FileListStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an admitted descriptor, creating its upload state at zero
    ///
    /// No deduplication happens here; a second file with the same name enters
    /// the list behind the first.
    pub fn add(&mut self, descriptor: FileDescriptor) {
        self.total_size_bytes += descriptor.size_bytes;
        debug!("admitted {} ({} bytes)", descriptor.name, descriptor.size_bytes);
        self.entries.push(ListEntry::new(descriptor));
    }

    /// Remove the first entry matching `name`
    ///
    /// Returns the removed descriptor, or `None` when no entry matches — a
    /// silent no-op, not an error.
    pub fn remove(&mut self, name: &str) -> Option<FileDescriptor> {
        let index = self.entries.iter().position(|entry| entry.name() == name)?;
        let entry = self.entries.remove(index);
        self.total_size_bytes -= entry.descriptor.size_bytes;
        debug!("removed {} ({} bytes)", name, entry.descriptor.size_bytes);
        Some(entry.descriptor)
    }

    /// Drop every entry and reset the aggregate to zero
    ///
    /// Returns how many entries were discarded.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.total_size_bytes = 0;
        if removed > 0 {
            debug!("cleared {} entries", removed);
        }
        removed
    }

    /// Read-only aggregate snapshot
    pub fn stats(&self) -> ListStats {
        ListStats {
            count: self.entries.len(),
            total_size_bytes: self.total_size_bytes,
        }
    }

    /// Advance the upload progress of the first entry matching `name`
    ///
    /// Returns the entry's progress after clamping when it exists, `None`
    /// when the file has been removed and the tick should be ignored.
    pub fn set_progress(&mut self, name: &str, percent: u8) -> Option<u8> {
        let entry = self.entries.iter_mut().find(|entry| entry.name() == name)?;
        entry.upload.advance_to(percent);
        Some(entry.upload.progress_percent)
    }

    /// Mark the first entry matching `name` as completed
    ///
    /// Returns whether a matching entry was present.
    pub fn mark_completed(&mut self, name: &str) -> bool {
        match self.entries.iter_mut().find(|entry| entry.name() == name) {
            Some(entry) => {
                entry.upload.mark_completed();
                true
            }
            None => false,
        }
    }

    /// First entry matching `name`, if any
    pub fn get(&self, name: &str) -> Option<&ListEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, size: u64) -> FileDescriptor {
        FileDescriptor::new(name, "image/png", size).unwrap()
    }

    fn assert_invariant(store: &FileListStore) {
        let expected: u64 = store
            .entries()
            .iter()
            .map(|entry| entry.descriptor.size_bytes)
            .sum();
        assert_eq!(store.stats().total_size_bytes, expected);
        assert_eq!(store.stats().count, store.len());
    }

    #[test]
    fn add_updates_stats() {
        // Scenario: a single 2048-byte image lands in the list.
        let mut store = FileListStore::new();
        store.add(descriptor("a.png", 2048));

        let stats = store.stats();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.total_size_bytes, 2048);
        assert_eq!(stats.formatted_total(), "2 KB");
        assert_invariant(&store);
    }

    #[test]
    fn remove_returns_the_descriptor_and_restores_totals() {
        let mut store = FileListStore::new();
        store.add(descriptor("a.png", 2048));

        let removed = store.remove("a.png").unwrap();
        assert_eq!(removed.name, "a.png");
        assert_eq!(store.stats(), ListStats::default());

        // A second removal of the same name is a no-op.
        assert!(store.remove("a.png").is_none());
        assert_invariant(&store);
    }

    #[test]
    fn removal_targets_the_first_match() {
        let mut store = FileListStore::new();
        store.add(descriptor("dup.png", 100));
        store.add(descriptor("other.png", 50));
        store.add(descriptor("dup.png", 200));

        let removed = store.remove("dup.png").unwrap();
        assert_eq!(removed.size_bytes, 100);
        assert_eq!(store.stats().total_size_bytes, 250);

        // The later duplicate is now the first match.
        let removed = store.remove("dup.png").unwrap();
        assert_eq!(removed.size_bytes, 200);
        assert_invariant(&store);
    }

    #[test]
    fn clear_discards_everything() {
        let mut store = FileListStore::new();
        store.add(descriptor("a.png", 10));
        store.add(descriptor("b.png", 20));
        store.set_progress("a.png", 55);

        assert_eq!(store.clear(), 2);
        assert!(store.is_empty());
        assert_eq!(store.stats(), ListStats::default());
        assert_eq!(store.clear(), 0);
    }

    #[test]
    fn invariant_holds_across_mixed_operations() {
        let mut store = FileListStore::new();
        store.add(descriptor("a.png", 10));
        store.add(descriptor("b.png", 20));
        store.add(descriptor("c.png", 30));
        assert_invariant(&store);

        store.remove("b.png");
        assert_invariant(&store);

        store.add(descriptor("d.png", 40));
        store.remove("missing.png");
        assert_invariant(&store);

        store.clear();
        assert_invariant(&store);

        store.add(descriptor("e.png", 50));
        assert_invariant(&store);
    }

    #[test]
    fn progress_routes_to_the_first_match_and_ignores_absentees() {
        let mut store = FileListStore::new();
        store.add(descriptor("a.png", 10));
        store.add(descriptor("a.png", 20));

        assert_eq!(store.set_progress("a.png", 30), Some(30));
        let entries = store.entries();
        assert_eq!(entries[0].upload.progress_percent, 30);
        assert_eq!(entries[1].upload.progress_percent, 0);

        // Ticks for a removed file are dropped.
        assert_eq!(store.set_progress("gone.png", 99), None);
    }

    #[test]
    fn completion_marks_the_entry_terminal() {
        let mut store = FileListStore::new();
        store.add(descriptor("a.png", 10));

        assert!(store.mark_completed("a.png"));
        let entry = store.get("a.png").unwrap();
        assert!(entry.upload.is_terminal());
        assert_eq!(entry.upload.progress_percent, 100);

        assert!(!store.mark_completed("gone.png"));
    }
}
