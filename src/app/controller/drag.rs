//! Drag-hover tracking
//!
//! Pointer drags generate nested enter/leave pairs whenever the cursor
//! crosses a child of the drop target. A depth counter keeps the hover state
//! stable across those pairs: enter increments, leave decrements, and only
//! the transition back to zero clears the preview. A drop force-resets the
//! counter regardless of depth.

use crate::app::models::FileDescriptor;

/// External drag gesture events delivered to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    /// Pointer entered the drop target (possibly a nested child); carries
    /// the names readable from the platform's drag-data listing
    Enter { names: Vec<String> },
    /// Pointer moved while over the drop target
    Over { names: Vec<String> },
    /// Pointer left the drop target or one of its children
    Leave,
    /// Files were dropped; the gesture is over
    Drop { files: Vec<FileDescriptor> },
}

/// Nested enter/leave counter for the drop target
#[derive(Debug, Default)]
pub struct DragCounter {
    depth: u32,
}

impl DragCounter {
    /// Create a counter at depth zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an enter; returns the new depth
    pub fn enter(&mut self) -> u32 {
        self.depth += 1;
        self.depth
    }

    /// Record a leave; returns the new depth
    ///
    /// Unmatched leaves clamp at zero so a stray event cannot wedge the
    /// counter below the resting state.
    pub fn leave(&mut self) -> u32 {
        self.depth = self.depth.saturating_sub(1);
        self.depth
    }

    /// Force the counter back to zero (drop ends the gesture)
    pub fn reset(&mut self) {
        self.depth = 0;
    }

    /// Current nesting depth
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether a drag is currently over the target
    pub fn is_hovering(&self) -> bool {
        self.depth > 0
    }
}
