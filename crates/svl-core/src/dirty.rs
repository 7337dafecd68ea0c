//! Unsaved-change tracking for a document.

/// Tracks whether a document has unsaved changes.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DirtyTracker {
    dirty: bool,
}

impl DirtyTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn is_dirty(self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Forget pending changes, e.g. after a save or a fresh load.
    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
