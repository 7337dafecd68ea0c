//! Host-side collaborators a document reports to.
//!
//! A document never talks to an event bus or undo stack directly. It emits
//! [`DocumentEvent`]s through a [`NotificationSink`] and hands undo/redo
//! snapshot pairs to an [`UndoRedoRegistrar`].

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use svl_model::ShaderVariantList;

/// Identity of a document within its host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "document-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentEvent {
    /// Objects exposed for editing were replaced and must be re-read.
    ObjectInfoInvalidated,
    /// Document content changed.
    Modified,
}

pub trait NotificationSink {
    fn notify(&mut self, event: DocumentEvent, document: DocumentId);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _event: DocumentEvent, _document: DocumentId) {}
}

/// Sink that records events. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<(DocumentEvent, DocumentId)>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(DocumentEvent, DocumentId)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self, event: DocumentEvent) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(recorded, _)| *recorded == event)
            .count()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl NotificationSink for EventLog {
    fn notify(&mut self, event: DocumentEvent, document: DocumentId) {
        tracing::trace!(?event, %document, "document notification");
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((event, document));
    }
}

/// One undoable edit: the list before it and the list after it.
///
/// Applying `undo` or `redo` means passing it to
/// `ShaderVariantDocument::restore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoEntry {
    pub document: DocumentId,
    pub undo: ShaderVariantList,
    pub redo: ShaderVariantList,
}

pub trait UndoRedoRegistrar {
    fn register(&mut self, entry: UndoEntry);
}

/// Registrar that keeps every registered entry in order. Clones share the
/// same history.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    entries: Arc<Mutex<Vec<UndoEntry>>>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last(&self) -> Option<UndoEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl UndoRedoRegistrar for UndoHistory {
    fn register(&mut self, entry: UndoEntry) {
        tracing::debug!(
            document = %entry.document,
            undo_rows = entry.undo.len(),
            redo_rows = entry.redo.len(),
            "registered undo entry"
        );
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}
