//! Shader variant list engine.
//!
//! - [`sparse`]: expand sparse option columns into variant rows
//! - [`enumerate`]: initialize a list from a shader's system option setting
//! - [`defrag`]: deduplicate and renumber a list
//! - [`diff`]: decide whether an edit changed anything observable
//! - [`document`]: the document exposing these operations to a host

#![deny(unsafe_code)]

pub mod config;
pub mod defrag;
pub mod diff;
mod dirty;
pub mod document;
pub mod enumerate;
pub mod error;
pub mod host;
mod ids;
pub mod sparse;

pub use config::{DEFAULT_MAX_EXPANDED_ROWS, ExpansionOptions, ExpansionStrategy};
pub use defrag::defragment;
pub use diff::{EditOutcome, EditSession, is_observably_modified};
pub use document::{DocumentServices, ShaderVariantDocument};
pub use enumerate::expand_from_settings;
pub use error::{CoreError, Result};
pub use host::{
    DocumentEvent, DocumentId, EventLog, NotificationSink, NullSink, UndoEntry, UndoHistory,
    UndoRedoRegistrar,
};
pub use sparse::expand_sparse_set;
