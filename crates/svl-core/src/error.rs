//! Errors reported by variant list operations.
//!
//! Every failing operation leaves the document's list untouched.

use std::path::PathBuf;

use svl_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The shader's option schema could not be resolved or is not loaded.
    #[error("shader option schema unavailable for {shader_path}")]
    SchemaUnavailable {
        shader_path: PathBuf,
        #[source]
        source: SchemaError,
    },

    /// Malformed caller input, e.g. sparse matrix dimensions.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Full enumeration would exceed the configured row limit.
    #[error("expansion would produce more than {limit} rows")]
    ExpansionTooLarge { limit: usize },

    /// No further stable ids can be assigned.
    #[error("stable id space exhausted")]
    StableIdsExhausted,

    /// `begin_edit` was called while a session was open.
    #[error("an edit session is already open")]
    EditSessionActive,

    /// `end_edit` was called without a matching `begin_edit`.
    #[error("no edit session is open")]
    NoEditSession,

    /// Expansion options could not be read or parsed.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl CoreError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Whether the error belongs to the invalid-input class (including
    /// oversized expansions).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::ExpansionTooLarge { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
