//! Edit sessions: decide whether a mutation changed anything observable.

use svl_model::ShaderVariantList;

/// Whether `after` differs from `before` in a way a user could observe.
///
/// The shader reference and row count are compared first. Only when both
/// match are rows compared position by position (stable id and options).
/// The material options hint is not part of the comparison.
pub fn is_observably_modified(before: &ShaderVariantList, after: &ShaderVariantList) -> bool {
    if before.shader_file_path != after.shader_file_path || before.len() != after.len() {
        return true;
    }
    before
        .variants
        .iter()
        .zip(&after.variants)
        .any(|(old, new)| old.stable_id != new.stable_id || old.options != new.options)
}

/// Outcome of closing an edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Unchanged,
    /// `undo` restores the state before the edit, `redo` the state after it.
    Modified {
        undo: ShaderVariantList,
        redo: ShaderVariantList,
    },
}

impl EditOutcome {
    pub fn is_modified(&self) -> bool {
        matches!(self, Self::Modified { .. })
    }
}

/// Open edit session holding the pre-edit snapshot.
#[derive(Debug, Clone)]
pub struct EditSession {
    snapshot: ShaderVariantList,
}

impl EditSession {
    pub fn begin(current: &ShaderVariantList) -> Self {
        Self {
            snapshot: current.clone(),
        }
    }

    /// Close the session against the current state. The snapshot is
    /// consumed either way.
    pub fn finish(self, current: &ShaderVariantList) -> EditOutcome {
        if is_observably_modified(&self.snapshot, current) {
            EditOutcome::Modified {
                undo: self.snapshot,
                redo: current.clone(),
            }
        } else {
            EditOutcome::Unchanged
        }
    }
}
