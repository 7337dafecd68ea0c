use svl_model::StableId;

use crate::error::{CoreError, Result};

/// Hands out consecutive stable ids.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StableIds {
    next: Option<StableId>,
}

impl StableIds {
    pub(crate) fn starting_at(first: Option<StableId>) -> Self {
        Self { next: first }
    }

    pub(crate) fn from_first() -> Self {
        Self::starting_at(Some(StableId::FIRST))
    }

    pub(crate) fn allocate(&mut self) -> Result<StableId> {
        let id = self.next.ok_or(CoreError::StableIdsExhausted)?;
        self.next = id.checked_next();
        Ok(id)
    }
}
