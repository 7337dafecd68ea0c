//! Deduplication and renumbering of variant lists.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use svl_model::{ShaderVariantList, VariantInfo, canonical_hash};

use crate::error::Result;
use crate::ids::StableIds;

/// Dedup key: the canonical hash filters, full option equality decides.
struct CompactKey<'a> {
    hash: u64,
    row: &'a VariantInfo,
}

impl<'a> CompactKey<'a> {
    fn new(row: &'a VariantInfo) -> Self {
        Self {
            hash: canonical_hash(&row.options),
            row,
        }
    }
}

impl PartialEq for CompactKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.row.options == other.row.options
    }
}

impl Eq for CompactKey<'_> {}

impl Hash for CompactKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// Drop rows with duplicate option maps and renumber the rest `1..=N`.
///
/// Of each group of equal rows the first one in list order survives.
/// Survivors are ordered by their original stable id before renumbering.
/// Passthrough fields are copied. Applying this twice equals applying it
/// once.
pub fn defragment(list: &ShaderVariantList) -> Result<ShaderVariantList> {
    let mut seen = HashSet::with_capacity(list.len());
    let mut survivors: Vec<&VariantInfo> = list
        .variants
        .iter()
        .filter(|row| seen.insert(CompactKey::new(*row)))
        .collect();
    survivors.sort_by_key(|row| row.stable_id);

    let mut ids = StableIds::from_first();
    let mut variants = Vec::with_capacity(survivors.len());
    for row in survivors {
        variants.push(VariantInfo::new(ids.allocate()?, row.options.clone()));
    }

    tracing::debug!(
        before = list.len(),
        after = variants.len(),
        "defragmented variant list"
    );
    Ok(list.with_variants(variants))
}
