//! Variant rows and the variant list they live in.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ModelError, OptionName, OptionValue};

/// Per-row identity, unique within a list.
///
/// `0` is reserved as "no variant" and never assigned to a row.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StableId(u32);

impl StableId {
    pub const NONE: Self = Self(0);
    pub const FIRST: Self = Self(1);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// The id following this one, or `None` once the id space is exhausted.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Option name to value assignments of one row. Options that are absent
/// are "don't care".
pub type OptionValues = BTreeMap<OptionName, OptionValue>;

/// One concrete (possibly partial) assignment of option values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantInfo {
    #[serde(rename = "StableId")]
    pub stable_id: StableId,
    #[serde(rename = "Options", default)]
    pub options: OptionValues,
}

impl VariantInfo {
    pub fn new(stable_id: StableId, options: OptionValues) -> Self {
        Self { stable_id, options }
    }

    /// Build a row from `(name, value)` string pairs.
    pub fn from_pairs(stable_id: u32, pairs: &[(&str, &str)]) -> Result<Self, ModelError> {
        let mut options = OptionValues::new();
        for (name, value) in pairs {
            options.insert(OptionName::new(*name)?, OptionValue::from(*value));
        }
        Ok(Self::new(StableId::new(stable_id), options))
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }
}

/// Ordered variant rows for one shader.
///
/// `shader_file_path` and `material_options_hint` are carried along with
/// the rows but never interpreted by the list algorithms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderVariantList {
    #[serde(rename = "Shader", default)]
    pub shader_file_path: String,
    #[serde(rename = "MaterialOptionsHint", default)]
    pub material_options_hint: bool,
    #[serde(rename = "Variants", default)]
    pub variants: Vec<VariantInfo>,
}

impl ShaderVariantList {
    pub fn new(shader_file_path: impl Into<String>) -> Self {
        Self {
            shader_file_path: shader_file_path.into(),
            ..Self::default()
        }
    }

    /// A list with the same passthrough fields but different rows.
    pub fn with_variants(&self, variants: Vec<VariantInfo>) -> Self {
        Self {
            shader_file_path: self.shader_file_path.clone(),
            material_options_hint: self.material_options_hint,
            variants,
        }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn max_stable_id(&self) -> Option<StableId> {
        self.variants.iter().map(|variant| variant.stable_id).max()
    }

    /// Id for the next appended row: one past the current maximum, or
    /// [`StableId::FIRST`] for an empty list. `None` when ids are exhausted.
    pub fn next_stable_id(&self) -> Option<StableId> {
        match self.max_stable_id() {
            Some(max) => max.checked_next(),
            None => Some(StableId::FIRST),
        }
    }

    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.variants.len());
        self.variants
            .iter()
            .all(|variant| !variant.stable_id.is_none() && seen.insert(variant.stable_id))
    }

    /// Whether ids are exactly `1..=N` in list order.
    pub fn is_compact(&self) -> bool {
        self.variants
            .iter()
            .zip(1u32..)
            .all(|(variant, expected)| variant.stable_id.get() == expected)
    }
}
