//! Data model for shader variant lists: option descriptors, variant rows
//! and the list that owns them.

#![deny(unsafe_code)]

pub mod descriptor;
pub mod error;
pub mod hash;
pub mod names;
pub mod variant;

pub use descriptor::{OptionDescriptor, OptionType};
pub use error::{ModelError, Result};
pub use hash::canonical_hash;
pub use names::{OptionName, OptionValue};
pub use variant::{OptionValues, ShaderVariantList, StableId, VariantInfo};
