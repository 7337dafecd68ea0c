//! Shader option schema access and the external collaborators the variant
//! list engine reads from: schema resolution and system option settings.

#![deny(unsafe_code)]

pub mod error;
pub mod paths;
pub mod resolver;
pub mod schema;
pub mod settings;

pub use crate::error::{Result, SchemaError};
pub use crate::paths::{SYSTEM_OPTIONS_EXTENSION, resolve_path_reference, settings_path_for};
pub use crate::resolver::{
    InMemorySchemaResolver, JsonLayoutResolver, SchemaResolver, parse_layout,
};
pub use crate::schema::{OptionSchema, SchemaView};
pub use crate::settings::{
    InMemorySettingsLoader, JsonSettingsLoader, SettingsLoader, parse_settings,
};
