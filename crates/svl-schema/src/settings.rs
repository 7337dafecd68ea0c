//! System option setting files.
//!
//! A system option setting is a flat JSON object mapping option names to
//! value text. An empty value marks the option as unset, i.e. an axis the
//! list should be expanded along.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use svl_model::{OptionName, OptionValue, OptionValues};

use crate::error::{Result, SchemaError};

/// Loads the system option setting stored at a path.
pub trait SettingsLoader: Send + Sync {
    /// Returns [`SchemaError::SettingsNotFound`] when nothing exists at `path`.
    fn load_settings(&self, path: &Path) -> Result<OptionValues>;
}

/// Reads settings from JSON files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSettingsLoader;

impl SettingsLoader for JsonSettingsLoader {
    fn load_settings(&self, path: &Path) -> Result<OptionValues> {
        let text = fs::read_to_string(path).map_err(|e| SchemaError::settings_io(path, e))?;
        parse_settings(&text, path)
    }
}

/// Parse the JSON text of a system option setting.
pub fn parse_settings(text: &str, path: &Path) -> Result<OptionValues> {
    let raw: BTreeMap<String, String> =
        serde_json::from_str(text).map_err(|source| SchemaError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let mut settings = OptionValues::new();
    for (name, value) in raw {
        settings.insert(OptionName::new(name)?, OptionValue::from(value));
    }
    tracing::debug!(path = %path.display(), options = settings.len(), "loaded system option setting");
    Ok(settings)
}

/// Settings registered up front, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsLoader {
    settings: BTreeMap<PathBuf, OptionValues>,
}

impl InMemorySettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, settings: OptionValues) {
        self.settings.insert(path.into(), settings);
    }

    #[must_use]
    pub fn with_settings(mut self, path: impl Into<PathBuf>, settings: OptionValues) -> Self {
        self.insert(path, settings);
        self
    }
}

impl SettingsLoader for InMemorySettingsLoader {
    fn load_settings(&self, path: &Path) -> Result<OptionValues> {
        self.settings
            .get(path)
            .cloned()
            .ok_or_else(|| SchemaError::SettingsNotFound {
                path: path.to_path_buf(),
            })
    }
}
