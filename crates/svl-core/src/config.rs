//! Configuration options for variant list expansion.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use svl_schema::SYSTEM_OPTIONS_EXTENSION;

use crate::error::{CoreError, Result};

/// Largest list full enumeration may produce unless configured otherwise.
pub const DEFAULT_MAX_EXPANDED_ROWS: usize = 1 << 20;

/// How unset options are combined during full enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionStrategy {
    /// Each unset option multiplies every row accumulated so far, giving
    /// the cartesian product of all unset options.
    #[default]
    Cartesian,
    /// Each unset option varies the baseline row alone, so no row carries
    /// more than one non-default value of an unset option.
    PerAxis,
}

/// Options controlling automatic list initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionOptions {
    /// Upper bound on the number of rows full enumeration may generate.
    ///
    /// Schemas whose unset options multiply past this bound are rejected
    /// before anything is allocated.
    pub max_expanded_rows: usize,

    /// Extension of the system option setting file next to the shader.
    pub settings_extension: String,

    /// Combination strategy for unset options.
    pub strategy: ExpansionStrategy,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            max_expanded_rows: DEFAULT_MAX_EXPANDED_ROWS,
            settings_extension: SYSTEM_OPTIONS_EXTENSION.to_string(),
            strategy: ExpansionStrategy::default(),
        }
    }
}

impl ExpansionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_expanded_rows(mut self, limit: usize) -> Self {
        self.max_expanded_rows = limit;
        self
    }

    #[must_use]
    pub fn with_settings_extension(mut self, extension: impl Into<String>) -> Self {
        self.settings_extension = extension.into();
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: ExpansionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Parse options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CoreError::Config {
            message: e.to_string(),
        })
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CoreError::Config {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        let options = Self::from_toml_str(&text)?;
        tracing::info!("Loaded expansion options from {:?}", path);
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ExpansionOptions::default();
        assert_eq!(options.max_expanded_rows, DEFAULT_MAX_EXPANDED_ROWS);
        assert_eq!(options.settings_extension, "systemoptions");
        assert_eq!(options.strategy, ExpansionStrategy::Cartesian);
    }

    #[test]
    fn strategy_from_toml() {
        let options = ExpansionOptions::from_toml_str("strategy = \"per_axis\"").unwrap();
        assert_eq!(options.strategy, ExpansionStrategy::PerAxis);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let options = ExpansionOptions::from_toml_str("max_expanded_rows = 64").unwrap();
        assert_eq!(options.max_expanded_rows, 64);
        assert_eq!(options.settings_extension, "systemoptions");
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let result = ExpansionOptions::from_toml_str("max_expanded_rows = \"many\"");
        assert!(matches!(result, Err(CoreError::Config { .. })));
    }
}
