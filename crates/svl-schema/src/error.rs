use std::path::PathBuf;

use svl_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("shader option schema has not finished loading")]
    NotLoaded,

    #[error("option descriptor index {index} out of range (schema has {count} options)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("duplicate option in schema: {name}")]
    DuplicateOption { name: String },

    #[error("could not resolve shader {path}")]
    Unresolved { path: PathBuf },

    #[error("system option setting not found: {path}")]
    SettingsNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl SchemaError {
    pub(crate) fn settings_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::SettingsNotFound { path };
        }
        Self::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
