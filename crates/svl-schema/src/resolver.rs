//! Shader schema resolution.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use svl_model::OptionDescriptor;

use crate::error::{Result, SchemaError};
use crate::schema::OptionSchema;

/// Resolves a shader file to its option schema.
pub trait SchemaResolver: Send + Sync {
    fn load_schema(&self, shader_path: &Path) -> Result<Arc<OptionSchema>>;
}

/// Resolver backed by schemas registered up front, keyed by shader path.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemaResolver {
    schemas: BTreeMap<PathBuf, Arc<OptionSchema>>,
}

impl InMemorySchemaResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, shader_path: impl Into<PathBuf>, schema: OptionSchema) {
        self.schemas.insert(shader_path.into(), Arc::new(schema));
    }

    #[must_use]
    pub fn with_schema(mut self, shader_path: impl Into<PathBuf>, schema: OptionSchema) -> Self {
        self.insert(shader_path, schema);
        self
    }
}

impl SchemaResolver for InMemorySchemaResolver {
    fn load_schema(&self, shader_path: &Path) -> Result<Arc<OptionSchema>> {
        self.schemas
            .get(shader_path)
            .cloned()
            .ok_or_else(|| SchemaError::Unresolved {
                path: shader_path.to_path_buf(),
            })
    }
}

/// Reads the option layout stored next to a shader: a JSON array of
/// option descriptors at the shader path itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLayoutResolver;

impl SchemaResolver for JsonLayoutResolver {
    fn load_schema(&self, shader_path: &Path) -> Result<Arc<OptionSchema>> {
        let text = fs::read_to_string(shader_path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SchemaError::Unresolved {
                    path: shader_path.to_path_buf(),
                }
            } else {
                SchemaError::Io {
                    path: shader_path.to_path_buf(),
                    source,
                }
            }
        })?;
        let schema = parse_layout(&text, shader_path)?;
        tracing::debug!(
            shader = %shader_path.display(),
            options = schema.len(),
            "loaded shader option layout"
        );
        Ok(Arc::new(schema))
    }
}

/// Parse the JSON text of an option layout.
pub fn parse_layout(text: &str, path: &Path) -> Result<OptionSchema> {
    let descriptors: Vec<OptionDescriptor> =
        serde_json::from_str(text).map_err(|source| SchemaError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    OptionSchema::new(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_shader_is_unresolved() {
        let resolver = InMemorySchemaResolver::new();
        let result = resolver.load_schema(Path::new("missing.shader"));
        assert!(matches!(result, Err(SchemaError::Unresolved { .. })));
    }

    #[test]
    fn registered_shader_resolves() {
        let resolver =
            InMemorySchemaResolver::new().with_schema("lit.shader", OptionSchema::default());
        let schema = resolver.load_schema(Path::new("lit.shader")).unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn layout_rejects_duplicate_options() {
        let text = r#"[
            {"name": "o_fog", "option_type": "Boolean", "default_value": "false",
             "min_index": 0, "max_index": 1, "values": ["false", "true"]},
            {"name": "o_fog", "option_type": "Boolean", "default_value": "true",
             "min_index": 0, "max_index": 1, "values": ["false", "true"]}
        ]"#;
        let result = parse_layout(text, Path::new("fog.shader"));
        assert!(matches!(result, Err(SchemaError::DuplicateOption { .. })));
    }

    #[test]
    fn missing_layout_file_is_unresolved() {
        let result = JsonLayoutResolver.load_schema(Path::new("does/not/exist.shader"));
        assert!(matches!(result, Err(SchemaError::Unresolved { .. })));
    }
}
