//! Read-only view over a shader's option layout.

use std::collections::HashSet;
use std::sync::Arc;

use svl_model::OptionDescriptor;

use crate::error::{Result, SchemaError};

/// Ordered option descriptors of one shader, with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSchema {
    descriptors: Vec<OptionDescriptor>,
}

impl OptionSchema {
    pub fn new(descriptors: Vec<OptionDescriptor>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            if !seen.insert(descriptor.name()) {
                return Err(SchemaError::DuplicateOption {
                    name: descriptor.name().to_string(),
                });
            }
        }
        Ok(Self { descriptors })
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn descriptors(&self) -> &[OptionDescriptor] {
        &self.descriptors
    }
}

/// The schema a document currently sees. Empty until a shader has been
/// resolved.
#[derive(Debug, Clone, Default)]
pub struct SchemaView {
    schema: Option<Arc<OptionSchema>>,
}

impl SchemaView {
    pub fn loaded(schema: Arc<OptionSchema>) -> Self {
        Self {
            schema: Some(schema),
        }
    }

    pub fn unloaded() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.schema.is_some()
    }

    pub fn schema(&self) -> Option<&Arc<OptionSchema>> {
        self.schema.as_ref()
    }

    /// Number of descriptors; `0` when no schema is loaded.
    pub fn count(&self) -> usize {
        match &self.schema {
            Some(schema) => schema.len(),
            None => {
                tracing::error!("option descriptor count requested before schema is ready");
                0
            }
        }
    }

    pub fn descriptor_at(&self, index: usize) -> Result<&OptionDescriptor> {
        let Some(schema) = &self.schema else {
            tracing::error!(index, "option descriptor requested before schema is ready");
            return Err(SchemaError::NotLoaded);
        };
        schema
            .descriptors
            .get(index)
            .ok_or(SchemaError::IndexOutOfRange {
                index,
                count: schema.len(),
            })
    }

    /// Descriptors in schema order; empty when no schema is loaded.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.schema
            .iter()
            .flat_map(|schema| schema.descriptors.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svl_model::OptionName;

    fn bool_option(name: &str) -> OptionDescriptor {
        OptionDescriptor::boolean(OptionName::new(name).unwrap(), false)
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = OptionSchema::new(vec![bool_option("o_a"), bool_option("o_a")]);
        assert!(matches!(result, Err(SchemaError::DuplicateOption { .. })));
    }

    #[test]
    fn unloaded_view_reports_zero() {
        let view = SchemaView::unloaded();
        assert!(!view.is_ready());
        assert_eq!(view.count(), 0);
        assert!(matches!(view.descriptor_at(0), Err(SchemaError::NotLoaded)));
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn loaded_view_indexes_in_order() {
        let schema = OptionSchema::new(vec![bool_option("o_a"), bool_option("o_b")]).unwrap();
        let view = SchemaView::loaded(Arc::new(schema));
        assert_eq!(view.count(), 2);
        assert_eq!(view.descriptor_at(1).unwrap().name().as_str(), "o_b");
        assert!(matches!(
            view.descriptor_at(2),
            Err(SchemaError::IndexOutOfRange { index: 2, count: 2 })
        ));
    }
}
