//! Shader option descriptors as exposed by a compiled shader's option layout.

use serde::{Deserialize, Serialize};

use crate::{ModelError, OptionName, OptionValue};

/// Kind of value domain an option draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Two values, `false` (index 0) and `true` (index 1).
    Boolean,
    /// Named values, indexed from 0 in declaration order.
    Enumeration,
    /// Integer values whose index equals the value itself.
    IntegerRange,
}

/// One configurable shader option: its name, default and the contiguous
/// index range of its legal values.
///
/// Construction validates that `min_index <= max_index`, that exactly one
/// value exists per index and that the default is one of those values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOptionDescriptor")]
pub struct OptionDescriptor {
    name: OptionName,
    option_type: OptionType,
    default_value: OptionValue,
    min_index: u32,
    max_index: u32,
    values: Vec<OptionValue>,
}

#[derive(Deserialize)]
struct RawOptionDescriptor {
    name: OptionName,
    option_type: OptionType,
    default_value: OptionValue,
    min_index: u32,
    max_index: u32,
    values: Vec<OptionValue>,
}

impl TryFrom<RawOptionDescriptor> for OptionDescriptor {
    type Error = ModelError;

    fn try_from(raw: RawOptionDescriptor) -> Result<Self, Self::Error> {
        Self::new(
            raw.name,
            raw.option_type,
            raw.min_index,
            raw.max_index,
            raw.values,
            raw.default_value,
        )
    }
}

impl OptionDescriptor {
    pub fn new(
        name: OptionName,
        option_type: OptionType,
        min_index: u32,
        max_index: u32,
        values: Vec<OptionValue>,
        default_value: OptionValue,
    ) -> Result<Self, ModelError> {
        if min_index > max_index {
            return Err(ModelError::InvalidRange {
                name: name.to_string(),
                min: min_index,
                max: max_index,
            });
        }
        let expected = u64::from(max_index - min_index) + 1;
        if values.len() as u64 != expected {
            return Err(ModelError::ValueCountMismatch {
                name: name.to_string(),
                expected: usize::try_from(expected).unwrap_or(usize::MAX),
                actual: values.len(),
            });
        }
        if !values.contains(&default_value) {
            return Err(ModelError::IllegalDefault {
                name: name.to_string(),
                value: default_value.to_string(),
            });
        }
        Ok(Self {
            name,
            option_type,
            default_value,
            min_index,
            max_index,
            values,
        })
    }

    pub fn boolean(name: OptionName, default: bool) -> Self {
        Self {
            name,
            option_type: OptionType::Boolean,
            default_value: OptionValue::from(if default { "true" } else { "false" }),
            min_index: 0,
            max_index: 1,
            values: vec![OptionValue::from("false"), OptionValue::from("true")],
        }
    }

    pub fn enumeration(
        name: OptionName,
        values: Vec<OptionValue>,
        default_value: OptionValue,
    ) -> Result<Self, ModelError> {
        let Some(max_index) = values.len().checked_sub(1) else {
            return Err(ModelError::ValueCountMismatch {
                name: name.to_string(),
                expected: 1,
                actual: 0,
            });
        };
        let max_index = u32::try_from(max_index).map_err(|_| ModelError::InvalidRange {
            name: name.to_string(),
            min: 0,
            max: u32::MAX,
        })?;
        Self::new(
            name,
            OptionType::Enumeration,
            0,
            max_index,
            values,
            default_value,
        )
    }

    pub fn integer_range(
        name: OptionName,
        min: u32,
        max: u32,
        default: u32,
    ) -> Result<Self, ModelError> {
        if min > max {
            return Err(ModelError::InvalidRange {
                name: name.to_string(),
                min,
                max,
            });
        }
        let values = (min..=max)
            .map(|value| OptionValue::new(value.to_string()))
            .collect();
        Self::new(
            name,
            OptionType::IntegerRange,
            min,
            max,
            values,
            OptionValue::new(default.to_string()),
        )
    }

    pub fn name(&self) -> &OptionName {
        &self.name
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn default_value(&self) -> &OptionValue {
        &self.default_value
    }

    pub fn min_index(&self) -> u32 {
        self.min_index
    }

    pub fn max_index(&self) -> u32 {
        self.max_index
    }

    /// Number of legal values, `max_index - min_index + 1`.
    pub fn value_count(&self) -> u64 {
        u64::from(self.max_index - self.min_index) + 1
    }

    /// Value identity at an absolute index in `[min_index, max_index]`.
    pub fn value_at(&self, index: u32) -> Option<&OptionValue> {
        let offset = index.checked_sub(self.min_index)?;
        self.values.get(usize::try_from(offset).ok()?)
    }

    /// Legal values paired with their absolute index, in index order.
    pub fn values(&self) -> impl Iterator<Item = (u32, &OptionValue)> {
        (self.min_index..=self.max_index).zip(self.values.iter())
    }

    pub fn is_legal(&self, value: &OptionValue) -> bool {
        self.values.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> OptionName {
        OptionName::new(value).unwrap()
    }

    #[test]
    fn boolean_descriptor_has_two_values() {
        let descriptor = OptionDescriptor::boolean(name("o_shadows"), true);
        assert_eq!(descriptor.value_count(), 2);
        assert_eq!(descriptor.value_at(0).unwrap().as_str(), "false");
        assert_eq!(descriptor.default_value().as_str(), "true");
    }

    #[test]
    fn integer_range_indexes_by_value() {
        let descriptor = OptionDescriptor::integer_range(name("o_lights"), 2, 5, 3).unwrap();
        assert_eq!(descriptor.value_count(), 4);
        assert_eq!(descriptor.value_at(2).unwrap().as_str(), "2");
        assert_eq!(descriptor.value_at(5).unwrap().as_str(), "5");
        assert!(descriptor.value_at(1).is_none());
        assert!(descriptor.value_at(6).is_none());
    }

    #[test]
    fn rejects_default_outside_values() {
        let result = OptionDescriptor::enumeration(
            name("o_quality"),
            vec!["Low".into(), "High".into()],
            "Ultra".into(),
        );
        assert!(matches!(result, Err(ModelError::IllegalDefault { .. })));
    }

    #[test]
    fn rejects_mismatched_value_count() {
        let result = OptionDescriptor::new(
            name("o_quality"),
            OptionType::Enumeration,
            0,
            2,
            vec!["Low".into(), "High".into()],
            "Low".into(),
        );
        assert!(matches!(
            result,
            Err(ModelError::ValueCountMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_enumeration() {
        let result = OptionDescriptor::enumeration(name("o_mode"), vec![], "A".into());
        assert!(result.is_err());
    }
}
