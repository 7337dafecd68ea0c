//! Sparse variant set expansion.
//!
//! A sparse set names a subset of option columns and supplies a row-major
//! matrix of values for them. Each matrix row becomes one variant row whose
//! options are the named columns that exist in the schema; every other
//! option is left out ("don't care").

use std::collections::HashMap;

use svl_model::{OptionName, OptionValue, OptionValues, ShaderVariantList, VariantInfo};
use svl_schema::OptionSchema;

use crate::error::{CoreError, Result};
use crate::ids::StableIds;

/// Build the rows that appending a sparse set to `list` would add.
///
/// Rows receive ids after the list's current maximum, in matrix order.
/// Nothing is produced when `matrix` is not a whole number of
/// `headers`-wide rows.
pub fn expand_sparse_set(
    list: &ShaderVariantList,
    schema: &OptionSchema,
    headers: &[OptionName],
    matrix: &[OptionValue],
) -> Result<Vec<VariantInfo>> {
    let width = headers.len();
    if width == 0 {
        if matrix.is_empty() {
            return Ok(Vec::new());
        }
        return Err(CoreError::invalid_input(format!(
            "sparse set has {} values but no option headers",
            matrix.len()
        )));
    }
    if matrix.len() % width != 0 {
        return Err(CoreError::invalid_input(format!(
            "sparse set has {} values, not a multiple of its {width} option headers",
            matrix.len()
        )));
    }

    // Later duplicates of a header win.
    let column_of: HashMap<&OptionName, usize> = headers
        .iter()
        .enumerate()
        .map(|(column, name)| (name, column))
        .collect();

    let mut ids = StableIds::starting_at(list.next_stable_id());
    let mut rows = Vec::with_capacity(matrix.len() / width);
    for line in matrix.chunks_exact(width) {
        let mut options = OptionValues::new();
        for descriptor in schema.descriptors() {
            if let Some(&column) = column_of.get(descriptor.name()) {
                options.insert(descriptor.name().clone(), line[column].clone());
            }
        }
        rows.push(VariantInfo::new(ids.allocate()?, options));
    }

    tracing::debug!(
        headers = width,
        rows = rows.len(),
        "expanded sparse variant set"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use svl_model::{OptionDescriptor, StableId};

    fn name(value: &str) -> OptionName {
        OptionName::new(value).unwrap()
    }

    fn values(items: &[&str]) -> Vec<OptionValue> {
        items.iter().map(|item| OptionValue::from(*item)).collect()
    }

    fn schema() -> OptionSchema {
        OptionSchema::new(vec![
            OptionDescriptor::boolean(name("o_a"), false),
            OptionDescriptor::boolean(name("o_b"), false),
            OptionDescriptor::integer_range(name("o_c"), 0, 3, 0).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn two_headers_six_values_make_three_rows() {
        let list = ShaderVariantList::new("lit.shader");
        let rows = expand_sparse_set(
            &list,
            &schema(),
            &[name("o_a"), name("o_c")],
            &values(&["true", "1", "false", "2", "true", "3"]),
        )
        .unwrap();
        assert_eq!(rows.len(), 3);
        let ids: Vec<u32> = rows.iter().map(|row| row.stable_id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(rows[1].option("o_a").unwrap().as_str(), "false");
        assert_eq!(rows[1].option("o_c").unwrap().as_str(), "2");
        assert!(rows[1].option("o_b").is_none());
    }

    #[test]
    fn ragged_matrix_is_rejected() {
        let list = ShaderVariantList::new("lit.shader");
        let result = expand_sparse_set(
            &list,
            &schema(),
            &[name("o_a"), name("o_b")],
            &values(&["true", "false", "true", "false", "true"]),
        );
        assert!(matches!(result, Err(CoreError::InvalidInput { .. })));
    }

    #[test]
    fn values_without_headers_are_rejected() {
        let list = ShaderVariantList::new("lit.shader");
        let result = expand_sparse_set(&list, &schema(), &[], &values(&["true"]));
        assert!(matches!(result, Err(CoreError::InvalidInput { .. })));
    }

    #[test]
    fn empty_matrix_adds_nothing() {
        let list = ShaderVariantList::new("lit.shader");
        let rows = expand_sparse_set(&list, &schema(), &[name("o_a")], &[]).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn ids_continue_after_existing_maximum() {
        let mut list = ShaderVariantList::new("lit.shader");
        list.variants = vec![
            VariantInfo::from_pairs(4, &[]).unwrap(),
            VariantInfo::from_pairs(9, &[]).unwrap(),
            VariantInfo::from_pairs(2, &[]).unwrap(),
        ];
        let rows = expand_sparse_set(
            &list,
            &schema(),
            &[name("o_b")],
            &values(&["true", "false"]),
        )
        .unwrap();
        assert_eq!(rows[0].stable_id, StableId::new(10));
        assert_eq!(rows[1].stable_id, StableId::new(11));
    }

    #[test]
    fn headers_unknown_to_schema_are_dropped() {
        let list = ShaderVariantList::new("lit.shader");
        let rows = expand_sparse_set(
            &list,
            &schema(),
            &[name("o_missing"), name("o_b")],
            &values(&["x", "true"]),
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].options.len(), 1);
        assert_eq!(rows[0].option("o_b").unwrap().as_str(), "true");
    }
}
