//! Full enumeration of a shader's option space from its system option
//! setting.
//!
//! The setting provides a baseline value per option. Options whose value
//! is empty are "unset": the baseline takes their default, and the list is
//! then expanded along each unset option with every non-default legal
//! value. Options with a concrete setting never vary.

use svl_model::{OptionDescriptor, OptionName, OptionValue, OptionValues, VariantInfo};
use svl_schema::OptionSchema;

use crate::config::{ExpansionOptions, ExpansionStrategy};
use crate::error::{CoreError, Result};
use crate::ids::StableIds;

/// Rows for a freshly initialized list.
///
/// An empty `settings` map means "do not populate" and yields no rows, even
/// when the schema has options. Otherwise the first row (id 1) is the
/// baseline and expansion rows follow with consecutive ids.
pub fn expand_from_settings(
    schema: &OptionSchema,
    mut settings: OptionValues,
    options: &ExpansionOptions,
) -> Result<Vec<VariantInfo>> {
    if settings.is_empty() {
        tracing::debug!("system option setting is empty, skipping initialization");
        return Ok(Vec::new());
    }

    let mut unset: Vec<&OptionDescriptor> = Vec::new();
    for descriptor in schema.descriptors() {
        let Some(value) = settings.get_mut(descriptor.name()) else {
            continue;
        };
        if value.is_empty() {
            *value = descriptor.default_value().clone();
            unset.push(descriptor);
        } else if !descriptor.is_legal(value) {
            tracing::warn!(
                option = %descriptor.name(),
                value = %value,
                "system option setting uses a value outside the option's range"
            );
        }
    }

    let total = planned_row_count(&unset, options)?;
    tracing::debug!(
        unset = unset.len(),
        rows = total,
        strategy = ?options.strategy,
        "expanding unset options"
    );

    let mut ids = StableIds::from_first();
    let mut rows = Vec::with_capacity(total);
    rows.push(VariantInfo::new(ids.allocate()?, settings));

    for descriptor in unset {
        let sources = match options.strategy {
            ExpansionStrategy::Cartesian => rows.len(),
            ExpansionStrategy::PerAxis => 1,
        };
        let mut expanded = Vec::with_capacity(sources * non_default_count(descriptor));
        for (_, value) in descriptor.values() {
            if value == descriptor.default_value() {
                continue;
            }
            for row in &rows[..sources] {
                expanded.push(with_option_value(
                    row,
                    descriptor.name(),
                    value,
                    &mut ids,
                )?);
            }
        }
        rows.extend(expanded);
    }

    Ok(rows)
}

/// Copy of `row` with `name` set to `value`, under a fresh id.
///
/// Rows that do not carry `name` are copied unchanged.
fn with_option_value(
    row: &VariantInfo,
    name: &OptionName,
    value: &OptionValue,
    ids: &mut StableIds,
) -> Result<VariantInfo> {
    let mut options = row.options.clone();
    if let Some(slot) = options.get_mut(name) {
        *slot = value.clone();
    }
    Ok(VariantInfo::new(ids.allocate()?, options))
}

fn non_default_count(descriptor: &OptionDescriptor) -> usize {
    usize::try_from(descriptor.value_count().saturating_sub(1)).unwrap_or(usize::MAX)
}

/// Number of rows expansion will produce, checked against the configured
/// limit before anything is allocated.
fn planned_row_count(unset: &[&OptionDescriptor], options: &ExpansionOptions) -> Result<usize> {
    let limit = options.max_expanded_rows;
    let total = match options.strategy {
        ExpansionStrategy::Cartesian => unset.iter().try_fold(1u64, |total, descriptor| {
            total.checked_mul(descriptor.value_count())
        }),
        ExpansionStrategy::PerAxis => unset.iter().try_fold(1u64, |total, descriptor| {
            total.checked_add(descriptor.value_count() - 1)
        }),
    };
    let total = total
        .and_then(|total| usize::try_from(total).ok())
        .ok_or(CoreError::ExpansionTooLarge { limit })?;
    if total > limit {
        return Err(CoreError::ExpansionTooLarge { limit });
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn name(value: &str) -> OptionName {
        OptionName::new(value).unwrap()
    }

    fn settings(pairs: &[(&str, &str)]) -> OptionValues {
        pairs
            .iter()
            .map(|(n, v)| (name(n), OptionValue::from(*v)))
            .collect()
    }

    fn two_axis_schema() -> OptionSchema {
        OptionSchema::new(vec![
            OptionDescriptor::enumeration(
                name("o_a"),
                vec!["A_default".into(), "A1".into()],
                "A_default".into(),
            )
            .unwrap(),
            OptionDescriptor::enumeration(
                name("o_b"),
                vec!["B_default".into(), "B1".into(), "B2".into()],
                "B_default".into(),
            )
            .unwrap(),
            OptionDescriptor::boolean(name("o_fixed"), false),
        ])
        .unwrap()
    }

    fn pair(row: &VariantInfo) -> (String, String) {
        (
            row.option("o_a").unwrap().to_string(),
            row.option("o_b").unwrap().to_string(),
        )
    }

    #[test]
    fn empty_settings_produce_nothing() {
        let rows = expand_from_settings(
            &two_axis_schema(),
            OptionValues::new(),
            &ExpansionOptions::default(),
        )
        .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn fully_set_settings_produce_only_baseline() {
        let rows = expand_from_settings(
            &two_axis_schema(),
            settings(&[("o_a", "A1"), ("o_b", "B2")]),
            &ExpansionOptions::default(),
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].stable_id.get(), 1);
        assert_eq!(pair(&rows[0]), ("A1".into(), "B2".into()));
    }

    #[test]
    fn cartesian_expansion_covers_product_of_unset_options() {
        let rows = expand_from_settings(
            &two_axis_schema(),
            settings(&[("o_a", ""), ("o_b", ""), ("o_fixed", "true")]),
            &ExpansionOptions::default(),
        )
        .unwrap();
        let ids: Vec<u32> = rows.iter().map(|row| row.stable_id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        let combos: Vec<(String, String)> = rows.iter().map(pair).collect();
        assert_eq!(
            combos,
            vec![
                ("A_default".into(), "B_default".into()),
                ("A1".into(), "B_default".into()),
                ("A_default".into(), "B1".into()),
                ("A1".into(), "B1".into()),
                ("A_default".into(), "B2".into()),
                ("A1".into(), "B2".into()),
            ]
        );
        assert!(
            rows.iter()
                .all(|row| row.option("o_fixed").unwrap().as_str() == "true")
        );
    }

    #[test]
    fn per_axis_expansion_never_combines_non_defaults() {
        let options = ExpansionOptions::default().with_strategy(ExpansionStrategy::PerAxis);
        let rows = expand_from_settings(
            &two_axis_schema(),
            settings(&[("o_a", ""), ("o_b", "")]),
            &options,
        )
        .unwrap();
        let ids: Vec<u32> = rows.iter().map(|row| row.stable_id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let combos: BTreeSet<(String, String)> = rows.iter().map(pair).collect();
        let expected: BTreeSet<(String, String)> = [
            ("A_default", "B_default"),
            ("A1", "B_default"),
            ("A_default", "B1"),
            ("A_default", "B2"),
        ]
        .into_iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
        assert_eq!(combos, expected);
    }

    #[test]
    fn settings_outside_schema_are_kept_on_every_row() {
        let rows = expand_from_settings(
            &two_axis_schema(),
            settings(&[("o_a", ""), ("o_unknown", "7")]),
            &ExpansionOptions::default(),
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert!(
            rows.iter()
                .all(|row| row.option("o_unknown").unwrap().as_str() == "7")
        );
        assert!(rows.iter().all(|row| row.option("o_b").is_none()));
    }

    #[test]
    fn oversized_expansion_is_rejected_before_allocation() {
        let schema = OptionSchema::new(vec![
            OptionDescriptor::integer_range(name("o_x"), 0, 99, 0).unwrap(),
            OptionDescriptor::integer_range(name("o_y"), 0, 99, 0).unwrap(),
        ])
        .unwrap();
        let options = ExpansionOptions::default().with_max_expanded_rows(1_000);
        let result = expand_from_settings(&schema, settings(&[("o_x", ""), ("o_y", "")]), &options);
        assert!(matches!(
            result,
            Err(CoreError::ExpansionTooLarge { limit: 1_000 })
        ));
    }

    #[test]
    fn row_limit_applies_to_planned_count() {
        let wide = OptionDescriptor::integer_range(name("o_wide"), 0, 0, 0).unwrap();
        let descriptors: Vec<OptionDescriptor> = vec![wide];
        let unset: Vec<&OptionDescriptor> = descriptors.iter().collect();
        let options = ExpansionOptions::default().with_max_expanded_rows(0);
        assert!(planned_row_count(&unset, &options).is_err());
        let options = ExpansionOptions::default();
        assert_eq!(planned_row_count(&unset, &options).unwrap(), 1);
    }
}
