//! Tests for svl-model types.

use proptest::prelude::*;

use svl_model::{
    OptionDescriptor, OptionName, OptionType, OptionValue, OptionValues, ShaderVariantList,
    StableId, VariantInfo, canonical_hash,
};

#[test]
fn variant_list_reads_persisted_layout() {
    let json = r#"{
        "Shader": "Materials/Types/StandardPBR_ForwardPass.shader",
        "Variants": [
            { "StableId": 1, "Options": { "o_opacity_mode": "OpacityMode::Opaque" } },
            { "StableId": 2, "Options": { "o_opacity_mode": "OpacityMode::Cutout", "o_specularF0_enableMultiScatterCompensation": "true" } }
        ]
    }"#;
    let list: ShaderVariantList = serde_json::from_str(json).expect("parse list");
    assert_eq!(
        list.shader_file_path,
        "Materials/Types/StandardPBR_ForwardPass.shader"
    );
    assert!(!list.material_options_hint);
    assert_eq!(list.len(), 2);
    assert_eq!(list.variants[1].stable_id, StableId::new(2));
    assert_eq!(
        list.variants[1].option("o_opacity_mode").map(OptionValue::as_str),
        Some("OpacityMode::Cutout")
    );
}

#[test]
fn variant_list_rejects_blank_option_names() {
    let json = r#"{ "Shader": "a.shader", "Variants": [ { "StableId": 1, "Options": { " ": "x" } } ] }"#;
    assert!(serde_json::from_str::<ShaderVariantList>(json).is_err());
}

#[test]
fn descriptor_deserialization_is_validated() {
    let valid = r#"{
        "name": "o_quality",
        "option_type": "Enumeration",
        "default_value": "Quality::Medium",
        "min_index": 0,
        "max_index": 2,
        "values": ["Quality::Low", "Quality::Medium", "Quality::High"]
    }"#;
    let descriptor: OptionDescriptor = serde_json::from_str(valid).expect("parse descriptor");
    assert_eq!(descriptor.option_type(), OptionType::Enumeration);
    assert_eq!(descriptor.value_count(), 3);

    let reversed = r#"{
        "name": "o_quality",
        "option_type": "Enumeration",
        "default_value": "Quality::Low",
        "min_index": 2,
        "max_index": 0,
        "values": ["Quality::Low"]
    }"#;
    assert!(serde_json::from_str::<OptionDescriptor>(reversed).is_err());
}

#[test]
fn from_pairs_trims_names() {
    let row = VariantInfo::from_pairs(4, &[(" o_fog ", "true")]).expect("row");
    assert_eq!(row.option("o_fog").map(OptionValue::as_str), Some("true"));
}

fn option_entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("o_[a-z]{1,6}", "[A-Za-z0-9]{0,4}", 0..8)
        .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn canonical_hash_ignores_entry_order(entries in option_entries(), seed in any::<u64>()) {
        let typed: Vec<(OptionName, OptionValue)> = entries
            .iter()
            .map(|(name, value)| (OptionName::new(name.as_str()).unwrap(), OptionValue::from(value.as_str())))
            .collect();
        let mut shuffled = typed.clone();
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();
        }
        let map: OptionValues = typed.iter().cloned().collect();
        prop_assert_eq!(
            canonical_hash(&map),
            canonical_hash(shuffled.iter().map(|(name, value)| (name, value)))
        );
    }
}
