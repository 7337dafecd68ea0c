//! Canonical hashing of option maps.
//!
//! The hash of an option map is the wrapping sum of independent per-entry
//! hashes, so it does not depend on the order entries are visited in.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::{OptionName, OptionValue};

const ENTRY_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Order-independent hash over `(name, value)` entries.
///
/// Two option maps with the same entries hash identically regardless of
/// iteration order. Equal hashes do not imply equal maps.
pub fn canonical_hash<'a, I>(entries: I) -> u64
where
    I: IntoIterator<Item = (&'a OptionName, &'a OptionValue)>,
{
    let (sum, count) = entries
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), (name, value)| {
            (sum.wrapping_add(entry_hash(name, value)), count + 1)
        });
    sum ^ count.wrapping_mul(ENTRY_SEED)
}

fn entry_hash(name: &OptionName, value: &OptionValue) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    value.hash(&mut hasher);
    // Spread the bits before summing so that related entries do not cancel.
    let mixed = hasher.finish() ^ ENTRY_SEED;
    mixed.wrapping_mul(0xbf58_476d_1ce4_e5b9).rotate_left(31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptionValues;

    fn entry(name: &str, value: &str) -> (OptionName, OptionValue) {
        (OptionName::new(name).unwrap(), OptionValue::from(value))
    }

    #[test]
    fn reversed_order_hashes_identically() {
        let entries = vec![
            entry("o_a", "1"),
            entry("o_b", "true"),
            entry("o_c", "High"),
        ];
        let forward = canonical_hash(entries.iter().map(|(n, v)| (n, v)));
        let backward = canonical_hash(entries.iter().rev().map(|(n, v)| (n, v)));
        assert_eq!(forward, backward);
    }

    #[test]
    fn swapped_values_differ() {
        let left: OptionValues = [entry("o_a", "1"), entry("o_b", "2")].into_iter().collect();
        let right: OptionValues = [entry("o_a", "2"), entry("o_b", "1")].into_iter().collect();
        assert_ne!(canonical_hash(&left), canonical_hash(&right));
    }

    #[test]
    fn empty_map_is_stable() {
        let empty = OptionValues::new();
        assert_eq!(canonical_hash(&empty), canonical_hash(&OptionValues::new()));
    }
}
