//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.


#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::assets::Asset;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_asset_name_is_well_formed(name in asset_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == '-'));
        }

        #[test]
        fn prop_sha256_hash_is_64_hex_chars(hash in sha256_hash()) {
            prop_assert_eq!(hash.len(), 64);
            prop_assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        }

        #[test]
        fn prop_generated_assets_are_never_archives_for_jsonl(
            name in asset_name(),
            url in url(),
        ) {
            let asset = Asset::new(&name, &url, format!("boolq/{name}.jsonl"));
            prop_assert!(!asset.is_archive());
        }
    }
}
