//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on decomposition and depth measurement.

use super::decompose::{stem, suffix, suffixes};
use super::normalize::SEPARATOR;
use super::walk::relative_depth;
use super::{CaseSensitivity, PathEntity};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

// Names like `report`, `report.tar`, `report.tar.gz` (no leading dots).
fn dotted_name_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        segment_strategy(),
        prop::collection::vec("[a-z0-9]{1,5}", 0..4),
    )
}

fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Without a dot there is no suffix and the stem is the whole name.
    #[test]
    fn dotless_names_have_no_suffix(name in segment_strategy()) {
        prop_assert_eq!(suffix(&name), "");
        prop_assert_eq!(stem(&name), name.as_str());
        prop_assert!(suffixes(&name).is_empty());
    }

    // stem + suffix always rebuilds the name.
    #[test]
    fn stem_and_suffix_rebuild_name((head, exts) in dotted_name_strategy()) {
        let name = std::iter::once(head).chain(exts).collect::<Vec<_>>().join(".");
        prop_assert_eq!(format!("{}{}", stem(&name), suffix(&name)), name);
    }

    // The suffix list has one entry per dot and ends with the suffix.
    #[test]
    fn suffixes_agree_with_suffix((head, exts) in dotted_name_strategy()) {
        let name = std::iter::once(head).chain(exts.clone()).collect::<Vec<_>>().join(".");
        let all = suffixes(&name);
        prop_assert_eq!(all.len(), exts.len());
        match all.last() {
            Some(last) => prop_assert_eq!(last.as_str(), suffix(&name)),
            None => prop_assert_eq!(suffix(&name), ""),
        }
    }

    // A leading dot never starts a suffix.
    #[test]
    fn hidden_names_keep_their_dot(name in segment_strategy()) {
        let hidden = format!(".{name}");
        prop_assert_eq!(suffix(&hidden), "");
        prop_assert_eq!(stem(&hidden), hidden.as_str());
    }

    // Depth equals the number of components appended to the root.
    #[test]
    fn depth_counts_appended_components(root in path_strategy(), extra in path_strategy()) {
        let sep = SEPARATOR.to_string();
        let root_path = format!("{sep}{}", root.join(&sep));
        let child_path = format!("{root_path}{sep}{}", extra.join(&sep));
        prop_assert_eq!(relative_depth(&root_path, &root_path), 0);
        prop_assert_eq!(relative_depth(&root_path, &child_path), extra.len());
    }

    // Entities are stable under re-normalization.
    #[test]
    fn entity_normalization_idempotent(parts in path_strategy(), sensitive in any::<bool>()) {
        let case = CaseSensitivity::from_flag(sensitive);
        let raw = parts.join(&SEPARATOR.to_string());
        let once = PathEntity::with_case(&raw, case);
        let twice = PathEntity::with_case(once.as_str(), case);
        prop_assert_eq!(once, twice);
    }

    // The name is always the last component.
    #[test]
    fn name_is_last_component(parts in path_strategy()) {
        let raw = parts.join(&SEPARATOR.to_string());
        let entity = PathEntity::with_case(&raw, CaseSensitivity::Sensitive);
        prop_assert_eq!(entity.name(), parts.last().unwrap().as_str());
    }
}
