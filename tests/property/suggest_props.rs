//! Aggregation invariants over randomized catalogs.

use crate::common::{make_listings, make_stay_type};
use proptest::prelude::*;
use std::collections::HashSet;
use stayfind::{suggest_with_limits, StayType, StayTypeMerger, SuggestionKind, SuggestionLimits};

/// Stay-type names drawn from a small alphabet so duplicates are common.
fn stay_type_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Villa".to_string(),
        "Village House".to_string(),
        "Resort".to_string(),
        "Cabin".to_string(),
        "Loft".to_string(),
        "Cave House".to_string(),
    ])
}

fn stay_types_strategy() -> impl Strategy<Value = Vec<StayType>> {
    prop::collection::vec(stay_type_name_strategy(), 0..30).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| make_stay_type(i as u32 + 1, &name))
            .collect()
    })
}

fn limits_strategy() -> impl Strategy<Value = SuggestionLimits> {
    (0usize..5, 0usize..5, 0usize..5, 0usize..10).prop_map(
        |(cities, properties, stay_types, total)| SuggestionLimits {
            cities,
            properties,
            stay_types,
            total,
        },
    )
}

proptest! {
    #[test]
    fn prop_stay_types_unique_by_name(records in stay_types_strategy()) {
        let listings = make_listings(vec![], vec![], records);
        let suggestions = suggest_with_limits(
            &listings,
            "villa",
            &SuggestionLimits { stay_types: 10, ..SuggestionLimits::DEFAULT },
        );

        let mut seen = HashSet::new();
        for suggestion in &suggestions {
            prop_assert!(
                seen.insert(suggestion.name.clone()),
                "duplicate stay-type name {:?}",
                suggestion.name
            );
        }
    }

    #[test]
    fn prop_counts_match_a_naive_oracle(records in stay_types_strategy()) {
        let mut merger = StayTypeMerger::new();
        merger.merge_all(&records);

        for stay_type in merger.deduplicated() {
            let oracle = records
                .iter()
                .filter(|r| r.type_name == stay_type.type_name)
                .count();
            prop_assert_eq!(merger.count_for(&stay_type.type_name), oracle);
        }
    }

    #[test]
    fn prop_dedup_keeps_first_record(records in stay_types_strategy()) {
        let mut merger = StayTypeMerger::new();
        merger.merge_all(&records);

        for stay_type in merger.deduplicated() {
            let first = records
                .iter()
                .find(|r| r.type_name == stay_type.type_name)
                .expect("deduplicated record must come from the input");
            prop_assert_eq!(stay_type.id, first.id);
            prop_assert_eq!(&stay_type.slug, &first.slug);
        }
    }

    #[test]
    fn prop_arbitrary_limits_are_respected(
        records in stay_types_strategy(),
        limits in limits_strategy(),
        query in "[a-z]{3,6}",
    ) {
        let listings = make_listings(vec![], vec![], records);
        let suggestions = suggest_with_limits(&listings, &query, &limits);

        prop_assert!(suggestions.len() <= limits.total);
        let stay_type_count = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::StayType)
            .count();
        prop_assert!(stay_type_count <= limits.stay_types);
    }
}
