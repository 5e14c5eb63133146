//! Stay-type deduplication and availability counts.

use crate::common::{duplicated_stay_types, make_listings, make_stay_type, sample_listings};
use stayfind::{suggest, StayTypeMerger, SuggestionKind};

#[test]
fn spec_example_villa_count() {
    // Two Villa records with different ids, one Resort.
    let listings = make_listings(
        vec![],
        vec![],
        vec![
            make_stay_type(1, "Villa"),
            make_stay_type(2, "Villa"),
            make_stay_type(3, "Resort"),
        ],
    );
    let suggestions = suggest(&listings, "vil");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].kind, SuggestionKind::StayType);
    assert_eq!(suggestions[0].name, "Villa");
    assert_eq!(
        suggestions[0].description.as_deref(),
        Some("2 properties available")
    );
}

#[test]
fn first_occurrence_supplies_id_and_slug() {
    let listings = make_listings(vec![], vec![], duplicated_stay_types("Villa", 3));
    let suggestions = suggest(&listings, "vil");
    assert_eq!(suggestions.len(), 1);
    // duplicated_stay_types slugs are villa-0, villa-1, villa-2.
    assert_eq!(suggestions[0].slug, "villa-0");
    assert_eq!(
        suggestions[0].description.as_deref(),
        Some("3 properties available")
    );
}

#[test]
fn counts_are_system_wide_not_query_scoped() {
    // "Cave House" appears once, "Villa" twice; querying "cave" must not
    // shrink Villa's count bookkeeping, and the Cave House count is its own.
    let suggestions = suggest(&sample_listings(), "cave");
    let stay_type = suggestions
        .iter()
        .find(|s| s.kind == SuggestionKind::StayType)
        .expect("cave house stay type");
    assert_eq!(
        stay_type.description.as_deref(),
        Some("1 properties available")
    );
}

#[test]
fn merger_is_linear_over_large_duplicate_sets() {
    // 10k duplicates of one name reduce to a single suggestion with the
    // full count; this completes instantly if the join is linear.
    let listings = make_listings(vec![], vec![], duplicated_stay_types("Villa", 10_000));
    let suggestions = suggest(&listings, "villa");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(
        suggestions[0].description.as_deref(),
        Some("10000 properties available")
    );
}

#[test]
fn merger_standalone_api() {
    let records = vec![
        make_stay_type(1, "Villa"),
        make_stay_type(2, "Resort"),
        make_stay_type(3, "Villa"),
    ];
    let mut merger = StayTypeMerger::new();
    merger.merge_all(&records);

    assert_eq!(merger.len(), 2);
    assert_eq!(merger.count_for("Villa"), 2);
    assert_eq!(merger.count_for("Resort"), 1);
    let names: Vec<&str> = merger.deduplicated().map(|st| st.type_name.as_str()).collect();
    assert_eq!(names, vec!["Villa", "Resort"]);
}
