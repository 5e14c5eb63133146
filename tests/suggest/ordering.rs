//! Category and catalog-order guarantees.

use crate::common::{make_city, make_listings, make_property, sample_listings};
use stayfind::{suggest, SuggestionKind};

#[test]
fn cities_then_properties_then_stay_types() {
    let suggestions = suggest(&sample_listings(), "aro");
    // "aro" matches the city Paros and both Paros properties.
    assert_eq!(suggestions[0].kind, SuggestionKind::City);
    assert!(suggestions[1..]
        .iter()
        .all(|s| s.kind == SuggestionKind::Property));
}

#[test]
fn spec_example_paris_ordering() {
    let listings = make_listings(
        vec![make_property(1, "Paris Inn", "paris")],
        vec![
            make_city("paris", "Paris"),
            make_city("paris-city", "Paris City"),
        ],
        vec![],
    );
    let names: Vec<String> = suggest(&listings, "paris")
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Paris", "Paris City", "Paris Inn"]);
}

#[test]
fn matches_keep_catalog_order_not_match_position() {
    // "house" appears later in some names, earlier in others; catalog order
    // must win regardless.
    let listings = make_listings(
        vec![
            make_property(1, "Santorini Cave House", "santorini"),
            make_property(2, "House of Winds", "naxos"),
            make_property(3, "Paros Cliff House", "paros"),
        ],
        vec![],
        vec![],
    );
    let names: Vec<String> = suggest(&listings, "house")
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(
        names,
        vec!["Santorini Cave House", "House of Winds", "Paros Cliff House"]
    );
}

#[test]
fn substring_match_is_case_insensitive() {
    let suggestions = suggest(&sample_listings(), "PAROS");
    assert!(!suggestions.is_empty());
    assert_eq!(suggestions[0].name, "Paros");
}

#[test]
fn mid_name_substrings_match() {
    let suggestions = suggest(&sample_listings(), "indmill");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "Naxos Windmill Stay");
}
