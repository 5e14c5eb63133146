// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestion aggregation: one query in, one bounded dropdown list out.
//!
//! The aggregator runs three independent passes over the catalog - cities,
//! properties, stay types - each a filter-in-input-order with its own cap,
//! then concatenates in that fixed order and truncates to the global cap.
//! There is no relevance scoring: matching is substring containment on the
//! normalized name, and "ranking" is whatever order the catalog shipped.
//!
//! The function is total and does no I/O. If the upstream fetch fails, the
//! caller skips calling us; an empty catalog or a query nobody matches both
//! produce an empty list, never an error.

pub mod dedup;

use crate::contracts;
use crate::types::{Listings, Property, Suggestion, SuggestionKind, SuggestionLimits};
use crate::utils::{contains_normalized, normalize};
use dedup::StayTypeMerger;

/// Minimum query length, in characters, before aggregation engages.
///
/// The search bar enforces this before calling; the aggregator enforces it
/// again so a short query can never produce a giant "everything matches"
/// dropdown.
pub const MIN_QUERY_LEN: usize = 3;

/// Blurb used for properties whose catalog entry carries no description.
pub const FALLBACK_PROPERTY_DESCRIPTION: &str = "Luxury resort property";

/// Description line shown under city and stay-type suggestions.
pub(crate) fn availability_blurb(count: usize) -> String {
    format!("{} properties available", count)
}

/// Aggregate suggestions with the production limits (3 cities, 3 properties,
/// 2 stay types, 6 overall).
pub fn suggest(listings: &Listings, query: &str) -> Vec<Suggestion> {
    suggest_with_limits(listings, query, &SuggestionLimits::DEFAULT)
}

/// Aggregate suggestions with explicit limits.
///
/// Matching is case- and diacritic-insensitive substring containment of the
/// query in the entity name. Within each category, catalog order is
/// preserved; across categories the order is cities, properties, stay types.
/// Category caps apply before the global cap and are never rebalanced.
pub fn suggest_with_limits(
    listings: &Listings,
    query: &str,
    limits: &SuggestionLimits,
) -> Vec<Suggestion> {
    // Character count, not byte length - "Åre" is three characters.
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut suggestions = Vec::with_capacity(limits.total);
    suggestions.extend(city_suggestions(listings, &needle, limits.cities));
    suggestions.extend(property_suggestions(
        &listings.properties,
        &needle,
        limits.properties,
    ));
    suggestions.extend(stay_type_suggestions(listings, &needle, limits.stay_types));
    suggestions.truncate(limits.total);

    contracts::check_suggestion_bounds(&suggestions, limits);
    contracts::check_category_order(&suggestions);
    suggestions
}

/// Matching cities, first `cap` in catalog order, each described by how many
/// properties reference its slug.
fn city_suggestions(listings: &Listings, needle: &str, cap: usize) -> Vec<Suggestion> {
    listings
        .cities
        .iter()
        .filter(|city| contains_normalized(&city.name, needle))
        .take(cap)
        .map(|city| {
            let count = listings
                .properties
                .iter()
                .filter(|property| property.city == city.slug)
                .count();
            Suggestion {
                id: city.slug.clone(),
                kind: SuggestionKind::City,
                name: city.name.clone(),
                slug: city.slug.clone(),
                description: Some(availability_blurb(count)),
            }
        })
        .collect()
}

/// Matching properties, first `cap` in catalog order, with the fallback blurb
/// when the catalog entry has no usable description.
fn property_suggestions(properties: &[Property], needle: &str, cap: usize) -> Vec<Suggestion> {
    properties
        .iter()
        .filter(|property| contains_normalized(&property.name, needle))
        .take(cap)
        .map(|property| {
            let description = match &property.description {
                Some(text) if !text.is_empty() => text.clone(),
                _ => FALLBACK_PROPERTY_DESCRIPTION.to_string(),
            };
            Suggestion {
                id: property.id.to_string(),
                kind: SuggestionKind::Property,
                name: property.name.clone(),
                slug: property.slug.clone(),
                description: Some(description),
            }
        })
        .collect()
}

/// Matching stay types after first-occurrence dedup by name.
///
/// Counts come from the full record set, not the filtered one: "Villa" with
/// five records across the catalog reads "5 properties available" even when
/// only two of those villas match anything else about the query.
fn stay_type_suggestions(listings: &Listings, needle: &str, cap: usize) -> Vec<Suggestion> {
    let mut merger = StayTypeMerger::with_capacity(listings.stay_types.len());
    merger.merge_all(&listings.stay_types);
    merger.into_suggestions(needle, cap)
}
