// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stay-type deduplication with availability counts.
//!
//! Every property contributes its own stay-type record, so a catalog with
//! twelve villas hands us "Villa" twelve times. The dropdown must show it
//! once - but counting "12 properties available". Easy to get wrong by
//! deduplicating first and counting what's left, which silently reports the
//! count of distinct names instead of records.
//!
//! `StayTypeMerger` does the join as an explicit two-step pipeline: gather
//! every record (accumulating a count per name), then emit first occurrences
//! in encounter order. Linear in the record count, no nested rescans.
//!
//! **Invariant**: each `type_name` appears at most once in the output, and
//! its count covers ALL records with that name, duplicates included.
//!
//! **Verified by**:
//! - `prop_stay_types_unique_by_name` (tests/property/suggest_props.rs)
//! - `tests/suggest/dedup.rs`

use crate::suggest::availability_blurb;
use crate::types::{StayType, Suggestion, SuggestionKind};
use crate::utils::contains_normalized;
use std::collections::HashMap;

/// First-occurrence-wins merger keyed on `type_name` alone.
///
/// Name matching is case-sensitive exact, matching how the catalog derives
/// the records: "Villa" and "villa" would be distinct stay types (and a
/// catalog bug, but not ours to paper over).
///
/// # Example
///
/// ```ignore
/// let mut merger = StayTypeMerger::new();
/// merger.merge_all(&listings.stay_types);
/// let suggestions = merger.into_suggestions("vil", 2);
/// ```
#[derive(Debug, Default)]
pub struct StayTypeMerger {
    /// First record seen per name, in encounter order.
    firsts: Vec<StayType>,
    /// Records seen per name - the availability count, duplicates included.
    counts: HashMap<String, usize>,
}

impl StayTypeMerger {
    /// Create an empty merger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a merger with pre-allocated capacity.
    ///
    /// Use this when you know the record count up front (the aggregator does).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            firsts: Vec::with_capacity(capacity),
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Merge a single record, keeping the first occurrence per name.
    ///
    /// Later duplicates only bump the count; their `id` and `slug` are
    /// discarded.
    pub fn merge(&mut self, record: &StayType) {
        let count = self.counts.entry(record.type_name.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            self.firsts.push(record.clone());
        }
    }

    /// Merge multiple records at once.
    ///
    /// Equivalent to calling `merge()` for each record.
    pub fn merge_all<'a>(&mut self, records: impl IntoIterator<Item = &'a StayType>) {
        for record in records {
            self.merge(record);
        }
    }

    /// Number of distinct stay-type names seen so far.
    pub fn len(&self) -> usize {
        self.firsts.len()
    }

    /// Check if the merger is empty.
    pub fn is_empty(&self) -> bool {
        self.firsts.is_empty()
    }

    /// Total records seen for a name (0 for unknown names).
    pub fn count_for(&self, type_name: &str) -> usize {
        self.counts.get(type_name).copied().unwrap_or(0)
    }

    /// Iterate the deduplicated records in encounter order.
    pub fn deduplicated(&self) -> impl Iterator<Item = &StayType> {
        self.firsts.iter()
    }

    /// Emit suggestions for names matching `needle`, capped at `cap`.
    ///
    /// `needle` must already be normalized. Encounter order is preserved;
    /// the description carries the full availability count.
    pub fn into_suggestions(self, needle: &str, cap: usize) -> Vec<Suggestion> {
        let counts = self.counts;
        self.firsts
            .into_iter()
            .filter(|stay_type| contains_normalized(&stay_type.type_name, needle))
            .take(cap)
            .map(|stay_type| {
                let count = counts.get(&stay_type.type_name).copied().unwrap_or(0);
                Suggestion {
                    id: stay_type.slug.clone(),
                    kind: SuggestionKind::StayType,
                    name: stay_type.type_name,
                    slug: stay_type.slug,
                    description: Some(availability_blurb(count)),
                }
            })
            .collect()
    }
}
