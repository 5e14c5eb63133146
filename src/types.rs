// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the suggestion engine.
//!
//! These types mirror the JSON the website front-end ships and consumes:
//! everything serializes camelCase, and `Suggestion` is exactly the shape the
//! dropdown component renders. Keep them lean - the catalog gets deserialized
//! on every page that carries a search bar.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Property.city**: must be the slug of a `City` in the same catalog.
//!   A dangling slug doesn't error - the city simply counts zero properties.
//!
//! - **Listings**: missing arrays deserialize as empty, never as an error.
//!   This is the crate's null-collection policy; the aggregator treats an
//!   empty collection and an absent one identically.
//!
//! - **SuggestionLimits**: category caps may sum past `total` - the global
//!   truncation is load-bearing. `contracts.rs` pins this at compile time
//!   for the defaults.

use serde::{Deserialize, Serialize};

// =============================================================================
// CATALOG ENTITIES
// =============================================================================

/// A bookable property as the catalog serializes it.
///
/// `description` is marketing copy and frequently absent; the aggregator
/// substitutes a fallback blurb rather than emitting an empty suggestion line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Slug of the city this property belongs to.
    pub city: String,
}

/// A city page the website can link to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub slug: String,
    pub name: String,
}

/// A stay type derived from a property ("Villa", "Resort", ...).
///
/// Multiple properties yield records with identical `type_name`; the
/// aggregator deduplicates by name and counts the full record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayType {
    pub id: u32,
    pub slug: String,
    pub type_name: String,
}

/// The aggregator's input bundle: the three entity collections, fetched
/// upstream (possibly in parallel) and handed over together.
///
/// All arrays default to empty on deserialization, so a catalog file that
/// predates stay types still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listings {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub stay_types: Vec<StayType>,
}

impl Listings {
    /// True when every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.cities.is_empty() && self.stay_types.is_empty()
    }
}

// =============================================================================
// SUGGESTION OUTPUT
// =============================================================================

/// Which entity a suggestion points at.
///
/// Serialized lowercase-kebab ("city", "property", "stay-type") to match the
/// front-end's discriminator field. Output order is fixed: cities first, then
/// properties, then stay types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    City,
    Property,
    StayType,
}

impl SuggestionKind {
    /// Lowercase string form, matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::City => "city",
            SuggestionKind::Property => "property",
            SuggestionKind::StayType => "stay-type",
        }
    }
}

/// One entry in the suggestion dropdown.
///
/// `id` is the property id for properties and the slug for cities and stay
/// types - the front-end only uses it as a list key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub kind: SuggestionKind,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// How many suggestions each category may contribute, and the global cap
/// applied after concatenation.
///
/// Categories are not rebalanced: a city shortfall does not buy properties
/// extra slots. Named fields instead of magic numbers so the caps are
/// independently testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionLimits {
    pub cities: usize,
    pub properties: usize,
    pub stay_types: usize,
    pub total: usize,
}

impl SuggestionLimits {
    /// The production dropdown: 3 cities, 3 properties, 2 stay types, 6 overall.
    pub const DEFAULT: SuggestionLimits = SuggestionLimits {
        cities: 3,
        properties: 3,
        stay_types: 2,
        total: 6,
    };
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
