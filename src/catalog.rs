// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the listing data comes from.
//!
//! The aggregator itself never does I/O; something upstream supplies the
//! three collections. `ListingSource` is that collaborator's contract: the
//! website's data layer implements it over its API client, the CLI and tests
//! implement it over local data. `gather` pulls all three collections and
//! performs the per-property stay-type flatten - the one join in the system -
//! so the aggregator only ever sees a single flat `Vec<StayType>`.
//!
//! Fetch failures stop at this boundary. `gather` returns `CatalogError` and
//! the caller decides whether to skip suggestions or retry; `suggest` never
//! sees a failure.

use crate::types::{City, Listings, Property, StayType};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Errors at the catalog boundary. Nothing else in the crate fails.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file could not be read.
    Io(io::Error),
    /// Catalog data is not valid JSON for the listings schema.
    Malformed(serde_json::Error),
    /// The upstream source failed to supply a collection.
    Source(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read catalog: {}", err),
            CatalogError::Malformed(err) => write!(f, "invalid catalog JSON: {}", err),
            CatalogError::Source(what) => write!(f, "listing source failed: {}", what),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Malformed(err) => Some(err),
            CatalogError::Source(_) => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Malformed(err)
    }
}

/// The upstream data-access collaborator.
///
/// Collections may be fetched in any order (the website fetches them in
/// parallel); `gather` only requires that all three succeed before the
/// aggregator runs.
pub trait ListingSource {
    fn all_properties(&self) -> Result<Vec<Property>, CatalogError>;
    fn all_cities(&self) -> Result<Vec<City>, CatalogError>;
    fn stay_types_for_property(&self, property_id: u32) -> Result<Vec<StayType>, CatalogError>;
}

/// Fetch everything from a source and flatten per-property stay types into
/// the single collection the aggregator consumes.
///
/// The flatten preserves property order, which in turn fixes the stay-type
/// encounter order the deduplicator keys on. Any upstream failure aborts the
/// gather; there are no partial results.
pub fn gather(source: &impl ListingSource) -> Result<Listings, CatalogError> {
    let properties = source.all_properties()?;
    let cities = source.all_cities()?;

    let mut stay_types = Vec::with_capacity(properties.len());
    for property in &properties {
        stay_types.extend(source.stay_types_for_property(property.id)?);
    }

    Ok(Listings {
        properties,
        cities,
        stay_types,
    })
}

/// In-memory source: the shape the website's data layer hands over, keyed by
/// owning property. Backs the gather tests and any embedding that already
/// holds the data.
#[derive(Debug, Default)]
pub struct InMemorySource {
    pub properties: Vec<Property>,
    pub cities: Vec<City>,
    /// Stay types keyed by owning property id.
    pub stay_types: HashMap<u32, Vec<StayType>>,
}

impl ListingSource for InMemorySource {
    fn all_properties(&self) -> Result<Vec<Property>, CatalogError> {
        Ok(self.properties.clone())
    }

    fn all_cities(&self) -> Result<Vec<City>, CatalogError> {
        Ok(self.cities.clone())
    }

    fn stay_types_for_property(&self, property_id: u32) -> Result<Vec<StayType>, CatalogError> {
        Ok(self
            .stay_types
            .get(&property_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// JSON-file-backed catalog for the CLI and integration tests.
///
/// The file holds a `Listings` object with the stay types already flattened
/// (the site's build step exports it that way). Missing arrays load as
/// empty per the crate's null-collection policy.
#[derive(Debug)]
pub struct FileCatalog {
    listings: Listings,
}

impl FileCatalog {
    /// Load and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let listings: Listings = serde_json::from_str(&raw)?;
        Ok(FileCatalog { listings })
    }

    /// Borrow the loaded listings.
    pub fn listings(&self) -> &Listings {
        &self.listings
    }

    /// Take ownership of the loaded listings.
    pub fn into_listings(self) -> Listings {
        self.listings
    }
}
