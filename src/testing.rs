//! Test fixtures shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical constructors so every test builds entities the
//! same way.

#![doc(hidden)]

use crate::types::{City, Listings, Property, StayType};

/// Create a property in the given city, with no description.
pub fn make_property(id: u32, name: &str, city_slug: &str) -> Property {
    Property {
        id,
        name: name.to_string(),
        slug: slugify(name),
        description: None,
        city: city_slug.to_string(),
    }
}

/// Create a city.
pub fn make_city(slug: &str, name: &str) -> City {
    City {
        slug: slug.to_string(),
        name: name.to_string(),
    }
}

/// Create a stay-type record. The slug is derived from the name the same way
/// the catalog export does it.
pub fn make_stay_type(id: u32, type_name: &str) -> StayType {
    StayType {
        id,
        slug: slugify(type_name),
        type_name: type_name.to_string(),
    }
}

/// Bundle collections into the aggregator's input shape.
pub fn make_listings(
    properties: Vec<Property>,
    cities: Vec<City>,
    stay_types: Vec<StayType>,
) -> Listings {
    Listings {
        properties,
        cities,
        stay_types,
    }
}

fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
