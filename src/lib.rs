//! Search suggestions and pagination planning for a property-listing site.
//!
//! This crate is the computational core behind the Stayfind website's search
//! bar and listing pages: given a typed query and the catalog collections it
//! produces the bounded, ordered dropdown list; given pagination state it
//! produces the page-button rendering plan. Both are pure, synchronous
//! functions - all I/O lives behind the `catalog` boundary.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌───────────────┐
//! │  catalog.rs  │────▶│   types.rs    │────▶│  suggest/     │
//! │ (ListingSource,    │  (Listings,   │     │  (suggest,    │
//! │  gather)     │     │  Suggestion)  │     │  StayTypeMerger)
//! └──────────────┘     └───────────────┘     └───────────────┘
//!                                                   │
//!                      ┌───────────────┐            ▼
//!                      │   paging.rs   │     ┌───────────────┐
//!                      │ (PageRange)   │────▶│ contracts.rs  │
//!                      └───────────────┘     │ (debug checks)│
//!                                            └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use stayfind::{suggest, compute_page_range, Listings};
//!
//! let listings: Listings = serde_json::from_str(r#"{
//!     "properties": [{"id": 1, "name": "Paros Cliff House", "slug": "paros-cliff-house",
//!                     "city": "paros"}],
//!     "cities": [{"slug": "paros", "name": "Paros"}],
//!     "stayTypes": [{"id": 1, "slug": "villa", "typeName": "Villa"}]
//! }"#).unwrap();
//!
//! let suggestions = suggest(&listings, "paros");
//! assert_eq!(suggestions.len(), 2); // the city, then the property
//!
//! let range = compute_page_range(1, 10, 5);
//! assert_eq!(range.pages, vec![1, 2, 3, 4, 5]);
//! ```

// Module declarations
pub mod catalog;
pub mod contracts;
mod paging;
mod suggest;
#[doc(hidden)]
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalog::{gather, CatalogError, FileCatalog, InMemorySource, ListingSource};
pub use paging::{compute_page_range, PageRange, DEFAULT_VISIBLE_PAGES};
pub use suggest::dedup::StayTypeMerger;
pub use suggest::{
    suggest, suggest_with_limits, FALLBACK_PROPERTY_DESCRIPTION, MIN_QUERY_LEN,
};
pub use types::{City, Listings, Property, StayType, Suggestion, SuggestionKind, SuggestionLimits};
pub use utils::normalize;
