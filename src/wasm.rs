// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser bindings for the website's search bar and pagination strip.
//!
//! The front-end calls the same two functions the native tests exercise;
//! conversion happens at this boundary via serde. Malformed input comes back
//! as a JS error, never a panic across the FFI.

use wasm_bindgen::prelude::*;

use crate::paging::compute_page_range;
use crate::types::Listings;

/// Aggregate suggestions for the dropdown.
///
/// `listings` is the catalog object the site ships ({properties, cities,
/// stayTypes}); missing arrays are treated as empty.
#[wasm_bindgen(js_name = suggest)]
pub fn suggest_js(listings: JsValue, query: &str) -> Result<JsValue, JsValue> {
    let listings: Listings = serde_wasm_bindgen::from_value(listings)
        .map_err(|err| JsValue::from_str(&format!("invalid listings: {}", err)))?;
    let suggestions = crate::suggest::suggest(&listings, query);
    serde_wasm_bindgen::to_value(&suggestions).map_err(JsValue::from)
}

/// Plan the pagination strip.
#[wasm_bindgen(js_name = pageRange)]
pub fn page_range_js(current: u32, total: u32, max_visible: u32) -> Result<JsValue, JsValue> {
    let range = compute_page_range(current, total, max_visible);
    serde_wasm_bindgen::to_value(&range).map_err(JsValue::from)
}
