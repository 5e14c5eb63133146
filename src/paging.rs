// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pagination window planning: which page buttons to render.
//!
//! Given the current page, the page count, and how many buttons fit, compute
//! the contiguous run of page numbers to show plus the ellipsis and
//! first/last shortcut flags. The window keeps the current page as centered
//! as the bounds allow.
//!
//! The subtle part is the second clamp: a naive `min(total, current + half)`
//! produces a short window near the last page. After clamping the end, the
//! start is recomputed so the window stays at full width whenever the page
//! count allows it. `computeRange(10, 10, 5)` must yield five buttons
//! (6..=10), not three.

use crate::contracts;
use serde::{Deserialize, Serialize};

/// Number of page buttons the listing pages render by default.
pub const DEFAULT_VISIBLE_PAGES: u32 = 5;

/// Rendering plan for a pagination strip.
///
/// `pages` is a contiguous ascending run within `[1, total_pages]`. The
/// flags tell the strip whether to render the jump-to-first/last buttons and
/// the ellipses between them and the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRange {
    pub pages: Vec<u32>,
    pub show_leading_ellipsis: bool,
    pub show_trailing_ellipsis: bool,
    pub show_first_page: bool,
    pub show_last_page: bool,
}

impl PageRange {
    /// The plan for zero pages: nothing to render.
    pub const fn empty() -> Self {
        PageRange {
            pages: Vec::new(),
            show_leading_ellipsis: false,
            show_trailing_ellipsis: false,
            show_first_page: false,
            show_last_page: false,
        }
    }
}

/// Compute the visible page window.
///
/// Out-of-range inputs are clamped rather than rejected: `current_page`
/// into `[1, total_pages]`, `max_visible` up to at least 1. The function is
/// total - `total_pages == 0` yields the empty plan.
///
/// # Example
///
/// ```
/// use stayfind::compute_page_range;
///
/// let range = compute_page_range(5, 20, 5);
/// assert_eq!(range.pages, vec![3, 4, 5, 6, 7]);
/// assert!(range.show_first_page && range.show_last_page);
/// ```
pub fn compute_page_range(current_page: u32, total_pages: u32, max_visible: u32) -> PageRange {
    if total_pages == 0 {
        return PageRange::empty();
    }
    let max_visible = max_visible.max(1);
    let current = current_page.clamp(1, total_pages);

    let half = max_visible / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = total_pages.min(start.saturating_add(max_visible - 1));
    // Window came up short against the right edge; shift left to full width.
    if end - start + 1 < max_visible {
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    let range = PageRange {
        pages: (start..=end).collect(),
        show_leading_ellipsis: start > 2,
        show_trailing_ellipsis: end + 1 < total_pages,
        show_first_page: start > 1,
        show_last_page: end < total_pages,
    };
    contracts::check_page_window(&range, total_pages, max_visible);
    range
}
