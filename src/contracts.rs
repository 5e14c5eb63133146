//! Runtime contracts for the suggestion and pagination invariants.
//!
//! Debug-mode assertions covering the properties the tests verify, so a
//! violation surfaces at the call site during development instead of as a
//! wrong dropdown in production. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Run on every `suggest` / `compute_page_range` call in debug builds
//! 3. Mirror the property tests in `tests/property/` exactly
//!
//! | Contract Function         | Verified Property                          |
//! |---------------------------|--------------------------------------------|
//! | `check_suggestion_bounds` | per-category and global caps hold          |
//! | `check_category_order`    | cities, then properties, then stay types   |
//! | `check_page_window`       | contiguous full-width window, sane flags   |

use crate::paging::PageRange;
use crate::types::{Suggestion, SuggestionKind, SuggestionLimits};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertions on the production limits. If these fail the crate
/// won't build.
const _: () = {
    const D: SuggestionLimits = SuggestionLimits::DEFAULT;

    // The global cap must actually truncate: category caps together
    // overshoot it, so concatenation order decides who gets dropped.
    assert!(D.cities + D.properties + D.stay_types >= D.total);
    assert!(D.total > 0);
};

/// Rank for the fixed category output order.
fn kind_rank(kind: SuggestionKind) -> u8 {
    match kind {
        SuggestionKind::City => 0,
        SuggestionKind::Property => 1,
        SuggestionKind::StayType => 2,
    }
}

/// Per-category and global caps hold.
pub fn check_suggestion_bounds(suggestions: &[Suggestion], limits: &SuggestionLimits) {
    debug_assert!(
        suggestions.len() <= limits.total,
        "suggestion list exceeds global cap: {} > {}",
        suggestions.len(),
        limits.total
    );

    let count = |kind: SuggestionKind| suggestions.iter().filter(|s| s.kind == kind).count();
    debug_assert!(count(SuggestionKind::City) <= limits.cities);
    debug_assert!(count(SuggestionKind::Property) <= limits.properties);
    debug_assert!(count(SuggestionKind::StayType) <= limits.stay_types);
}

/// Kinds appear in the fixed order: cities, properties, stay types.
pub fn check_category_order(suggestions: &[Suggestion]) {
    debug_assert!(
        suggestions
            .windows(2)
            .all(|pair| kind_rank(pair[0].kind) <= kind_rank(pair[1].kind)),
        "suggestion categories out of order"
    );
}

/// The page window is a contiguous ascending run within bounds, at full
/// width whenever the page count allows, with flags consistent with its
/// edges.
pub fn check_page_window(range: &PageRange, total_pages: u32, max_visible: u32) {
    if total_pages == 0 {
        debug_assert!(range.pages.is_empty());
        return;
    }
    let max_visible = max_visible.max(1);

    debug_assert_eq!(
        range.pages.len() as u32,
        max_visible.min(total_pages),
        "window not at full width"
    );
    debug_assert!(
        range
            .pages
            .windows(2)
            .all(|pair| pair[1] == pair[0] + 1),
        "window not contiguous ascending"
    );

    if let (Some(&first), Some(&last)) = (range.pages.first(), range.pages.last()) {
        debug_assert!(first >= 1 && last <= total_pages);
        debug_assert_eq!(range.show_first_page, first > 1);
        debug_assert_eq!(range.show_leading_ellipsis, first > 2);
        debug_assert_eq!(range.show_last_page, last < total_pages);
        debug_assert_eq!(range.show_trailing_ellipsis, last + 1 < total_pages);
    }
}
