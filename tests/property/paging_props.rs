//! Window geometry invariants over randomized pagination state.

use proptest::prelude::*;
use stayfind::compute_page_range;

proptest! {
    #[test]
    fn prop_window_is_contiguous_and_in_bounds(
        current in 0u32..100,
        total in 1u32..60,
        max_visible in 1u32..15,
    ) {
        let range = compute_page_range(current, total, max_visible);

        prop_assert_eq!(range.pages.len() as u32, max_visible.min(total));
        prop_assert!(range.pages.windows(2).all(|p| p[1] == p[0] + 1));
        prop_assert!(*range.pages.first().unwrap() >= 1);
        prop_assert!(*range.pages.last().unwrap() <= total);
    }

    #[test]
    fn prop_flags_mirror_window_edges(
        current in 1u32..60,
        total in 1u32..60,
        max_visible in 1u32..15,
    ) {
        let range = compute_page_range(current, total, max_visible);
        let first = *range.pages.first().unwrap();
        let last = *range.pages.last().unwrap();

        prop_assert_eq!(range.show_first_page, first > 1);
        prop_assert_eq!(range.show_leading_ellipsis, first > 2);
        prop_assert_eq!(range.show_last_page, last < total);
        prop_assert_eq!(range.show_trailing_ellipsis, last + 1 < total);

        // An ellipsis implies the shortcut button next to it.
        prop_assert!(!range.show_leading_ellipsis || range.show_first_page);
        prop_assert!(!range.show_trailing_ellipsis || range.show_last_page);
    }

    #[test]
    fn prop_full_width_whenever_possible(
        current in 1u32..60,
        total in 1u32..60,
        max_visible in 1u32..15,
    ) {
        // The two-pass clamp exists for exactly this: near the end of the
        // listing the window must still be max_visible wide when the page
        // count allows it.
        let range = compute_page_range(current, total, max_visible);
        if total >= max_visible {
            prop_assert_eq!(range.pages.len() as u32, max_visible);
        } else {
            prop_assert_eq!(range.pages.len() as u32, total);
        }
    }

    #[test]
    fn prop_zero_total_is_the_empty_plan(
        current in 0u32..10,
        max_visible in 0u32..10,
    ) {
        let range = compute_page_range(current, 0, max_visible);
        prop_assert!(range.pages.is_empty());
        prop_assert!(!range.show_first_page);
        prop_assert!(!range.show_last_page);
        prop_assert!(!range.show_leading_ellipsis);
        prop_assert!(!range.show_trailing_ellipsis);
    }
}
