// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the stayfind CLI.
//!
//! Colored kind badges when stdout is a real terminal, plain text when piped.
//! Respects `NO_COLOR` for the purists. Nothing here is load-bearing - the
//! `--json` flag bypasses this module entirely.

use stayfind::{PageRange, Suggestion, SuggestionKind};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const MAGENTA: &str = "\x1b[35m";

/// Color output only for interactive terminals that haven't opted out.
fn use_color() -> bool {
    atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none()
}

/// Badge color per suggestion kind.
fn kind_color(kind: SuggestionKind) -> &'static str {
    match kind {
        SuggestionKind::City => CYAN,
        SuggestionKind::Property => GREEN,
        SuggestionKind::StayType => MAGENTA,
    }
}

/// Print the suggestion list the way the dropdown would show it.
pub fn print_suggestions(suggestions: &[Suggestion], query: &str) {
    if suggestions.is_empty() {
        println!("no matches for \"{}\"", query);
        return;
    }

    let color = use_color();
    for suggestion in suggestions {
        let badge = format!("[{}]", suggestion.kind.as_str());
        let description = suggestion.description.as_deref().unwrap_or("");
        if color {
            println!(
                "{}{:<12}{} {}{}{}  {}{}{}",
                kind_color(suggestion.kind),
                badge,
                RESET,
                BOLD,
                suggestion.name,
                RESET,
                DIM,
                description,
                RESET
            );
        } else {
            println!("{:<12} {}  {}", badge, suggestion.name, description);
        }
    }
}

/// Print the pagination strip: `1 .. 4 [5] 6 .. 20`.
///
/// `current` and `total` reproduce what the strip renders around the window;
/// the bracketed entry is the current page.
pub fn print_page_range(range: &PageRange, current: u32, total: u32) {
    if range.pages.is_empty() {
        println!("(no pages)");
        return;
    }

    let color = use_color();
    let mut parts: Vec<String> = Vec::new();

    if range.show_first_page {
        parts.push("1".to_string());
    }
    if range.show_leading_ellipsis {
        parts.push("..".to_string());
    }
    for &page in &range.pages {
        if page == current && color {
            parts.push(format!("{}[{}]{}", BOLD, page, RESET));
        } else if page == current {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    if range.show_trailing_ellipsis {
        parts.push("..".to_string());
    }
    if range.show_last_page {
        parts.push(total.to_string());
    }

    println!("{}", parts.join(" "));
}
