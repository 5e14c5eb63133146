use clap::Parser;
use std::path::Path;
use std::process;

use stayfind::{compute_page_range, suggest_with_limits, FileCatalog, SuggestionLimits};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest {
            catalog,
            query,
            limit,
            json,
        } => {
            let listings = match FileCatalog::load(Path::new(&catalog)) {
                Ok(loaded) => loaded.into_listings(),
                Err(err) => fail(&err.to_string()),
            };
            let limits = SuggestionLimits {
                total: limit,
                ..SuggestionLimits::default()
            };
            let suggestions = suggest_with_limits(&listings, &query, &limits);
            if json {
                print_json(&suggestions);
            } else {
                display::print_suggestions(&suggestions, &query);
            }
        }
        Commands::Pages {
            current,
            total,
            window,
            json,
        } => {
            let range = compute_page_range(current, total, window);
            if json {
                print_json(&range);
            } else {
                display::print_page_range(&range, current.clamp(1, total.max(1)), total);
            }
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(err) => fail(&format!("failed to serialize output: {}", err)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}
