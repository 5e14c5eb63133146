// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the stayfind command-line interface.
//!
//! Two subcommands: `suggest` runs the aggregator against a catalog JSON
//! file (handy for checking what the dropdown will show before a catalog
//! deploy), and `pages` prints the pagination plan for a given page state.
//! Both take `--json` for machine-readable output.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stayfind",
    about = "Search suggestions and pagination planning for the Stayfind site",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate search suggestions from a catalog file
    Suggest {
        /// Path to catalog JSON (properties, cities, stayTypes)
        #[arg(short, long)]
        catalog: String,

        /// Query string (minimum 3 characters)
        query: String,

        /// Global cap on the number of suggestions
        #[arg(short, long, default_value = "6")]
        limit: usize,

        /// Emit JSON instead of the human-readable list
        #[arg(long)]
        json: bool,
    },

    /// Plan the pagination strip for a listing page
    Pages {
        /// Page the user is on (1-based)
        current: u32,

        /// Total number of pages
        total: u32,

        /// Maximum number of page buttons to show
        #[arg(short, long, default_value = "5")]
        window: u32,

        /// Emit JSON instead of the rendered strip
        #[arg(long)]
        json: bool,
    },
}
