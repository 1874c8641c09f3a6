//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Pennywise - Track and search family spending
#[derive(Parser)]
#[command(name = "pennywise")]
#[command(about = "Family finance tracker: search, filter and budget reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (categories and budget limits)
    ///
    /// Defaults to $PENNYWISE_CONFIG, then ~/.config/pennywise/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Transaction snapshot (JSON array)
    ///
    /// Defaults to `data_file` from settings, then ./transactions.json.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by every reporting command
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free-text search (description, category, store, item names)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Only this category (exact match)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Named period: this-month, last-month, this-year, last-30-days,
    /// last-90-days, last-12-months, all (--from/--to replace its start/end)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Minimum amount, inclusive (e.g. 12.50)
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Maximum amount, inclusive (e.g. 100)
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List transactions matching a search
    Search {
        /// Search text (same as --text)
        query: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Totals by category with budget progress
    Summary {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Totals by month or week
    Trends {
        #[command(flatten)]
        filters: FilterArgs,

        /// Granularity: monthly, weekly
        #[arg(short, long, default_value = "monthly")]
        granularity: String,
    },

    /// Stores with the highest totals
    Stores {
        #[command(flatten)]
        filters: FilterArgs,

        /// Number of stores to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Export matching transactions to CSV
    Export {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show configured categories and limits
    Categories,

    /// Add a transaction from a parsed receipt (JSON from the scanning service)
    Receipt {
        /// Parsed receipt JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Category for the new transaction
        #[arg(short, long)]
        category: String,

        /// Transaction id (generated if omitted; an existing id is replaced)
        #[arg(long)]
        id: Option<String>,
    },

    /// Remove a transaction by id
    Remove {
        /// Transaction id
        id: String,
    },
}
