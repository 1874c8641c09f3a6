//! Pennywise CLI - Family finance tracker
//!
//! Usage:
//!   pennywise search milk              Search transactions
//!   pennywise summary --period this-month
//!   pennywise receipt --file r.json --category Food

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let settings = commands::load_settings(cli.config.as_deref())?;
    let data_path = commands::resolve_data_path(cli.data.as_deref(), &settings);
    let today = Utc::now().date_naive();

    match cli.command {
        Commands::Search {
            query,
            mut filters,
            json,
        } => {
            if query.is_some() {
                filters.text = query;
            }
            let transactions = commands::load_transactions(&data_path)?;
            let query = commands::build_query(&filters, today)?;
            commands::cmd_search(&transactions, &query, json)
        }
        Commands::Summary { filters, json } => {
            let transactions = commands::load_transactions(&data_path)?;
            let query = commands::build_query(&filters, today)?;
            commands::cmd_summary(&transactions, &query, &settings.limits, json)
        }
        Commands::Trends {
            filters,
            granularity,
        } => {
            let granularity: pennywise_core::Granularity = granularity
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let transactions = commands::load_transactions(&data_path)?;
            let query = commands::build_query(&filters, today)?;
            commands::cmd_trends(&transactions, &query, granularity)
        }
        Commands::Stores { filters, limit } => {
            let transactions = commands::load_transactions(&data_path)?;
            let query = commands::build_query(&filters, today)?;
            commands::cmd_stores(&transactions, &query, limit)
        }
        Commands::Export { output, filters } => {
            let transactions = commands::load_transactions(&data_path)?;
            let query = commands::build_query(&filters, today)?;
            let count = commands::cmd_export(&transactions, &query, &output)?;
            println!("✓ Exported {} transactions to {}", count, output.display());
            Ok(())
        }
        Commands::Categories => commands::cmd_categories(&settings),
        Commands::Receipt { file, category, id } => {
            let id = id.unwrap_or_else(|| format!("receipt-{}", Utc::now().timestamp_millis()));
            commands::cmd_receipt(&data_path, &file, &category, &id, &settings, today)?;
            Ok(())
        }
        Commands::Remove { id } => commands::cmd_remove(&data_path, &id),
    }
}
