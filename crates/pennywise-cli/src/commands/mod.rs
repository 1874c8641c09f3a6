//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `receipts` - Add a transaction from a parsed receipt
//! - `reports` - Summary, trends, stores and categories
//! - `transactions` - Search, export and remove
//!
//! Shared helpers (settings, snapshot loading, filter flags, amount
//! formatting) live here.

pub mod receipts;
pub mod reports;
pub mod transactions;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pennywise_core::{snapshot, AmountRange, DateRange, Period, Query, Settings, Transaction};

use crate::cli::FilterArgs;

// Re-export command functions for main.rs
pub use receipts::*;
pub use reports::*;
pub use transactions::*;

const DEFAULT_DATA_FILE: &str = "transactions.json";

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Parse a decimal amount ("12.50", "-3", "0.5") into minor units
pub fn parse_amount(input: &str) -> Result<i64> {
    let s = input.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
    let valid = !whole.is_empty()
        && whole.chars().all(|c| c.is_ascii_digit())
        && frac.len() <= 2
        && frac.chars().all(|c| c.is_ascii_digit());
    if !valid {
        anyhow::bail!("Invalid amount: {} (use e.g. 12.50)", input);
    }

    let whole: i64 = whole
        .parse()
        .with_context(|| format!("Amount out of range: {}", input))?;
    let frac: i64 = format!("{:0<2}", frac).parse().unwrap_or(0);
    let cents = whole
        .checked_mul(100)
        .and_then(|w| w.checked_add(frac))
        .with_context(|| format!("Amount out of range: {}", input))?;

    Ok(if negative { -cents } else { cents })
}

/// Format minor units as a decimal string
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Text progress bar for a 0-100 percentage
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled.min(width)))
}

pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    Settings::load(path).context("Failed to load settings")
}

/// `--data` wins, then the settings' `data_file`, then ./transactions.json
pub fn resolve_data_path(explicit: Option<&Path>, settings: &Settings) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| settings.data_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    snapshot::load_or_empty(path)
        .with_context(|| format!("Failed to read transactions from {}", path.display()))
}

fn parse_date(value: &str, flag: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid {} date format (use YYYY-MM-DD)", flag))
}

/// Turn filter flags into a query
///
/// Explicit `--from`/`--to` replace the matching end of `--period`.
pub fn build_query(filters: &FilterArgs, today: NaiveDate) -> Result<Query> {
    let period_range = filters
        .period
        .as_deref()
        .map(|p| p.parse::<Period>().map_err(|e| anyhow::anyhow!(e)))
        .transpose()?
        .map(|p| p.resolve(today));

    let from = filters
        .from
        .as_deref()
        .map(|d| parse_date(d, "--from"))
        .transpose()?;
    let to = filters
        .to
        .as_deref()
        .map(|d| parse_date(d, "--to"))
        .transpose()?;

    let date_range = match (period_range, from, to) {
        (None, None, None) => None,
        (period, from, to) => {
            let base = period.unwrap_or_default();
            Some(DateRange {
                start: from.or(base.start),
                end: to.or(base.end),
            })
        }
    };

    let min = filters.min.as_deref().map(parse_amount).transpose()?;
    let max = filters.max.as_deref().map(parse_amount).transpose()?;
    let amount_range = match (min, max) {
        (None, None) => None,
        (start, end) => Some(AmountRange { start, end }),
    };

    let mut query = Query::new()
        .category(filters.category.clone())
        .date_range(date_range)
        .amount_range(amount_range);
    if let Some(text) = &filters.text {
        query = query.text(text.clone());
    }

    tracing::debug!(?query, "Built query");
    Ok(query)
}
