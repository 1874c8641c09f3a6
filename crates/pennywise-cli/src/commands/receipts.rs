//! Receipt command implementations
//!
//! The scanning service produces a parsed receipt as JSON; this command turns
//! it into a transaction and stores it in the snapshot.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pennywise_core::{snapshot, ParsedReceipt, Settings, Transaction};

use super::format_amount;

pub fn cmd_receipt(
    data_path: &Path,
    file: &Path,
    category: &str,
    id: &str,
    settings: &Settings,
    today: NaiveDate,
) -> Result<Transaction> {
    if !settings.is_known_category(category) {
        anyhow::bail!(
            "Unknown category: {}. Available: {}",
            category,
            settings.categories.join(", ")
        );
    }

    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read receipt {}", file.display()))?;
    let receipt: ParsedReceipt =
        serde_json::from_str(&content).context("Invalid parsed receipt JSON")?;

    let tx = receipt.into_transaction(id, category, today);
    tracing::info!(
        id = %tx.id,
        items = tx.items.len(),
        amount = tx.amount,
        "Adding receipt transaction"
    );

    let mut transactions = super::load_transactions(data_path)?;
    let replaced = snapshot::upsert(&mut transactions, tx.clone());
    snapshot::save(data_path, &transactions)
        .with_context(|| format!("Failed to write {}", data_path.display()))?;

    println!(
        "✓ {} {} ({}, {} items, {})",
        if replaced { "Updated" } else { "Added" },
        tx.id,
        tx.description,
        tx.items.len(),
        format_amount(tx.amount)
    );
    Ok(tx)
}
