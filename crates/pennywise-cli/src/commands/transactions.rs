//! Transaction command implementations

use std::path::Path;

use anyhow::{Context, Result};
use pennywise_core::{filter, filter_iter, snapshot, Query, Transaction};

use super::{format_amount, truncate};

pub fn cmd_search(transactions: &[Transaction], query: &Query, json: bool) -> Result<()> {
    let matched = filter(transactions, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    if matched.is_empty() {
        println!("No matching transactions.");
        return Ok(());
    }

    println!();
    println!("🔎 Transactions ({} of {})", matched.len(), transactions.len());
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in &matched {
        println!(
            "   {} │ {:>10} │ {:12} │ {}",
            tx.date,
            format_amount(tx.amount),
            truncate(&tx.category, 12),
            truncate(&tx.description, 36)
        );
        for item in &tx.items {
            println!(
                "   \x1b[2m{:10} │ {:>10} │ {:12} │   {}\x1b[0m",
                "",
                format_amount(item.price),
                "",
                truncate(&item.name, 34)
            );
        }
    }

    Ok(())
}

/// Write matching transactions to CSV, returning how many were written
pub fn cmd_export(transactions: &[Transaction], query: &Query, output: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    wtr.write_record([
        "id",
        "date",
        "description",
        "category",
        "store",
        "amount",
        "items",
    ])?;

    let mut count = 0;
    for tx in filter_iter(transactions, query) {
        let items = tx
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let date = tx.date.to_string();
        let amount = format_amount(tx.amount);
        wtr.write_record([
            tx.id.as_str(),
            date.as_str(),
            tx.description.as_str(),
            tx.category.as_str(),
            tx.store_name.as_deref().unwrap_or(""),
            amount.as_str(),
            items.as_str(),
        ])?;
        count += 1;
    }

    wtr.flush()?;
    tracing::info!(count, path = %output.display(), "Exported transactions");
    Ok(count)
}

pub fn cmd_remove(data_path: &Path, id: &str) -> Result<()> {
    let mut transactions = snapshot::load(data_path)
        .with_context(|| format!("Failed to read transactions from {}", data_path.display()))?;

    let Some(removed) = snapshot::remove(&mut transactions, id) else {
        anyhow::bail!("Transaction {} not found", id);
    };

    snapshot::save(data_path, &transactions)
        .with_context(|| format!("Failed to write {}", data_path.display()))?;

    println!(
        "✓ Removed {} ({}, {})",
        removed.id,
        removed.description,
        format_amount(removed.amount)
    );
    Ok(())
}
