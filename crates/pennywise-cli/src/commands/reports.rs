//! Report command implementations

use anyhow::Result;
use pennywise_core::{
    filter_iter, summarize, top_stores, totals_by_period, BudgetStatus, CategoryLimits,
    Granularity, Query, Settings, Transaction,
};

use super::{format_amount, progress_bar, truncate};

const BAR_WIDTH: usize = 20;

fn status_color(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Safe => "\x1b[32m",
        BudgetStatus::Warning => "\x1b[33m",
        BudgetStatus::Danger => "\x1b[31m",
    }
}

pub fn cmd_summary(
    transactions: &[Transaction],
    query: &Query,
    limits: &CategoryLimits,
    json: bool,
) -> Result<()> {
    let summary = summarize(filter_iter(transactions, query), limits);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!("📊 Spending Summary");
    println!("   ─────────────────────────────────────────────────────────────");

    if summary.categories.is_empty() {
        println!("   No spending found.");
        return Ok(());
    }

    println!(
        "   Total: {} ({} transactions)",
        format_amount(summary.overall_total),
        summary.transaction_count
    );
    println!();
    println!(
        "   {:16} │ {:>10} │ {:>10} │ {:20} │ {:>4}",
        "Category", "Spent", "Limit", "", "%"
    );
    println!("   ─────────────────┼────────────┼────────────┼──────────────────────┼──────");

    for cat in &summary.categories {
        match (cat.limit, cat.percentage, cat.status) {
            (Some(limit), Some(pct), Some(status)) => {
                println!(
                    "   {:16} │ {:>10} │ {:>10} │ {}{}\x1b[0m │ {:>3.0}%",
                    truncate(&cat.category, 16),
                    format_amount(cat.total),
                    format_amount(limit),
                    status_color(status),
                    progress_bar(pct, BAR_WIDTH),
                    pct
                );
            }
            _ => {
                println!(
                    "   {:16} │ {:>10} │ {:>10} │ {:20} │",
                    truncate(&cat.category, 16),
                    format_amount(cat.total),
                    "-",
                    ""
                );
            }
        }
    }

    let over: Vec<_> = summary
        .categories
        .iter()
        .filter(|c| c.status == Some(BudgetStatus::Danger))
        .map(|c| c.category.as_str())
        .collect();
    if !over.is_empty() {
        println!();
        println!("   ⚠ At or over budget: {}", over.join(", "));
    }

    Ok(())
}

pub fn cmd_trends(transactions: &[Transaction], query: &Query, granularity: Granularity) -> Result<()> {
    let buckets = totals_by_period(filter_iter(transactions, query), granularity);

    println!();
    println!("📈 Spending Trends ({})", granularity.as_str());
    println!("   ─────────────────────────────────────────────────────────────");

    if buckets.is_empty() {
        println!("   No spending found.");
        return Ok(());
    }

    let max = buckets.iter().map(|b| b.total).max().unwrap_or(0).max(1);

    for bucket in &buckets {
        let pct = bucket.total.max(0) as f64 * 100.0 / max as f64;
        println!(
            "   {:8} │ {:>10} │ {:>4} │ {}",
            bucket.period,
            format_amount(bucket.total),
            bucket.transaction_count,
            progress_bar(pct, 30)
        );
    }

    Ok(())
}

pub fn cmd_stores(transactions: &[Transaction], query: &Query, limit: usize) -> Result<()> {
    let stores = top_stores(filter_iter(transactions, query), limit);

    println!();
    println!("🏪 Top Stores");
    println!("   ─────────────────────────────────────────────────────────────");

    if stores.is_empty() {
        println!("   No store spending found.");
        return Ok(());
    }

    println!("   {:30} │ {:>10} │ {:>5}", "Store", "Total", "Count");
    println!("   ───────────────────────────────┼────────────┼───────");
    for store in &stores {
        println!(
            "   {:30} │ {:>10} │ {:>5}",
            truncate(&store.store_name, 30),
            format_amount(store.total),
            store.transaction_count
        );
    }

    Ok(())
}

pub fn cmd_categories(settings: &Settings) -> Result<()> {
    println!();
    println!("🏷  Categories");
    println!("   ─────────────────────────────────────────────────────────────");

    for category in &settings.categories {
        match settings.limit_for(category) {
            Some(limit) => println!("   {:20} limit {}", category, format_amount(limit)),
            None => println!("   {}", category),
        }
    }

    Ok(())
}
