//! Aggregation over a (filtered) transaction set
//!
//! Everything here is a pure function of its inputs. Output order is
//! deterministic because it drives display order downstream:
//! - categories come out in first-seen order, then limit-only categories in
//!   the limit map's key order
//! - period buckets are chronological
//! - stores are sorted by total (descending), ties by name
//!
//! Totals saturate at the `i64` bounds instead of overflowing.

use std::collections::HashMap;

use chrono::Datelike;

use crate::models::{
    BudgetStatus, CategoryLimits, CategoryTotal, Granularity, PeriodTotal, StoreTotal,
    SummaryResult, Transaction,
};

/// Percentage at which a budget moves from safe to warning (not yet configurable)
pub const WARNING_THRESHOLD: f64 = 70.0;

/// Percentage at which a budget is considered exhausted
pub const DANGER_THRESHOLD: f64 = 100.0;

/// Classify a percentage of budget used
pub fn classify(percentage: f64) -> BudgetStatus {
    if percentage >= DANGER_THRESHOLD {
        BudgetStatus::Danger
    } else if percentage >= WARNING_THRESHOLD {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Safe
    }
}

/// Percentage of `limit` used by `total`, clamped to [0, 100]
///
/// A non-positive limit yields 0 instead of dividing by zero.
pub fn percentage_of(total: i64, limit: i64) -> f64 {
    if limit <= 0 {
        return 0.0;
    }
    let pct = total as f64 * 100.0 / limit as f64;
    pct.clamp(0.0, DANGER_THRESHOLD)
}

/// Summarize transactions by category against optional budget limits
pub fn summarize<'a, I>(transactions: I, limits: &CategoryLimits) -> SummaryResult
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut categories: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut overall_total = 0i64;
    let mut transaction_count = 0usize;

    for tx in transactions {
        let slot = *index.entry(tx.category.as_str()).or_insert_with(|| {
            categories.push(CategoryTotal {
                category: tx.category.clone(),
                total: 0,
                transaction_count: 0,
                limit: None,
                percentage: None,
                status: None,
            });
            categories.len() - 1
        });

        let entry = &mut categories[slot];
        entry.total = entry.total.saturating_add(tx.amount);
        entry.transaction_count += 1;
        overall_total = overall_total.saturating_add(tx.amount);
        transaction_count += 1;
    }

    // Limited categories with no transactions still show up, at zero
    for name in limits.keys() {
        if !index.contains_key(name.as_str()) {
            categories.push(CategoryTotal {
                category: name.clone(),
                total: 0,
                transaction_count: 0,
                limit: None,
                percentage: None,
                status: None,
            });
        }
    }

    for entry in &mut categories {
        if let Some(&limit) = limits.get(&entry.category) {
            let pct = percentage_of(entry.total, limit);
            entry.limit = Some(limit);
            entry.percentage = Some(pct);
            entry.status = Some(classify(pct));
        }
    }

    tracing::debug!(
        transactions = transaction_count,
        categories = categories.len(),
        overall_total,
        "Summarized transactions"
    );

    SummaryResult {
        categories,
        overall_total,
        transaction_count,
    }
}

/// Bucket key for a date at the given granularity
pub fn period_key(date: chrono::NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Monthly => format!("{:04}-{:02}", date.year(), date.month()),
        Granularity::Weekly => {
            let week = date.iso_week();
            format!("{:04}-W{:02}", week.year(), week.week())
        }
    }
}

/// Totals per calendar month or ISO week, in chronological order
pub fn totals_by_period<'a, I>(transactions: I, granularity: Granularity) -> Vec<PeriodTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut buckets: HashMap<String, PeriodTotal> = HashMap::new();

    for tx in transactions {
        let key = period_key(tx.date, granularity);
        let bucket = buckets.entry(key.clone()).or_insert_with(|| PeriodTotal {
            period: key,
            total: 0,
            transaction_count: 0,
        });
        bucket.total = bucket.total.saturating_add(tx.amount);
        bucket.transaction_count += 1;
    }

    // Zero-padded keys sort chronologically
    let mut data: Vec<PeriodTotal> = buckets.into_values().collect();
    data.sort_by(|a, b| a.period.cmp(&b.period));
    data
}

/// The `limit` stores with the largest totals
///
/// Transactions without a store name are skipped.
pub fn top_stores<'a, I>(transactions: I, limit: usize) -> Vec<StoreTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut stores: HashMap<&'a str, StoreTotal> = HashMap::new();

    for tx in transactions {
        let Some(name) = tx.store_name.as_deref() else {
            continue;
        };
        let store = stores.entry(name).or_insert_with(|| StoreTotal {
            store_name: name.to_string(),
            total: 0,
            transaction_count: 0,
        });
        store.total = store.total.saturating_add(tx.amount);
        store.transaction_count += 1;
    }

    let mut ranked: Vec<StoreTotal> = stores.into_values().collect();
    ranked.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.store_name.cmp(&b.store_name))
    });
    ranked.truncate(limit);
    ranked
}
