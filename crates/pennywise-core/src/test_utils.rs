//! Test utilities for pennywise-core
//!
//! Shared fixtures used by unit tests here and by the CLI's tests (via the
//! `test-utils` feature).

use chrono::NaiveDate;

use crate::models::{CategoryLimits, Transaction};
use crate::receipts::{ParsedReceipt, ParsedReceiptItem};

/// Build a date, panicking on invalid input (tests only)
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Build a limits map from pairs
pub fn limits(pairs: &[(&str, i64)]) -> CategoryLimits {
    pairs
        .iter()
        .map(|(category, limit)| (category.to_string(), *limit))
        .collect()
}

/// A grocery run with line items
pub fn groceries() -> Transaction {
    Transaction::new("tx-1", "Weekly groceries", "Food", 6480, date(2024, 1, 5))
        .store("Fresh Mart")
        .item("Milk 2%", 349)
        .item("Bread", 299)
}

/// Five transactions across three months and three categories
///
/// | id   | date       | category  | amount | store      |
/// |------|------------|-----------|--------|------------|
/// | tx-1 | 2024-01-05 | Food      | 6480   | Fresh Mart |
/// | tx-2 | 2024-01-10 | Transport | 2000   |            |
/// | tx-3 | 2024-01-28 | Utilities | 8950   | City Power |
/// | tx-4 | 2024-02-14 | Food      | 4500   | Pizza Mart |
/// | tx-5 | 2024-03-01 | Transport | 5500   | Shell      |
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        groceries(),
        Transaction::new("tx-2", "Train ticket", "Transport", 2000, date(2024, 1, 10)),
        Transaction::new("tx-3", "Electric bill", "Utilities", 8950, date(2024, 1, 28))
            .store("City Power"),
        Transaction::new("tx-4", "Dinner out", "Food", 4500, date(2024, 2, 14))
            .store("Pizza Mart")
            .item("Large pizza", 3200)
            .item("Soda", 400),
        Transaction::new("tx-5", "Fuel", "Transport", 5500, date(2024, 3, 1)).store("Shell"),
    ]
}

/// A parsed receipt as a scanning service would return it
pub fn sample_receipt() -> ParsedReceipt {
    ParsedReceipt {
        store_name: Some("Fresh Mart".to_string()),
        date: Some(date(2024, 5, 30)),
        items: vec![
            ParsedReceiptItem {
                name: "Milk 2%".to_string(),
                price: 349,
            },
            ParsedReceiptItem {
                name: "Coffee beans".to_string(),
                price: 950,
            },
        ],
        total: Some(1299),
    }
}
