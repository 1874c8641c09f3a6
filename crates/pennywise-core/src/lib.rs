//! Pennywise Core Library
//!
//! The search/filter/aggregation engine behind the Pennywise family finance
//! tracker:
//! - Text matching over descriptions, categories, stores and line items
//! - Order-preserving transaction filtering (text, category, date, amount)
//! - Category totals with budget percentages and status, period and store totals
//! - Named reporting periods
//! - Collaborator boundaries: transaction snapshots, receipt scanning, settings
//!
//! Filtering and aggregation are pure functions of the caller's collection;
//! nothing here holds shared state.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod models;
pub mod period;
pub mod receipts;
pub mod settings;
pub mod snapshot;

/// Shared test fixtures
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use aggregate::{classify, percentage_of, summarize, top_stores, totals_by_period};
pub use error::{Error, Result};
pub use filter::{filter, filter_iter, Query};
pub use matcher::{matches, TextMatcher};
pub use models::{
    AmountRange, Bounds, BudgetStatus, CategoryLimits, CategoryTotal, DateRange, Granularity,
    LineItem, PeriodTotal, StoreTotal, SummaryResult, Transaction,
};
pub use period::Period;
pub use receipts::{MockScanner, ParsedReceipt, ParsedReceiptItem, ReceiptScanner};
pub use settings::Settings;
