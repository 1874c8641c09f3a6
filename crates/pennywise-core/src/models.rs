//! Domain models for Pennywise
//!
//! Amounts are signed integers in minor currency units (cents). The sign
//! convention is the caller's: the bundled tools record expenses as positive
//! amounts and refunds/income as negative ones.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Budget limits per category, in minor units
pub type CategoryLimits = BTreeMap<String, i64>;

/// A single recorded financial event
///
/// Records are never mutated in place. The `with_*` methods consume a record
/// and return the edited copy, which keeps the same `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    pub amount: i64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LineItem>,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: i64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            category: category.into(),
            store_name: None,
            amount,
            date,
            items: Vec::new(),
        }
    }

    /// Set the store name
    pub fn store(mut self, name: impl Into<String>) -> Self {
        self.store_name = Some(name.into());
        self
    }

    /// Append a line item
    pub fn item(mut self, name: impl Into<String>, price: i64) -> Self {
        self.items.push(LineItem {
            name: name.into(),
            price,
        });
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sum of line item prices (0 when there are no items), saturating at the `i64` bounds
    pub fn items_total(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.price))
    }
}

/// A line on a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    #[serde(default)]
    pub price: i64,
}

/// Inclusive range where either end may be open
///
/// With both ends set this is `[start, end]`. A range whose start is past its
/// end contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub start: Option<T>,
    pub end: Option<T>,
}

pub type DateRange = Bounds<NaiveDate>;
pub type AmountRange = Bounds<i64>;

impl<T> Bounds<T> {
    pub fn new(start: T, end: T) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Everything at or after `start`
    pub fn at_least(start: T) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Everything at or before `end`
    pub fn at_most(end: T) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    pub fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl<T: PartialOrd> Bounds<T> {
    pub fn contains(&self, value: &T) -> bool {
        match (&self.start, &self.end) {
            (None, None) => true,
            (Some(s), None) => value >= s,
            (None, Some(e)) => value <= e,
            (Some(s), Some(e)) => value >= s && value <= e,
        }
    }
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

// ========== Report Models ==========

/// Progress display status derived from a percentage of budget used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Safe,
    Warning,
    Danger,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Totals for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: i64,
    pub transaction_count: usize,
    /// Configured limit, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Percentage of the limit used, clamped to [0, 100]; only set when a limit is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BudgetStatus>,
}

/// Aggregated view of a (filtered) transaction set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Categories in first-seen order, then limit-only categories
    pub categories: Vec<CategoryTotal>,
    pub overall_total: i64,
    pub transaction_count: usize,
}

impl SummaryResult {
    /// Look up a category's totals by name
    pub fn category(&self, name: &str) -> Option<&CategoryTotal> {
        self.categories.iter().find(|c| c.category == name)
    }

    /// True when no transactions were aggregated
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}

/// Report time granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Monthly,
    Weekly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
        }
    }
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            _ => Err(format!(
                "Unknown granularity: {} (valid: monthly, weekly)",
                s
            )),
        }
    }
}

/// A single bucket in a totals-by-period report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotal {
    /// `YYYY-MM` for monthly buckets, `YYYY-Www` (ISO week) for weekly ones
    pub period: String,
    pub total: i64,
    pub transaction_count: usize,
}

/// Spending at one store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreTotal {
    pub store_name: String,
    pub total: i64,
    pub transaction_count: usize,
}
