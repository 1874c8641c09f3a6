//! Transaction filter: free-text search plus structural predicates
//!
//! `Query` is built per search action with builder methods. Filtering is a
//! stable, order-preserving pass over the caller's collection; all active
//! predicates are ANDed and an empty result is just an empty vector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::matcher::TextMatcher;
use crate::models::{AmountRange, DateRange, Transaction};

/// The active search/filter criteria
///
/// Ranges are not validated: a range whose start is past its end simply
/// matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub amount_range: Option<AmountRange>,
}

impl Query {
    /// Create an empty query (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set category filter (exact match)
    pub fn category(mut self, category: Option<impl Into<String>>) -> Self {
        self.category = category.map(Into::into);
        self
    }

    /// Set date range filter (inclusive)
    pub fn date_range(mut self, range: Option<DateRange>) -> Self {
        self.date_range = range;
        self
    }

    /// Shorthand for a closed `[from, to]` date range
    pub fn between(self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_range(Some(DateRange::new(from, to)))
    }

    /// Set amount range filter (inclusive, minor units)
    pub fn amount_range(mut self, range: Option<AmountRange>) -> Self {
        self.amount_range = range;
        self
    }

    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
            && self.category.is_none()
            && self.date_range.is_none()
            && self.amount_range.is_none()
    }

    /// Compile into a reusable predicate
    pub fn compile(&self) -> CompiledQuery<'_> {
        CompiledQuery {
            matcher: TextMatcher::new(&self.text),
            query: self,
        }
    }
}

/// A query with its text already normalized
pub struct CompiledQuery<'query> {
    matcher: TextMatcher,
    query: &'query Query,
}

impl CompiledQuery<'_> {
    pub fn matches(&self, tx: &Transaction) -> bool {
        // Text first, then structural predicates
        if !self.matcher.matches(tx) {
            return false;
        }

        if let Some(category) = self.query.category.as_deref() {
            if tx.category != category {
                return false;
            }
        }

        if let Some(range) = &self.query.date_range {
            if !range.contains(&tx.date) {
                return false;
            }
        }

        if let Some(range) = &self.query.amount_range {
            if !range.contains(&tx.amount) {
                return false;
            }
        }

        true
    }
}

/// Lazily yield matching transactions in input order
pub fn filter_iter<'a>(
    transactions: &'a [Transaction],
    query: &'a Query,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    let compiled = query.compile();
    transactions.iter().filter(move |tx| compiled.matches(tx))
}

/// Return the matching transactions in input order
pub fn filter(transactions: &[Transaction], query: &Query) -> Vec<Transaction> {
    let result: Vec<Transaction> = filter_iter(transactions, query).cloned().collect();
    tracing::debug!(
        input = transactions.len(),
        matched = result.len(),
        "Filtered transactions"
    );
    result
}

/// Count matching transactions
pub fn count(transactions: &[Transaction], query: &Query) -> usize {
    filter_iter(transactions, query).count()
}
