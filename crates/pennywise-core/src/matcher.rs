//! Free-text matching against a transaction's searchable fields
//!
//! A transaction matches when the (trimmed, lowercased) query is a substring
//! of its description, category, store name, or any line item name. An empty
//! query matches everything.

use crate::models::Transaction;

/// A query normalized once for repeated matching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    /// True when the query is empty (matches everything)
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        self.hit(&tx.description)
            || self.hit(&tx.category)
            || tx.store_name.as_deref().is_some_and(|s| self.hit(s))
            || tx.items.iter().any(|item| self.hit(&item.name))
    }

    fn hit(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.needle)
    }
}

/// Match a single transaction against a raw query string
pub fn matches(tx: &Transaction, query: &str) -> bool {
    TextMatcher::new(query).matches(tx)
}
