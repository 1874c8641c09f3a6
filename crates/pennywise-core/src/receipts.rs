//! Receipt scan boundary
//!
//! Scanning itself happens in an external service. This module defines what
//! that service hands back (`ParsedReceipt`), the trait a scanner backend
//! implements, and how a parsed receipt becomes a well-formed `Transaction`.
//! Filter and aggregate only ever see the resulting record.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{LineItem, Transaction};

/// Image types a scanner accepts
pub const SUPPORTED_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/heic"];

/// Description used when a receipt carries no store name
pub const DEFAULT_RECEIPT_DESCRIPTION: &str = "Receipt";

/// One extracted receipt line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReceiptItem {
    pub name: String,
    #[serde(default)]
    pub price: i64,
}

/// Structured output of the receipt scanning service (amounts in minor units)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReceipt {
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub items: Vec<ParsedReceiptItem>,
    #[serde(default)]
    pub total: Option<i64>,
}

impl ParsedReceipt {
    /// Receipt total, falling back to the sum of item prices
    pub fn amount(&self) -> i64 {
        self.total
            .unwrap_or_else(|| {
                self.items
                    .iter()
                    .fold(0i64, |acc, i| acc.saturating_add(i.price))
            })
    }

    /// Build a transaction from this receipt
    ///
    /// `fallback_date` is used when the scanner could not read a date.
    pub fn into_transaction(
        self,
        id: impl Into<String>,
        category: impl Into<String>,
        fallback_date: NaiveDate,
    ) -> Transaction {
        let amount = self.amount();
        let store_name = self
            .store_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let description = store_name
            .clone()
            .unwrap_or_else(|| DEFAULT_RECEIPT_DESCRIPTION.to_string());

        Transaction {
            id: id.into(),
            description,
            category: category.into(),
            store_name,
            amount,
            date: self.date.unwrap_or(fallback_date),
            items: self
                .items
                .into_iter()
                .map(|i| LineItem {
                    name: i.name,
                    price: i.price,
                })
                .collect(),
        }
    }
}

/// A receipt scanning backend
///
/// Backends should be Send + Sync to allow use across async tasks.
#[async_trait]
pub trait ReceiptScanner: Send + Sync {
    /// Extract structured line items from an image payload
    async fn scan(&self, image: &[u8], media_type: &str) -> Result<ParsedReceipt>;

    /// Backend name (for logging)
    fn name(&self) -> &str;
}

/// True if `media_type` is an accepted image type (parameters like `; q=0.9` are ignored)
pub fn is_supported_media_type(media_type: &str) -> bool {
    let essence = media_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    SUPPORTED_MEDIA_TYPES.contains(&essence.as_str())
}

/// Validate the payload, scan it, and build a transaction
pub async fn scan_receipt(
    scanner: &dyn ReceiptScanner,
    image: &[u8],
    media_type: &str,
    id: &str,
    category: &str,
    fallback_date: NaiveDate,
) -> Result<Transaction> {
    if !is_supported_media_type(media_type) {
        return Err(Error::UnsupportedMediaType(media_type.to_string()));
    }
    if image.is_empty() {
        return Err(Error::InvalidData("Receipt image is empty".to_string()));
    }

    tracing::debug!(
        scanner = scanner.name(),
        bytes = image.len(),
        media_type,
        "Scanning receipt"
    );

    let receipt = scanner.scan(image, media_type).await.map_err(|e| {
        tracing::warn!(scanner = scanner.name(), error = %e, "Receipt scan failed");
        e
    })?;

    tracing::debug!(
        items = receipt.items.len(),
        has_total = receipt.total.is_some(),
        "Receipt parsed"
    );

    Ok(receipt.into_transaction(id, category, fallback_date))
}

/// Mock scanner for tests
///
/// Returns a preconfigured receipt, or fails with a preconfigured message.
#[derive(Clone, Default)]
pub struct MockScanner {
    receipt: Option<ParsedReceipt>,
    failure: Option<String>,
}

impl MockScanner {
    /// Scanner that always returns `receipt`
    pub fn new(receipt: ParsedReceipt) -> Self {
        Self {
            receipt: Some(receipt),
            failure: None,
        }
    }

    /// Scanner that always fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            receipt: None,
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl ReceiptScanner for MockScanner {
    async fn scan(&self, _image: &[u8], _media_type: &str) -> Result<ParsedReceipt> {
        if let Some(ref message) = self.failure {
            return Err(Error::ReceiptScan(message.clone()));
        }
        Ok(self.receipt.clone().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
