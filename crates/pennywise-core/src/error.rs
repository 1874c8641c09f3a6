//! Error types for Pennywise
//!
//! Filtering and aggregation never fail; these errors only come from the
//! collaborator boundaries (snapshot files, settings, receipt scanning).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Receipt scan error: {0}")]
    ReceiptScan(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
