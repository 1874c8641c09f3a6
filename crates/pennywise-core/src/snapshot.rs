//! Transaction snapshots
//!
//! A snapshot is a JSON array of transactions owned by the caller. Loading
//! checks shape only; optional fields that are missing stay absent.
//! `upsert` and `remove` edit a caller-owned collection; the engine itself
//! never holds one.

use std::fs;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;
use crate::models::Transaction;

/// Read a snapshot file
pub fn load(path: &Path) -> Result<Vec<Transaction>> {
    let content = fs::read_to_string(path)?;
    let transactions: Vec<Transaction> = serde_json::from_str(&content)?;
    tracing::debug!(
        path = %path.display(),
        count = transactions.len(),
        "Loaded transaction snapshot"
    );
    Ok(transactions)
}

/// Read a snapshot file, treating a missing file as an empty collection
pub fn load_or_empty(path: &Path) -> Result<Vec<Transaction>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Snapshot not found, starting empty");
        return Ok(Vec::new());
    }
    load(path)
}

/// Write a snapshot file (pretty JSON)
///
/// The new content is staged next to `path` and renamed over it, so a failed
/// write leaves the previous snapshot in place.
pub fn save(path: &Path, transactions: &[Transaction]) -> Result<()> {
    write_atomic(path, |file| {
        serde_json::to_writer_pretty(file, transactions)?;
        Ok(())
    })?;
    tracing::debug!(
        path = %path.display(),
        count = transactions.len(),
        "Saved transaction snapshot"
    );
    Ok(())
}

fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    write(&mut staged)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Replace the record with the same id in place, or append it
///
/// Returns true if an existing record was replaced.
pub fn upsert(transactions: &mut Vec<Transaction>, tx: Transaction) -> bool {
    match transactions.iter_mut().find(|t| t.id == tx.id) {
        Some(existing) => {
            *existing = tx;
            true
        }
        None => {
            transactions.push(tx);
            false
        }
    }
}

/// Remove a record by id
pub fn remove(transactions: &mut Vec<Transaction>, id: &str) -> Option<Transaction> {
    let pos = transactions.iter().position(|t| t.id == id)?;
    Some(transactions.remove(pos))
}
