//! JSON record collections on disk.
//!
//! A collection file is a JSON array of records in the same shape as the
//! built-in seed data:
//!
//! ```text
//! [
//!   { "id": "...", "title": "...", "excerpt": "...", "date": "2024-01-15",
//!     "readTime": "8 min read", "tags": ["..."], "published": true }
//! ]
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::RecordStore;
use crate::error::{FolioError, Result};
use crate::model::Record;

/// Reads a JSON array of records.
pub fn load_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let content = fs::read_to_string(path).map_err(FolioError::Io)?;
    let records: Vec<R> = serde_json::from_str(&content).map_err(FolioError::Serialization)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Reads a JSON array of records into a validated store.
pub fn load_store<R: DeserializeOwned + Record>(path: &Path) -> Result<RecordStore<R>> {
    RecordStore::new(load_records(path)?)
}

/// Writes records as a pretty-printed JSON array.
pub fn save_records<R: Serialize>(path: &Path, records: &[R]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(FolioError::Io)?;
        }
    }
    let content = serde_json::to_string_pretty(records).map_err(FolioError::Serialization)?;
    fs::write(path, content).map_err(FolioError::Io)?;
    Ok(())
}
