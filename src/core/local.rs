//! Local roster loader
//!
//! Reads a UTF-8 JSON document shaped `{ "results": [record, ...] }` and
//! returns a bounded prefix of the records.

use std::path::Path;

use serde_json::Value;

use crate::core::character::Character;
use crate::error::{Error, Result};

/// Load at most `limit` records from the local roster file.
///
/// # Errors
/// - `Error::Io` if the file is missing or unreadable.
/// - `Error::Protocol` if the document is not valid JSON.
/// - `Error::Schema` if the top-level `results` array is absent.
///
/// A file with fewer than `limit` results is not an error; whatever exists
/// is returned in original order.
pub fn load_local(path: &Path, limit: usize) -> Result<Vec<Character>> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value = serde_json::from_str(&text).map_err(|e| Error::Protocol {
        context: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let results = document
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::schema(path.display().to_string(), "results"))?;

    results
        .iter()
        .take(limit)
        .map(|entry| {
            serde_json::from_value(entry.clone()).map_err(|e| Error::Protocol {
                context: path.display().to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
