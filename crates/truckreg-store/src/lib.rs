//! CSV-backed tables for user accounts and truck registrations
//!
//! Each store keeps the whole table in memory as a keyed map and rewrites
//! the backing file in full on every mutation. The file itself is replaced
//! atomically (temp file in the same directory, then rename), so a failed
//! write leaves the previous table intact.

pub mod trucks;
pub mod users;

pub use trucks::TruckStore;
pub use users::UserStore;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use truckreg_types::StoreError;

/// Raised when a backing table had to be created or rebuilt during load.
///
/// Not an error: the store recovers by writing a fresh header-only table.
/// Callers surface the notice as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableNotice {
    /// The file did not exist and was created with headers only
    Created,
    /// The file existed but was unusable and was replaced with an empty table
    Rebuilt(String),
}

impl std::fmt::Display for TableNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableNotice::Created => write!(f, "table file created"),
            TableNotice::Rebuilt(reason) => write!(f, "table rebuilt: {}", reason),
        }
    }
}

/// Write a header-only table to `path`
pub(crate) fn write_empty_table(path: &Path, headers: &[&str]) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| StoreError::Replace(e.to_string()))?;
    replace_file(path, &bytes)
}

/// Serialize `rows` (headers come from the serde renames) and replace the
/// table file in one shot
pub(crate) fn replace_table<T: Serialize>(
    path: &Path,
    headers: &[&str],
    rows: &[&T],
) -> Result<(), StoreError> {
    if rows.is_empty() {
        return write_empty_table(path, headers);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| StoreError::Replace(e.to_string()))?;
    replace_file(path, &bytes)
}

fn replace_file(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
    tmp.write_all(contents)?;
    tmp.persist(path)
        .map_err(|e| StoreError::Replace(e.to_string()))?;
    Ok(())
}
