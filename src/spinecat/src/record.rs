//! Character base records loaded from the CSV source.
//!
//! The CSV has a header row; recognized columns are `id`, `character`
//! and `costume`. Any other columns are ignored.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Placeholder used when a row has no display name or costume label.
pub const UNKNOWN: &str = "Unknown";

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("character CSV not found at '{0}'")]
    NotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One data row of the character CSV.
///
/// `character` and `costume` are `None` only when the column is absent
/// from the header; an empty cell is kept verbatim. The `id` field
/// additionally treats an empty cell as missing, since a blank id can
/// never locate an asset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterRow {
    id: Option<String>,
    character: Option<String>,
    costume: Option<String>,
}

impl CharacterRow {
    fn from_record(headers: &csv::StringRecord, record: &csv::StringRecord) -> Self {
        let field = |name: &str| -> Option<String> {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| record.get(i))
                .map(str::to_string)
        };

        CharacterRow {
            id: field("id").filter(|v| !v.is_empty()),
            character: field("character"),
            costume: field("costume"),
        }
    }

    /// Character identifier, or `None` when missing or empty.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Display name, defaulting to the placeholder when the column is
    /// absent.
    pub fn character(&self) -> &str {
        self.character.as_deref().unwrap_or(UNKNOWN)
    }

    /// Costume label, defaulting to the placeholder when the column is
    /// absent.
    pub fn costume(&self) -> &str {
        self.costume.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Load all data rows from the character CSV, preserving file order.
///
/// A missing file is the fatal condition of the whole run and gets its
/// own error variant so callers can surface the path.
pub fn load_rows(path: &Path) -> Result<Vec<CharacterRow>, RecordError> {
    if !path.is_file() {
        return Err(RecordError::NotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(CharacterRow::from_record(&headers, &record));
    }

    Ok(rows)
}
