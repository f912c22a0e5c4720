//! Import/export of bang tables.
//!
//! The portable form is a JSON object keyed by trigger, each value holding
//! `{id, url, pos}`. Exported bytes re-import to an identical table.
//! Parsing is delegated to a [`BangParser`]; merging is isolated in
//! [`merge_with_policy`] so the policy can change without touching the editor.

mod merge;
mod parser;

pub use merge::{merge_import, merge_with_policy, MergePolicy};
pub use parser::{BangParser, ImportError, JsonBangParser};

use crate::bangs::BangTable;

/// Default name offered for exported files
pub const DEFAULT_EXPORT_FILE_NAME: &str = "custombangs.json";

/// Media type of exported files
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Error types for export operations
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize bangs: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A serialized table ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Serialize the full table to its portable form
pub fn export_table(table: &BangTable) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(table)?)
}

/// Serialize the table into a named export file
pub fn export_file(table: &BangTable, file_name: &str) -> Result<ExportFile, ExportError> {
    let bytes = export_table(table)?;
    crate::debug!("Exported {} bangs ({} bytes)", table.len(), bytes.len());
    Ok(ExportFile {
        file_name: file_name.to_string(),
        mime_type: EXPORT_MIME_TYPE,
        bytes,
    })
}

/// Parse raw file bytes into a table using `parser`
pub fn import_table<P: BangParser + ?Sized>(
    raw: &[u8],
    parser: &P,
) -> Result<BangTable, ImportError> {
    match parser.parse(raw) {
        Ok(table) => {
            crate::debug!("Parsed {} bangs from import file", table.len());
            Ok(table)
        }
        Err(e) => {
            crate::warn!("Rejected import file: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
