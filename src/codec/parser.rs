// Import file parsing - bytes to a proposed bang table, all or nothing

use crate::bangs::{BangEntry, BangId, BangTable};
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::HashSet;
use std::fmt;

/// Error types for import operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// The file had no content
    #[error("Import file is empty")]
    Empty,
    /// The file is not a valid bang table
    #[error("Invalid bang file: {0}")]
    Malformed(String),
    /// Two entries in the file share an id
    #[error("Invalid bang file: duplicate id {0}")]
    DuplicateId(BangId),
}

/// Turns raw file bytes into a table
///
/// Implementations either return a complete, well-formed table or an error;
/// partially parsed tables are never returned.
pub trait BangParser: Send + Sync {
    fn parse(&self, bytes: &[u8]) -> Result<BangTable, ImportError>;
}

/// Parser for the JSON form written by `export_table`
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonBangParser;

impl BangParser for JsonBangParser {
    fn parse(&self, bytes: &[u8]) -> Result<BangTable, ImportError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ImportError::Empty);
        }

        let StrictTable(table) =
            serde_json::from_slice(bytes).map_err(|e| ImportError::Malformed(e.to_string()))?;

        let mut seen = HashSet::new();
        for (_, entry) in &table {
            if !seen.insert(&entry.id) {
                return Err(ImportError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(table)
    }
}

/// Table that fails to deserialize when a trigger appears twice
struct StrictTable(BangTable);

impl<'de> Deserialize<'de> for StrictTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StrictTableVisitor)
    }
}

struct StrictTableVisitor;

impl<'de> Visitor<'de> for StrictTableVisitor {
    type Value = StrictTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of trigger to bang entry")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut table = BangTable::new();
        while let Some((trigger, entry)) = map.next_entry::<String, BangEntry>()? {
            if table.contains(&trigger) {
                return Err(de::Error::custom(format!("duplicate trigger '{}'", trigger)));
            }
            table.insert(trigger, entry);
        }
        Ok(StrictTable(table))
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
