// Import merge policy

use crate::bangs::BangTable;
use serde::{Deserialize, Serialize};

/// How an imported table is folded into the current one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Right-biased union: imported entries win on trigger collision,
    /// current entries absent from the import are kept
    #[default]
    Combine,
    /// The imported table replaces the current one
    Replace,
}

/// Right-biased union of `current` and `imported` keyed by trigger
pub fn merge_import(current: &BangTable, imported: BangTable) -> BangTable {
    let mut merged = current.clone();
    for (trigger, entry) in imported {
        merged.insert(trigger, entry);
    }
    merged
}

/// Fold `imported` into `current` according to `policy`
pub fn merge_with_policy(
    current: &BangTable,
    imported: BangTable,
    policy: MergePolicy,
) -> BangTable {
    match policy {
        MergePolicy::Combine => merge_import(current, imported),
        MergePolicy::Replace => imported,
    }
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
