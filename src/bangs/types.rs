// Bang table types - trigger string to redirect rule mapping

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Lowest position a newly added entry is placed after
pub const POS_FLOOR: i64 = 1;

/// Opaque identifier of a bang entry
///
/// Imported tables carry either numeric ids (hand-written files) or text
/// ids (generated ones), so both forms are kept as-is and serialized
/// without a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BangId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for BangId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BangId::Numeric(n) => write!(f, "{}", n),
            BangId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for BangId {
    fn from(value: u64) -> Self {
        BangId::Numeric(value)
    }
}

impl From<String> for BangId {
    fn from(value: String) -> Self {
        BangId::Text(value)
    }
}

impl From<&str> for BangId {
    fn from(value: &str) -> Self {
        BangId::Text(value.to_string())
    }
}

/// A single redirect rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BangEntry {
    /// Unique identifier, fixed at creation
    pub id: BangId,
    /// Target template; `%s` is replaced with the query at search time
    pub url: String,
    /// Display ordering hint
    pub pos: i64,
}

impl BangEntry {
    pub fn new(id: impl Into<BangId>, url: impl Into<String>, pos: i64) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            pos,
        }
    }
}

/// Mapping from trigger string to its entry
///
/// Keys are unique by construction. Map order is only used to make
/// serialized output stable; `pos` is the ordering consumers display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BangTable {
    entries: BTreeMap<String, BangEntry>,
}

impl BangTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, trigger: &str) -> Option<&BangEntry> {
        self.entries.get(trigger)
    }

    pub(crate) fn get_mut(&mut self, trigger: &str) -> Option<&mut BangEntry> {
        self.entries.get_mut(trigger)
    }

    pub fn contains(&self, trigger: &str) -> bool {
        self.entries.contains_key(trigger)
    }

    /// Insert or replace the entry for `trigger`, returning the previous one
    pub fn insert(&mut self, trigger: impl Into<String>, entry: BangEntry) -> Option<BangEntry> {
        self.entries.insert(trigger.into(), entry)
    }

    pub fn remove(&mut self, trigger: &str) -> Option<BangEntry> {
        self.entries.remove(trigger)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, BangEntry> {
        self.entries.iter()
    }

    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Largest `pos` in the table, never below [`POS_FLOOR`]
    pub fn max_pos(&self) -> i64 {
        self.entries
            .values()
            .map(|entry| entry.pos)
            .fold(POS_FLOOR, i64::max)
    }

    /// Entries in display order (by `pos`, ties broken by trigger)
    pub fn sorted_by_pos(&self) -> Vec<(&str, &BangEntry)> {
        let mut rows: Vec<(&str, &BangEntry)> = self
            .entries
            .iter()
            .map(|(trigger, entry)| (trigger.as_str(), entry))
            .collect();
        rows.sort_by(|a, b| a.1.pos.cmp(&b.1.pos).then_with(|| a.0.cmp(b.0)));
        rows
    }
}

impl FromIterator<(String, BangEntry)> for BangTable {
    fn from_iter<T: IntoIterator<Item = (String, BangEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BangTable {
    type Item = (String, BangEntry);
    type IntoIter = btree_map::IntoIter<String, BangEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a BangTable {
    type Item = (&'a String, &'a BangEntry);
    type IntoIter = btree_map::Iter<'a, String, BangEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
