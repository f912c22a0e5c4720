// Id generation for new bang entries

use super::{BangId, BangTable};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh entry ids
///
/// Implementations must never hand out the same id twice within a session.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> BangId;

    /// Never hand out any id already used in `table`
    ///
    /// Called whenever entries arrive from outside the generator (load,
    /// import, reset).
    fn reserve(&self, _table: &BangTable) {}
}

/// Globally unique ids using UUID v4
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> BangId {
        BangId::Text(Uuid::new_v4().to_string())
    }
}

/// Deterministic numeric ids, monotonically increasing
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Start handing out ids at `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Start past every numeric id already present in `table`
    pub fn starting_after(table: &BangTable) -> Self {
        Self::starting_at(highest_numeric(table).saturating_add(1))
    }
}

fn highest_numeric(table: &BangTable) -> u64 {
    table
        .iter()
        .filter_map(|(_, entry)| match entry.id {
            BangId::Numeric(n) => Some(n),
            BangId::Text(_) => None,
        })
        .max()
        .unwrap_or(0)
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> BangId {
        BangId::Numeric(self.next.fetch_add(1, Ordering::SeqCst))
    }

    fn reserve(&self, table: &BangTable) {
        let floor = highest_numeric(table).saturating_add(1);
        self.next.fetch_max(floor, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "id_test.rs"]
mod tests;
