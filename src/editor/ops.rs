// Editor operations as pure transformations of EditorState
//
// Every operation either produces a complete new state or an error; the
// input state is never modified, so a failed operation leaves nothing
// half-applied.

use super::EditorState;
use crate::bangs::{BangEntry, BangId, BangTable};
use crate::codec::{merge_with_policy, MergePolicy};

/// A single user-triggered change to the editor state
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Append a placeholder entry after every existing one
    AddEntry {
        id: BangId,
        trigger: String,
        url: String,
    },
    /// Change the trigger of an existing entry
    RenameEntry { from: String, to: String },
    /// Change the url template of an existing entry
    UpdateUrl { trigger: String, url: String },
    /// Change the position hint of an existing entry
    UpdatePos { trigger: String, pos: i64 },
    /// Delete an entry
    RemoveEntry { trigger: String },
    /// Replace the whole table with the default set
    Reset { defaults: BangTable },
    /// Fold an imported table into the current one
    Import {
        imported: BangTable,
        policy: MergePolicy,
    },
    /// The owner durably stored `saved`
    Acknowledge { saved: BangTable },
}

impl Operation {
    /// Short name used in events and logs
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddEntry { .. } => "add",
            Operation::RenameEntry { .. } => "rename",
            Operation::UpdateUrl { .. } => "update_url",
            Operation::UpdatePos { .. } => "update_pos",
            Operation::RemoveEntry { .. } => "remove",
            Operation::Reset { .. } => "reset",
            Operation::Import { .. } => "import",
            Operation::Acknowledge { .. } => "acknowledge",
        }
    }
}

/// Error types for editor mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// Another entry already uses this trigger
    #[error("Bang '{0}' already exists")]
    DuplicateKey(String),
    /// No entry has this trigger
    #[error("Bang '{0}' not found")]
    UnknownKey(String),
    /// The id is already used by another entry
    #[error("Entry with ID {0} already exists")]
    DuplicateId(BangId),
    /// No position is left after the largest existing one
    #[error("No position left after {0}")]
    PositionOverflow(i64),
}

/// Apply `op` to `state`, producing the next state
#[must_use = "this returns a Result that should be handled"]
pub fn apply(state: &EditorState, op: Operation) -> Result<EditorState, EditorError> {
    match op {
        Operation::AddEntry { id, trigger, url } => {
            let (table, _, _) = add_entry(&state.table, id, &trigger, url)?;
            Ok(EditorState { table, dirty: true })
        }
        Operation::RenameEntry { from, to } => {
            let table = rename_entry(&state.table, &from, to)?;
            Ok(edited(state, table))
        }
        Operation::UpdateUrl { trigger, url } => {
            let mut table = state.table.clone();
            let entry = table
                .get_mut(&trigger)
                .ok_or_else(|| EditorError::UnknownKey(trigger.clone()))?;
            entry.url = url;
            Ok(edited(state, table))
        }
        Operation::UpdatePos { trigger, pos } => {
            let mut table = state.table.clone();
            let entry = table
                .get_mut(&trigger)
                .ok_or_else(|| EditorError::UnknownKey(trigger.clone()))?;
            entry.pos = pos;
            Ok(edited(state, table))
        }
        Operation::RemoveEntry { trigger } => {
            let mut table = state.table.clone();
            table
                .remove(&trigger)
                .ok_or(EditorError::UnknownKey(trigger))?;
            Ok(EditorState { table, dirty: true })
        }
        Operation::Reset { defaults } => Ok(EditorState {
            table: defaults,
            dirty: true,
        }),
        Operation::Import { imported, policy } => Ok(EditorState {
            table: merge_with_policy(&state.table, imported, policy),
            dirty: true,
        }),
        Operation::Acknowledge { saved } => {
            // Edits made while the save was in flight stay unsaved
            let dirty = state.table != saved;
            Ok(EditorState {
                table: state.table.clone(),
                dirty,
            })
        }
    }
}

/// Next state after an in-place edit; writing back the same values keeps
/// the dirty flag as it was
fn edited(state: &EditorState, table: BangTable) -> EditorState {
    let dirty = state.dirty || table != state.table;
    EditorState { table, dirty }
}

/// Insert a new entry placed after every existing one
///
/// The placeholder trigger gets a numeric suffix if it is already taken, so
/// the returned table always has exactly one more entry than `table`.
/// Returns the new table with the trigger and entry that were added.
pub fn add_entry(
    table: &BangTable,
    id: BangId,
    placeholder_trigger: &str,
    url: String,
) -> Result<(BangTable, String, BangEntry), EditorError> {
    if table.iter().any(|(_, entry)| entry.id == id) {
        return Err(EditorError::DuplicateId(id));
    }

    let max_pos = table.max_pos();
    let pos = max_pos
        .checked_add(1)
        .ok_or(EditorError::PositionOverflow(max_pos))?;

    let trigger = unique_trigger(table, placeholder_trigger);
    let entry = BangEntry { id, url, pos };

    let mut next = table.clone();
    next.insert(trigger.clone(), entry.clone());
    Ok((next, trigger, entry))
}

/// Move the entry at `from` to the trigger `to`, keeping id, url and pos
pub fn rename_entry(table: &BangTable, from: &str, to: String) -> Result<BangTable, EditorError> {
    if !table.contains(from) {
        return Err(EditorError::UnknownKey(from.to_string()));
    }
    if from == to {
        return Ok(table.clone());
    }
    if table.contains(&to) {
        return Err(EditorError::DuplicateKey(to));
    }

    let mut next = table.clone();
    if let Some(entry) = next.remove(from) {
        next.insert(to, entry);
    }
    Ok(next)
}

fn unique_trigger(table: &BangTable, base: &str) -> String {
    if !table.contains(base) {
        return base.to_string();
    }
    (1u64..)
        .map(|n| format!("{}{}", base, n))
        .find(|candidate| !table.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
#[path = "ops_test.rs"]
mod tests;
