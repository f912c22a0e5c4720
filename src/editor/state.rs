// Editor state - candidate table plus unsaved-changes flag

use crate::bangs::BangTable;

/// The table being edited and whether it diverges from the owner's copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub table: BangTable,
    pub dirty: bool,
}

impl EditorState {
    /// State for a table just read from the owner (clean)
    pub fn loaded(table: BangTable) -> Self {
        Self {
            table,
            dirty: false,
        }
    }

    /// Save is only offered when there is something unsaved
    pub fn can_save(&self) -> bool {
        self.dirty
    }

    /// Leaving the editor now would discard edits
    pub fn should_warn_on_leave(&self) -> bool {
        self.dirty
    }
}
