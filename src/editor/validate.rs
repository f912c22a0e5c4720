// Pre-save validation of the candidate table

use crate::bangs::{BangId, BangTable};

/// Reasons a table cannot be sent to the owner process
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A trigger is empty once surrounding whitespace is removed
    #[error("Cannot save empty bang (entry {id})")]
    EmptyKey { id: BangId },
}

/// Check every entry of `table`, reporting the first blank trigger found
pub fn validate_for_save(table: &BangTable) -> Result<(), ValidationError> {
    for (trigger, entry) in table {
        if trigger.trim().is_empty() {
            return Err(ValidationError::EmptyKey {
                id: entry.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
