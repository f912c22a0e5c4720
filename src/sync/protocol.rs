// Save protocol - validate locally, then one atomic commit to the owner

use super::{CommitOutcome, CommitRequest, LinkError, OwnerLink};
use crate::bangs::BangTable;
use crate::editor::{validate_for_save, ValidationError};
use std::time::Duration;

/// Default time to wait for the owner to answer a commit
pub const DEFAULT_SAVE_TIMEOUT_MS: u64 = 5_000;

/// Why a validated table did not get saved
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncFailure {
    /// The owner answered and refused the write
    #[error("Owner process rejected the save")]
    Rejected,
    /// The owner could not be reached
    #[error("Owner process unreachable: {0}")]
    Unreachable(LinkError),
    /// No answer within the save timeout
    #[error("Owner process did not answer within {0:?}")]
    TimedOut(Duration),
}

/// Error types for a save attempt
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    /// Local validation failed; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The commit was sent but did not succeed
    #[error(transparent)]
    Sync(#[from] SyncFailure),
}

/// Validate `table` and commit it to the owner behind `link`
///
/// A table that fails validation never reaches the owner. The commit is
/// bounded by `timeout` so a stalled transport reports failure instead of
/// hanging. No retry is attempted.
pub async fn save<L: OwnerLink + ?Sized>(
    link: &L,
    table: &BangTable,
    timeout: Duration,
) -> Result<(), SaveError> {
    validate_for_save(table)?;

    crate::debug!("Committing {} bangs to owner process", table.len());
    let request = CommitRequest {
        bangs: table.clone(),
    };

    match tokio::time::timeout(timeout, link.commit(request)).await {
        Ok(Ok(CommitOutcome::Acknowledged)) => {
            crate::info!("Saved {} bangs", table.len());
            Ok(())
        }
        Ok(Ok(CommitOutcome::Rejected)) => {
            crate::warn!("Owner process rejected save of {} bangs", table.len());
            Err(SyncFailure::Rejected.into())
        }
        Ok(Err(e)) => {
            crate::error!("Failed to reach owner process: {}", e);
            Err(SyncFailure::Unreachable(e).into())
        }
        Err(_) => {
            crate::error!("Save timed out after {:?}", timeout);
            Err(SyncFailure::TimedOut(timeout).into())
        }
    }
}

#[cfg(test)]
#[path = "protocol_test.rs"]
mod tests;
