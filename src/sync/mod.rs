//! Sync protocol between the editor and the owner process.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::sync::{save, DEFAULT_SAVE_TIMEOUT_MS};
//!
//! save(&owner, &table, Duration::from_millis(DEFAULT_SAVE_TIMEOUT_MS)).await?;
//! ```

mod link;
mod protocol;

pub use link::{BangSource, CommitOutcome, CommitRequest, LinkError, OwnerLink};
pub use protocol::{save, SaveError, SyncFailure, DEFAULT_SAVE_TIMEOUT_MS};

#[cfg(test)]
pub(crate) mod mock;
