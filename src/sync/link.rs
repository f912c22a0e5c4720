//! Owner-process link traits.
//!
//! The editor never writes storage itself; it hands the whole table to the
//! owner process through these traits, so tests can substitute a fake owner.

use crate::bangs::BangTable;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request payload sent to the owner process on save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRequest {
    pub bangs: BangTable,
}

/// Owner's answer to a commit request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitOutcome {
    /// The table was durably written
    Acknowledged,
    /// The owner refused or failed to write the table
    Rejected,
}

/// Transport failures talking to the owner process
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// The owner is gone or never answered
    #[error("Owner process disconnected")]
    Disconnected,
    /// The owner could not produce the requested data
    #[error("Owner process error: {0}")]
    Owner(String),
}

/// Write path to the owner process
#[async_trait]
pub trait OwnerLink: Send + Sync {
    /// Send the whole table for a durable write and wait for the answer
    async fn commit(&self, request: CommitRequest) -> Result<CommitOutcome, LinkError>;
}

/// Read path used to load the table when the editor starts
#[async_trait]
pub trait BangSource: Send + Sync {
    async fn read(&self) -> Result<BangTable, LinkError>;
}
