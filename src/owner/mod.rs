// Owner process - the long-lived task that holds durable storage
//
// The editor never touches storage directly. Commands are sent to the owner
// task over a channel and answered on a oneshot; the owner re-validates every
// commit so storage only ever receives saveable tables.

mod storage;

pub use storage::{BangStorage, FileBangStorage, MemoryBangStorage, StorageError};

use crate::bangs::{BangTable, DefaultsProvider};
use crate::editor::validate_for_save;
use crate::sync::{BangSource, CommitOutcome, CommitRequest, LinkError, OwnerLink};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Capacity of the owner command queue
const COMMAND_QUEUE_DEPTH: usize = 16;

/// Commands sent to the owner task
pub enum OwnerCommand {
    /// Durably replace the stored table
    Commit {
        request: CommitRequest,
        response_tx: oneshot::Sender<CommitOutcome>,
    },
    /// Read the stored table, or the defaults if nothing is stored
    Read {
        response_tx: oneshot::Sender<Result<BangTable, StorageError>>,
    },
    /// Stop the owner task
    Shutdown,
}

/// Handle to the owner task
///
/// Cheap to share behind an `Arc`. When dropped, the owner task is told to
/// shut down.
pub struct OwnerHandle {
    sender: mpsc::Sender<OwnerCommand>,
    task: Option<JoinHandle<()>>,
}

impl OwnerHandle {
    /// Spawn the owner task on the current tokio runtime
    pub fn spawn(storage: Arc<dyn BangStorage>, defaults: Arc<dyn DefaultsProvider>) -> Self {
        let (sender, receiver) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        let task = tokio::spawn(owner_main(receiver, storage, defaults));
        Self {
            sender,
            task: Some(task),
        }
    }

    /// Stop the owner task and wait for it to exit
    pub async fn shutdown(mut self) {
        let _ = self.sender.send(OwnerCommand::Shutdown).await;
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for OwnerHandle {
    fn drop(&mut self) {
        // Ignore errors if the task already exited
        let _ = self.sender.try_send(OwnerCommand::Shutdown);
    }
}

#[async_trait]
impl OwnerLink for OwnerHandle {
    async fn commit(&self, request: CommitRequest) -> Result<CommitOutcome, LinkError> {
        let (response_tx, response_rx) = oneshot::channel();
        self.sender
            .send(OwnerCommand::Commit {
                request,
                response_tx,
            })
            .await
            .map_err(|_| LinkError::Disconnected)?;

        response_rx.await.map_err(|_| LinkError::Disconnected)
    }
}

#[async_trait]
impl BangSource for OwnerHandle {
    async fn read(&self) -> Result<BangTable, LinkError> {
        let (response_tx, response_rx) = oneshot::channel();
        self.sender
            .send(OwnerCommand::Read { response_tx })
            .await
            .map_err(|_| LinkError::Disconnected)?;

        response_rx
            .await
            .map_err(|_| LinkError::Disconnected)?
            .map_err(|e| LinkError::Owner(e.to_string()))
    }
}

/// Main loop for the owner task
async fn owner_main(
    mut receiver: mpsc::Receiver<OwnerCommand>,
    storage: Arc<dyn BangStorage>,
    defaults: Arc<dyn DefaultsProvider>,
) {
    crate::info!("Owner process started");

    while let Some(command) = receiver.recv().await {
        match command {
            OwnerCommand::Commit {
                request,
                response_tx,
            } => {
                let outcome = handle_commit(storage.as_ref(), request).await;
                // Requester may have timed out and gone away
                let _ = response_tx.send(outcome);
            }
            OwnerCommand::Read { response_tx } => {
                let result = match storage.read().await {
                    Ok(Some(table)) => Ok(table),
                    Ok(None) => {
                        crate::info!("No stored bangs, serving defaults");
                        Ok(defaults.default_table())
                    }
                    Err(e) => {
                        crate::error!("Failed to read bangs: {}", e);
                        Err(e)
                    }
                };
                let _ = response_tx.send(result);
            }
            OwnerCommand::Shutdown => {
                crate::debug!("Owner process received shutdown");
                break;
            }
        }
    }

    crate::info!("Owner process stopped");
}

async fn handle_commit(storage: &dyn BangStorage, request: CommitRequest) -> CommitOutcome {
    if let Err(e) = validate_for_save(&request.bangs) {
        crate::warn!("Rejecting commit: {}", e);
        return CommitOutcome::Rejected;
    }

    match storage.save(&request.bangs).await {
        Ok(()) => {
            crate::info!("Committed {} bangs", request.bangs.len());
            CommitOutcome::Acknowledged
        }
        Err(e) => {
            crate::error!("Commit failed: {}", e);
            CommitOutcome::Rejected
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
