// Fake owner process for tests

use super::{BangSource, CommitOutcome, CommitRequest, LinkError, OwnerLink};
use crate::bangs::BangTable;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// How the fake owner answers commits
#[derive(Debug, Clone)]
pub enum MockReply {
    Answer(Result<CommitOutcome, LinkError>),
    /// Never answer
    Hang,
}

/// Owner link that records every request and answers with a canned reply
#[derive(Clone)]
pub struct MockOwner {
    pub reply: Arc<Mutex<MockReply>>,
    pub requests: Arc<Mutex<Vec<CommitRequest>>>,
    pub stored: Arc<Mutex<BangTable>>,
}

impl MockOwner {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply: Arc::new(Mutex::new(reply)),
            requests: Arc::new(Mutex::new(Vec::new())),
            stored: Arc::new(Mutex::new(BangTable::new())),
        }
    }

    pub fn acknowledging() -> Self {
        Self::new(MockReply::Answer(Ok(CommitOutcome::Acknowledged)))
    }

    pub fn rejecting() -> Self {
        Self::new(MockReply::Answer(Ok(CommitOutcome::Rejected)))
    }

    pub fn disconnected() -> Self {
        Self::new(MockReply::Answer(Err(LinkError::Disconnected)))
    }

    pub fn with_stored(self, table: BangTable) -> Self {
        *self.stored.lock().unwrap() = table;
        self
    }

    pub fn set_reply(&self, reply: MockReply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl OwnerLink for MockOwner {
    async fn commit(&self, request: CommitRequest) -> Result<CommitOutcome, LinkError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.reply.lock().unwrap().clone();
        match reply {
            MockReply::Answer(result) => {
                if let Ok(CommitOutcome::Acknowledged) = result {
                    *self.stored.lock().unwrap() = request.bangs;
                }
                result
            }
            MockReply::Hang => std::future::pending().await,
        }
    }
}

#[async_trait]
impl BangSource for MockOwner {
    async fn read(&self) -> Result<BangTable, LinkError> {
        Ok(self.stored.lock().unwrap().clone())
    }
}
