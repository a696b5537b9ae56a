//! FIFO queue of persistence writes.
//!
//! Edits produce fragments synchronously, but persisting them is async. The
//! queue hands every write to one background task that awaits them strictly
//! one after another, so a writer's fragments reach the store in the order
//! they were produced. A failed write is logged and does not hold up the
//! writes queued behind it.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error};

use super::{SnapshotStore, StorageError};
use crate::{Result, crdt::Doc};

/// Commands handled by the background writer
enum WriteCommand {
    /// Merge a slice of fragments into a document's snapshot
    Merge {
        document_id: String,
        fragments: Vec<Doc>,
    },
    /// Respond once every earlier command has been handled
    Flush { response: oneshot::Sender<()> },
}

impl std::fmt::Debug for WriteCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge {
                document_id,
                fragments,
            } => f
                .debug_struct("Merge")
                .field("document_id", document_id)
                .field("fragments_count", &fragments.len())
                .finish(),
            Self::Flush { .. } => write!(f, "Flush"),
        }
    }
}

/// Handle to a background task applying writes to a [`SnapshotStore`] in
/// order.
///
/// Dropping every handle lets the task drain what is queued and exit.
#[derive(Debug, Clone)]
pub struct WriteQueue {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl WriteQueue {
    /// Spawns the background writer on the current tokio runtime.
    pub fn start(store: Arc<dyn SnapshotStore>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(store, rx));
        Self { tx }
    }

    /// A handle whose writer is already gone
    #[cfg(test)]
    pub(crate) fn closed() -> Self {
        let (tx, _) = mpsc::unbounded_channel();
        Self { tx }
    }

    /// Queues `fragments` to be merged into `document_id`'s snapshot.
    ///
    /// Does not wait for the write; use [`WriteQueue::flush`] for that.
    pub fn enqueue(&self, document_id: &str, fragments: Vec<Doc>) -> Result<()> {
        if fragments.is_empty() {
            return Ok(());
        }
        self.tx
            .send(WriteCommand::Merge {
                document_id: document_id.to_string(),
                fragments,
            })
            .map_err(|_| StorageError::QueueClosed.into())
    }

    /// Waits until every write queued before this call has been attempted.
    pub async fn flush(&self) -> Result<()> {
        let (response, done) = oneshot::channel();
        self.tx
            .send(WriteCommand::Flush { response })
            .map_err(|_| StorageError::QueueClosed)?;
        done.await.map_err(|_| StorageError::QueueClosed)?;
        Ok(())
    }
}

async fn run(store: Arc<dyn SnapshotStore>, mut rx: mpsc::UnboundedReceiver<WriteCommand>) {
    debug!("write queue started");
    while let Some(command) = rx.recv().await {
        match command {
            WriteCommand::Merge {
                document_id,
                fragments,
            } => {
                debug!(document_id = %document_id, fragments = fragments.len(), "persisting fragments");
                if let Err(e) = store.merge(&document_id, &fragments).await {
                    // Later writes still go through
                    error!(document_id = %document_id, error = %e, "failed to persist fragments");
                }
            }
            WriteCommand::Flush { response } => {
                let _ = response.send(());
            }
        }
    }
    debug!("write queue closed");
}
