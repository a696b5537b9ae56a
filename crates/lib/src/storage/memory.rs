//! In-memory snapshot store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{SnapshotStore, StorageError};
use crate::{Result, crdt::Doc};

/// Keeps snapshots in a map. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: RwLock<HashMap<String, Doc>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `snapshot` under `document_id`.
    pub fn with_document(document_id: impl Into<String>, snapshot: Doc) -> Self {
        Self {
            documents: RwLock::new(HashMap::from([(document_id.into(), snapshot)])),
        }
    }

    /// Ids of every stored document
    pub async fn document_ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.documents.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }
}

#[async_trait]
impl SnapshotStore for InMemoryStore {
    async fn load(&self, document_id: &str) -> Result<Doc> {
        self.documents
            .read()
            .await
            .get(document_id)
            .cloned()
            .ok_or_else(|| {
                StorageError::DocumentNotFound {
                    document_id: document_id.to_string(),
                }
                .into()
            })
    }

    async fn merge(&self, document_id: &str, fragments: &[Doc]) -> Result<()> {
        let mut documents = self.documents.write().await;
        documents
            .entry(document_id.to_string())
            .or_default()
            .apply_all(fragments);
        Ok(())
    }

    async fn save(&self, document_id: &str, snapshot: &Doc) -> Result<()> {
        self.documents
            .write()
            .await
            .insert(document_id.to_string(), snapshot.without_tombstones());
        Ok(())
    }
}
