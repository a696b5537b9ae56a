//! One JSON file per document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{SnapshotStore, StorageError};
use crate::{Result, constants::DOCUMENT_FILE_SUFFIX, crdt::Doc};

/// Stores each snapshot as `{data_dir}/{document_id}.node.json`.
///
/// Writes go to a temporary file that is then renamed over the snapshot, so
/// a crash never leaves a half-written document behind. Read-modify-write
/// cycles are serialized by an internal lock.
#[derive(Debug)]
pub struct FileStore {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The snapshot file of `document_id`.
    ///
    /// Ids that could escape the data directory are rejected.
    pub fn path(&self, document_id: &str) -> Result<PathBuf> {
        let escapes = document_id.is_empty()
            || document_id.contains(['/', '\\'])
            || document_id.contains("..");
        if escapes {
            return Err(StorageError::InvalidDocumentId {
                document_id: document_id.to_string(),
            }
            .into());
        }
        Ok(self
            .data_dir
            .join(format!("{document_id}{DOCUMENT_FILE_SUFFIX}")))
    }

    /// Ids of every document in the data directory
    pub async fn document_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        let mut entries = match tokio::fs::read_dir(&self.data_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ids),
            Err(source) => {
                return Err(StorageError::FileIo {
                    path: self.data_dir.clone(),
                    source,
                }
                .into());
            }
        };
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| StorageError::FileIo {
                path: self.data_dir.clone(),
                source,
            })?
        {
            if let Some(id) = entry
                .file_name()
                .to_str()
                .and_then(|name| name.strip_suffix(DOCUMENT_FILE_SUFFIX))
            {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    async fn read(&self, document_id: &str) -> Result<Option<Doc>> {
        let path = self.path(document_id)?;
        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::FileIo { path, source }.into()),
        };
        let snapshot = Doc::from_json_str(&json).map_err(|e| StorageError::CorruptSnapshot {
            document_id: document_id.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(snapshot))
    }

    async fn write(&self, document_id: &str, snapshot: &Doc) -> Result<()> {
        let path = self.path(document_id)?;
        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|source| StorageError::SerializationFailed { source })?;

        let io_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source| StorageError::FileIo { path, source }
        };
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(io_error(&self.data_dir))?;
        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, json).await.map_err(io_error(&tmp))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(io_error(&path))?;

        tracing::debug!(document_id, path = %path.display(), "snapshot written");
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for FileStore {
    async fn load(&self, document_id: &str) -> Result<Doc> {
        self.read(document_id).await?.ok_or_else(|| {
            StorageError::DocumentNotFound {
                document_id: document_id.to_string(),
            }
            .into()
        })
    }

    async fn merge(&self, document_id: &str, fragments: &[Doc]) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = self.read(document_id).await?.unwrap_or_default();
        snapshot.apply_all(fragments);
        self.write(document_id, &snapshot).await
    }

    async fn save(&self, document_id: &str, snapshot: &Doc) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.write(document_id, &snapshot.without_tombstones()).await
    }
}
