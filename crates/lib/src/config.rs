//! Editor configuration.

use std::{path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::storage::{FileStore, SnapshotStore};

/// How an [`Editor`](crate::Editor) finds and persists its document.
///
/// Deserializes from a partial JSON object; missing fields take their
/// defaults.
///
/// ```
/// # use folio::config::EditorConfig;
/// let config: EditorConfig = serde_json::from_str(r#"{"document_id": "notes"}"#).unwrap();
/// assert_eq!(config.document_id.as_deref(), Some("notes"));
/// assert!(config.persistent);
/// assert!(!config.local);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// The document to edit. Without one the editor is inert: booting yields
    /// an empty document and nothing is written.
    pub document_id: Option<String>,
    /// Persist to local files under `data_dir` instead of a remote gateway
    pub local: bool,
    /// Write local edits back to storage
    pub persistent: bool,
    /// Directory of the local file store
    pub data_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            document_id: None,
            local: false,
            persistent: true,
            data_dir: None,
        }
    }
}

impl EditorConfig {
    /// A persistent configuration for `document_id` backed by local files.
    pub fn local(document_id: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            document_id: Some(document_id.into()),
            local: true,
            persistent: true,
            data_dir: Some(data_dir.into()),
        }
    }

    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn with_persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// The store this configuration selects on its own.
    ///
    /// Only local configurations name a store; a remote gateway has to be
    /// supplied by the caller. A local configuration without `data_dir`
    /// uses the working directory.
    pub fn store(&self) -> Option<Arc<dyn SnapshotStore>> {
        if !self.local {
            return None;
        }
        let data_dir = self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        Some(Arc::new(FileStore::new(data_dir)))
    }
}
