//! The editor: a [`Document`] bound to its configuration and storage.
//!
//! An [`Editor`] owns exactly one document. Edits arrive as the action
//! methods in [`actions`] and become fragment pushes or shadow overlay
//! operations; after every push the editor hands the new slice of the log to
//! its [`WriteQueue`].
//!
//! # Lifecycle
//!
//! ```no_run
//! # async fn example() -> folio::Result<()> {
//! use folio::{Block, Editor, config::EditorConfig, editor::InsertAt};
//!
//! let mut editor = Editor::new(EditorConfig::local("notes", "/tmp/folio"));
//! editor.boot().await?;
//!
//! editor.insert(Block::paragraph("hello"), InsertAt::AfterSelection(vec![]));
//! editor.flush().await?;
//! # Ok(())
//! # }
//! ```

use std::{fmt, sync::Arc};

use tracing::{debug, info, warn};

use crate::{
    Result,
    block::Block,
    config::EditorConfig,
    crdt::Doc,
    storage::{SnapshotStore, WriteQueue},
    store::Document,
};

pub mod actions;

pub use actions::InsertAt;

/// A document with its persistence binding.
pub struct Editor {
    config: EditorConfig,
    document: Document,
    store: Option<Arc<dyn SnapshotStore>>,
    /// Present once a document has been loaded and writes are enabled
    queue: Option<WriteQueue>,
    /// Log slots already handed to the queue; slot 0 is never written back
    synced: usize,
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("config", &self.config)
            .field("blocks", &self.document.len())
            .field("has_store", &self.store.is_some())
            .field("writable", &self.queue.is_some())
            .field("synced", &self.synced)
            .finish()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Creates an editor using the store its configuration selects.
    pub fn new(config: EditorConfig) -> Self {
        let store = config.store();
        Self::build(config, store)
    }

    /// Creates an editor backed by `store`, whatever the configuration says.
    pub fn with_store(config: EditorConfig, store: Arc<dyn SnapshotStore>) -> Self {
        Self::build(config, Some(store))
    }

    fn build(config: EditorConfig, store: Option<Arc<dyn SnapshotStore>>) -> Self {
        Self {
            config,
            document: Document::new(),
            store,
            queue: None,
            synced: 1,
        }
    }

    /// Loads the configured document and enables writes.
    ///
    /// Without a document id or a store this does nothing. When the store
    /// cannot find the document the error is returned and the document stays
    /// empty; writes stay disabled.
    pub async fn boot(&mut self) -> Result<()> {
        let (Some(document_id), Some(store)) = (self.config.document_id.clone(), self.store.clone())
        else {
            debug!("no document or store configured, editor is inert");
            return Ok(());
        };

        let base = match store.load(&document_id).await {
            Ok(base) => base,
            Err(e) => {
                if e.is_not_found() {
                    warn!(document_id = %document_id, "document not found");
                }
                return Err(e);
            }
        };
        info!(document_id = %document_id, blocks = base.len(), "document loaded");
        self.document.register(base);
        self.enable_writes(store);
        Ok(())
    }

    /// Like [`Editor::boot`], but creates an empty document when the store
    /// has none.
    pub async fn boot_or_create(&mut self) -> Result<()> {
        match self.boot().await {
            Err(e) if e.is_not_found() => {}
            other => return other,
        }
        if let (Some(document_id), Some(store)) = (self.config.document_id.clone(), self.store.clone())
        {
            info!(document_id = %document_id, "creating document");
            store.save(&document_id, &Doc::new()).await?;
            self.enable_writes(store);
        }
        Ok(())
    }

    fn enable_writes(&mut self, store: Arc<dyn SnapshotStore>) {
        if !self.config.persistent {
            debug!("editor is not persistent, writes disabled");
            return;
        }
        self.queue = Some(WriteQueue::start(store));
        self.persist();
    }

    /// Hands the fragments pushed since the last sync to the write queue.
    ///
    /// Until writes are enabled the slice stays pending, so edits made before
    /// boot go out with the first sync after it. A failed enqueue also leaves
    /// the slice pending for the next sync.
    pub fn sync(&mut self) -> Result<()> {
        let end = self.document.log().len();
        if !self.config.persistent {
            self.synced = end;
            return Ok(());
        }
        let (Some(queue), Some(document_id)) = (&self.queue, &self.config.document_id) else {
            return Ok(());
        };
        let pending = self.document.log().since(self.synced);
        if !pending.is_empty() {
            queue.enqueue(document_id, pending.to_vec())?;
        }
        self.synced = end;
        Ok(())
    }

    /// Syncs, then waits for every queued write to be attempted.
    pub async fn flush(&mut self) -> Result<()> {
        self.sync()?;
        if let Some(queue) = &self.queue {
            queue.flush().await?;
        }
        Ok(())
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The ordered view, shadow overlay included
    pub fn blocks(&self) -> &[Block] {
        self.document.blocks()
    }

    /// Whether edits are being written back to storage
    pub fn is_writable(&self) -> bool {
        self.queue.is_some()
    }

    /// Pushes a raw fragment and persists it.
    pub fn push(&mut self, fragment: Doc) -> bool {
        let pushed = self.document.push(fragment);
        if pushed {
            self.persist();
        }
        pushed
    }

    fn persist(&mut self) {
        if let Err(e) = self.sync() {
            tracing::error!(error = %e, "failed to queue fragments for persistence");
        }
    }
}
