//! Opening documents from the data directory.

use std::path::Path;

use folio::{Editor, config::EditorConfig, storage::FileStore};

/// Open a document for editing.
///
/// With `create`, a missing document is created empty; otherwise it is an
/// error.
pub async fn open_editor(
    data_dir: &Path,
    document_id: &str,
    create: bool,
) -> Result<Editor, Box<dyn std::error::Error>> {
    tracing::debug!(
        "Opening document {document_id} in {}",
        data_dir.display()
    );
    let mut editor = Editor::new(EditorConfig::local(document_id, data_dir));
    if create {
        editor.boot_or_create().await?;
    } else {
        editor.boot().await?;
    }
    Ok(editor)
}

/// The file store over the data directory
pub fn file_store(data_dir: &Path) -> FileStore {
    FileStore::new(data_dir)
}
