//! Document listing command.

use std::path::Path;

use folio::storage::SnapshotStore;

use crate::backend::file_store;
use crate::output::{OutputFormat, print_table};

/// Run the `list` command
pub async fn run(data_dir: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let store = file_store(data_dir);
    let ids = store.document_ids().await?;

    let mut rows = Vec::with_capacity(ids.len());
    for id in &ids {
        let blocks = match store.load(id).await {
            Ok(snapshot) => snapshot.len().to_string(),
            Err(e) => {
                tracing::warn!("Failed to load document {id}: {e}");
                "?".to_string()
            }
        };
        rows.push(vec![id.clone(), blocks]);
    }

    match format {
        OutputFormat::Human => {
            if rows.is_empty() {
                println!("No documents in {}", data_dir.display());
            } else {
                print_table(&["DOCUMENT", "BLOCKS"], &rows);
            }
        }
        OutputFormat::Json => {
            let value: Vec<_> = rows
                .iter()
                .map(|row| serde_json::json!({ "id": row[0], "blocks": row[1] }))
                .collect();
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
