//! Document display command - shows blocks in position order.

use std::path::Path;

use folio::store::{Entry, group_blocks};

use crate::backend::open_editor;
use crate::cli::ShowArgs;
use crate::output::{OutputFormat, block_json, print_table, summary};

/// Run the `show` command
pub async fn run(
    data_dir: &Path,
    args: &ShowArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let editor = open_editor(data_dir, &args.document, false).await?;
    let blocks = editor.blocks();

    match format {
        OutputFormat::Human => {
            if blocks.is_empty() {
                println!("Document {} is empty", args.document);
                return Ok(());
            }
            let rows: Vec<Vec<String>> = blocks
                .iter()
                .map(|block| {
                    vec![
                        block.key().to_string(),
                        block.position().to_string(),
                        summary(block),
                    ]
                })
                .collect();
            print_table(&["KEY", "POSITION", "CONTENT"], &rows);
        }
        OutputFormat::Json => {
            let entries: Vec<_> = group_blocks(blocks)
                .iter()
                .map(|entry| match entry {
                    Entry::Block(block) => block_json(block),
                    Entry::List(group) => serde_json::json!({
                        "key": group.key,
                        "ordered": group.ordered,
                        "items": group.items.iter().map(|b| block_json(b)).collect::<Vec<_>>(),
                    }),
                })
                .collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }

    Ok(())
}
