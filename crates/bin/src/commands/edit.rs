//! Block editing commands.

use std::path::Path;

use folio::{Block, BlockKey, editor::InsertAt};

use crate::backend::open_editor;
use crate::cli::{AddArgs, Kind, RemoveArgs};
use crate::output::{OutputFormat, block_json};

fn build_block(kind: Kind, content: &str) -> Block {
    match kind {
        Kind::Paragraph => Block::paragraph(content),
        Kind::Header => Block::header(content),
        Kind::Bullet => Block::list_item(content, false),
        Kind::Numbered => Block::list_item(content, true),
        Kind::Image => Block::image(content),
        Kind::Embed => Block::embed(content),
        Kind::Spacer => Block::spacer(),
    }
}

/// Run the `add` command
pub async fn add(
    data_dir: &Path,
    args: &AddArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let at = match (&args.after, &args.before) {
        (Some(key), _) => InsertAt::After(BlockKey::parse(key)?),
        (None, Some(key)) => InsertAt::Before(BlockKey::parse(key)?),
        (None, None) => InsertAt::AfterSelection(Vec::new()),
    };

    let mut editor = open_editor(data_dir, &args.document, true).await?;
    let block = editor.insert(build_block(args.kind, &args.content), at);
    editor.flush().await?;

    tracing::info!("Added {} to {}", block.key(), args.document);
    match format {
        OutputFormat::Human => println!("{}", block.key()),
        OutputFormat::Json => println!("{}", serde_json::to_string(&block_json(&block))?),
    }
    Ok(())
}

/// Run the `remove` command
pub async fn remove(
    data_dir: &Path,
    args: &RemoveArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = BlockKey::parse(&args.key)?;
    let mut editor = open_editor(data_dir, &args.document, false).await?;

    if editor.document().get(&key).is_none() {
        return Err(format!("Block {key} not found in {}", args.document).into());
    }
    editor.remove(&key);
    editor.flush().await?;

    match format {
        OutputFormat::Human => println!("Removed {key}"),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "removed": key.to_string() }))
        }
    }
    Ok(())
}
