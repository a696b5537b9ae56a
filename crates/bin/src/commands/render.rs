//! Rendering command - markdown, plain text or inline tree output.

use std::path::Path;

use folio::{Block, BlockType, markdown};

use crate::backend::open_editor;
use crate::cli::{RenderArgs, RenderMode};

fn render_inline(source: &str, mode: RenderMode) -> Result<String, serde_json::Error> {
    match mode {
        RenderMode::Markdown => Ok(markdown::normalize(source)),
        RenderMode::Plain => Ok(markdown::plain_text(source)),
        RenderMode::Tree => serde_json::to_string(&markdown::parse(source)),
    }
}

/// Renders one block as a line of output; void blocks become references
fn render_block(block: &Block, mode: RenderMode) -> Result<String, serde_json::Error> {
    let plain = matches!(mode, RenderMode::Plain);
    let line = match block.block_type() {
        BlockType::Paragraph => render_inline(block.markdown().unwrap_or_default(), mode)?,
        BlockType::ListItem => {
            let item = render_inline(block.markdown().unwrap_or_default(), mode)?;
            match (plain, block.ordered()) {
                (true, _) => item,
                (false, true) => format!("1. {item}"),
                (false, false) => format!("- {item}"),
            }
        }
        BlockType::Header if plain => block.text().unwrap_or_default().to_string(),
        BlockType::Header => format!("# {}", block.text().unwrap_or_default()),
        BlockType::Image if plain => String::new(),
        BlockType::Image => format!("![]({})", block.src().unwrap_or_default()),
        BlockType::Embed => block.url().unwrap_or_default().to_string(),
        _ => block.text_content().unwrap_or_default().to_string(),
    };
    Ok(line)
}

/// Run the `render` command
pub async fn run(data_dir: &Path, args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(text) = &args.text {
        println!("{}", render_inline(text, args.mode)?);
        return Ok(());
    }
    let Some(document) = &args.document else {
        return Err("render needs a document id or --text".into());
    };

    let editor = open_editor(data_dir, document, false).await?;
    for block in editor.blocks() {
        println!("{}", render_block(block, args.mode)?);
    }
    Ok(())
}
