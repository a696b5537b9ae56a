//! Output formatting helpers for human-readable and JSON output.

use folio::{Block, BlockType};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Human }
    }
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    // Calculate column widths (max of header and all row values)
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  ").trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}

/// A one-line summary of a block's content
pub fn summary(block: &Block) -> String {
    let content = block
        .text_content()
        .or_else(|| block.src())
        .or_else(|| block.url())
        .unwrap_or_default();
    match block.block_type() {
        BlockType::ListItem if block.ordered() => format!("1. {content}"),
        BlockType::ListItem => format!("- {content}"),
        _ => content.to_string(),
    }
}

/// A block as a JSON object: key, position and fields
pub fn block_json(block: &Block) -> serde_json::Value {
    serde_json::json!({
        "key": block.key().to_string(),
        "position": block.position(),
        "fields": block.fields(),
    })
}
