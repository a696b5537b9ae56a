//! CLI argument definitions for the Folio binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Block kinds that can be added from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Kind {
    /// Markdown paragraph
    Paragraph,
    /// Plain-text header
    Header,
    /// Unordered list item
    Bullet,
    /// Ordered list item
    Numbered,
    /// Image; the content is its source
    Image,
    /// Embed; the content is its URL
    Embed,
    /// Empty spacer
    Spacer,
}

/// Folio block document editor
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Folio: block-structured documents on an append-only log")]
#[command(version)]
pub struct Cli {
    /// Directory holding the document snapshots
    #[arg(short = 'D', long, global = true, default_value = ".", env = "FOLIO_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Print JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the documents in the data directory
    List,
    /// Show the blocks of a document in order
    Show(ShowArgs),
    /// Add a block to a document, creating the document if needed
    Add(AddArgs),
    /// Remove a block from a document
    Remove(RemoveArgs),
    /// Render a document, or a markdown string, as markdown, plain text or
    /// an inline tree
    Render(RenderArgs),
}

/// Arguments for the show command
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Document id
    pub document: String,
}

/// Arguments for the add command
#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Document id
    pub document: String,

    /// Kind of block to add
    #[arg(short, long, value_enum, default_value = "paragraph")]
    pub kind: Kind,

    /// Block content: markdown, text, image source or embed URL
    #[arg(default_value = "")]
    pub content: String,

    /// Insert right after the block with this key
    #[arg(long, conflicts_with = "before")]
    pub after: Option<String>,

    /// Insert right before the block with this key
    #[arg(long)]
    pub before: Option<String>,
}

/// Arguments for the remove command
#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Document id
    pub document: String,

    /// Key of the block to remove, `{blockType}:{blockId}`
    pub key: String,
}

/// Rendering mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RenderMode {
    /// Normalized markdown
    #[default]
    Markdown,
    /// Markup stripped
    Plain,
    /// The parsed inline tree as JSON
    Tree,
}

/// Arguments for the render command
#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Document id
    #[arg(required_unless_present = "text")]
    pub document: Option<String>,

    /// Render this markdown string instead of a document
    #[arg(long, conflicts_with = "document")]
    pub text: Option<String>,

    /// Output mode
    #[arg(short, long, value_enum, default_value = "markdown")]
    pub mode: RenderMode,
}
