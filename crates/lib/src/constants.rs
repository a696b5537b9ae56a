//! Constants used throughout the Folio library.
//!
//! Central definitions for the payload field names shared by the block model,
//! the editor actions and the persisted wire shape.

/// Headroom left after the tail block, and the position of the first block
/// in an empty document.
pub const POSITION_HEADROOM: f64 = 1e9;

/// Position given to blocks created without an explicit one.
pub const DEFAULT_POSITION: f64 = 1000.0;

/// Separator between block type and block id in an identity key.
pub const KEY_SEPARATOR: char = ':';

/// Payload field holding a block's sort key.
pub const POSITION: &str = "position";

/// Payload field of markdown-bearing blocks.
pub const MARKDOWN: &str = "markdown";

/// Payload field of plain-text-bearing blocks.
pub const TEXT: &str = "text";

/// List item numbering flag.
pub const ORDERED: &str = "ordered";

/// Image source.
pub const SRC: &str = "src";

/// Embed link.
pub const URL: &str = "url";

/// Prompt placeholder text.
pub const PLACEHOLDER: &str = "placeholder";

/// File suffix of a persisted document snapshot.
pub const DOCUMENT_FILE_SUFFIX: &str = ".node.json";
