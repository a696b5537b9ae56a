//! Inline markdown: tokenizer, parser and emitters.
//!
//! The language is deliberately small: `**bold**`, `_italic_`,
//! `[label](href)` and plain text. Persisted blocks store it as a string;
//! editing works on the inline tree.
//!
//! ```text
//! "a **b** [c](u)"
//!   -> tokenize -> [Text("a "), Bold, Text("b"), Bold, Text(" "), LBracket, ...]
//!   -> parse    -> [Text("a "), <b>["b"]</b>, Text(" "), <a href="u">["c"]</a>]
//!   -> emit     -> "a **b** [c](u)"  or  "a b c"
//! ```
//!
//! Well-formed markup survives a parse/emit round trip byte for byte.
//! Unterminated delimiters are read as literal text.

mod emitter;
mod parser;
mod tokenizer;
mod tree;

pub use emitter::{MarkdownEmitter, TextEmitter, Visitor};
pub use parser::Parser;
pub use tokenizer::{Token, Tokens, tokenize};
pub use tree::{Element, InlineTree, LINK_TARGET, Node, Tag, TreeBuilder};

/// Parses markdown into the default inline tree.
pub fn parse(markdown: &str) -> Vec<Node> {
    parse_with(markdown, InlineTree)
}

/// Parses markdown with a caller-supplied tree builder.
pub fn parse_with<B: TreeBuilder>(markdown: &str, builder: B) -> Vec<B::Node> {
    let tokens: Vec<Token<'_>> = tokenize(markdown).collect();
    Parser::new(&tokens, builder).parse()
}

/// Renders an inline tree as markdown.
pub fn to_markdown(nodes: &[Node]) -> String {
    MarkdownEmitter::emit(nodes)
}

/// Renders an inline tree as plain text.
pub fn to_plain_text(nodes: &[Node]) -> String {
    TextEmitter::emit(nodes)
}

/// Strips all markup from a markdown string.
///
/// ```
/// assert_eq!(folio::markdown::plain_text("a **b** [c](u)"), "a b c");
/// ```
pub fn plain_text(markdown: &str) -> String {
    to_plain_text(&parse(markdown))
}

/// Parses and re-emits markdown.
///
/// The identity for well-formed input; unterminated delimiters come back as
/// the same literal characters.
pub fn normalize(markdown: &str) -> String {
    to_markdown(&parse(markdown))
}
