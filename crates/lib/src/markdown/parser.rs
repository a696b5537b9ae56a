//! Recursive-descent parser for inline markdown.
//!
//! Every call works on an explicit `[start, end)` range of the token slice.
//! At each position the rules allowed in the current context are tried in
//! order and the first match wins:
//!
//! | context   | rules                        |
//! |-----------|------------------------------|
//! | top level | bold, italic, link, text     |
//! | bold      | italic, link, text           |
//! | italic    | bold, link, text             |
//! | link text | bold, italic, text           |
//!
//! A delimiter with no closing partner in range is not an error: the text
//! rule always matches and swallows it as literal characters.

use std::ops::Range;

use super::{
    tokenizer::Token,
    tree::{LINK_TARGET, Tag, TreeBuilder},
};

#[derive(Debug, Clone, Copy)]
enum Rule {
    Bold,
    Italic,
    Link,
    Text,
}

const TOP_LEVEL: &[Rule] = &[Rule::Bold, Rule::Italic, Rule::Link, Rule::Text];
const IN_BOLD: &[Rule] = &[Rule::Italic, Rule::Link, Rule::Text];
const IN_ITALIC: &[Rule] = &[Rule::Bold, Rule::Link, Rule::Text];
const IN_LINK: &[Rule] = &[Rule::Bold, Rule::Italic, Rule::Text];

pub struct Parser<'t, 'src, B> {
    tokens: &'t [Token<'src>],
    builder: B,
}

impl<'t, 'src, B: TreeBuilder> Parser<'t, 'src, B> {
    pub fn new(tokens: &'t [Token<'src>], builder: B) -> Self {
        Self { tokens, builder }
    }

    /// Parses the whole token slice into a list of top-level nodes.
    pub fn parse(mut self) -> Vec<B::Node> {
        self.parse_range(0..self.tokens.len(), TOP_LEVEL)
    }

    fn parse_range(&mut self, range: Range<usize>, rules: &[Rule]) -> Vec<B::Node> {
        let mut nodes = Vec::new();
        let mut index = range.start;
        while index < range.end {
            let matched = rules
                .iter()
                .find_map(|&rule| self.apply(rule, index, range.end));
            let (node, next) = match matched {
                Some(found) => found,
                None => self.text(index, range.end),
            };
            nodes.push(node);
            index = next;
        }
        nodes
    }

    fn apply(&mut self, rule: Rule, start: usize, end: usize) -> Option<(B::Node, usize)> {
        match rule {
            Rule::Bold => self.delimited(Token::Bold, Tag::Bold, IN_BOLD, start, end),
            Rule::Italic => self.delimited(Token::Italic, Tag::Italic, IN_ITALIC, start, end),
            Rule::Link => self.link(start, end),
            Rule::Text => Some(self.text(start, end)),
        }
    }

    /// `delimiter ... delimiter`
    fn delimited(
        &mut self,
        delimiter: Token<'src>,
        tag: Tag,
        inner: &[Rule],
        start: usize,
        end: usize,
    ) -> Option<(B::Node, usize)> {
        if self.tokens[start] != delimiter {
            return None;
        }
        let close = self.lookup(start + 1..end, delimiter)?;
        let children = self.parse_range(start + 1..close, inner);
        Some((self.builder.element(tag, &[], children), close + 1))
    }

    /// `[ label ] ( href )`, with `(` immediately after `]`
    fn link(&mut self, start: usize, end: usize) -> Option<(B::Node, usize)> {
        if self.tokens[start] != Token::LBracket {
            return None;
        }
        let label_end = self.lookup(start + 1..end, Token::RBracket)?;
        let href_start = self.lookup(label_end + 1..(label_end + 2).min(end), Token::LParen)?;
        let href_end = self.lookup(href_start + 1..end, Token::RParen)?;

        let label = self.parse_range(start + 1..label_end, IN_LINK);
        let href = self.grab(href_start + 1..href_end);
        let node = self.builder.element(
            Tag::Link,
            &[("href", href.as_str()), ("target", LINK_TARGET)],
            label,
        );
        Some((node, href_end + 1))
    }

    /// Takes the first token unconditionally, then everything up to the next
    /// structural token.
    fn text(&mut self, start: usize, end: usize) -> (B::Node, usize) {
        let next = (start + 1..end)
            .find(|&i| self.tokens[i].is_structural())
            .unwrap_or(end);
        let text = self.grab(start..next);
        (self.builder.text(text), next)
    }

    fn lookup(&self, mut range: Range<usize>, token: Token<'src>) -> Option<usize> {
        range.find(|&i| self.tokens[i] == token)
    }

    fn grab(&self, range: Range<usize>) -> String {
        self.tokens[range].iter().map(Token::as_str).collect()
    }
}
