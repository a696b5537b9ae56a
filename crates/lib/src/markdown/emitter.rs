use super::tree::{Element, Node, Tag};

/// Walks an inline tree.
///
/// The default [`Visitor::element`] descends into the children, so an
/// emitter only overrides the element kinds it renders differently.
pub trait Visitor {
    fn text(&mut self, text: &str);

    fn element(&mut self, element: &Element) {
        self.visit(&element.children);
    }

    fn visit(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Text(text) => self.text(text),
                Node::Element(element) => self.element(element),
            }
        }
    }
}

/// Renders an inline tree back to markdown.
#[derive(Debug, Default)]
pub struct MarkdownEmitter {
    markdown: String,
}

impl MarkdownEmitter {
    pub fn emit(nodes: &[Node]) -> String {
        let mut emitter = Self::default();
        emitter.visit(nodes);
        emitter.markdown
    }
}

impl Visitor for MarkdownEmitter {
    fn text(&mut self, text: &str) {
        self.markdown.push_str(text);
    }

    fn element(&mut self, element: &Element) {
        match element.tag {
            Tag::Bold => {
                self.markdown.push_str("**");
                self.visit(&element.children);
                self.markdown.push_str("**");
            }
            Tag::Italic => {
                self.markdown.push('_');
                self.visit(&element.children);
                self.markdown.push('_');
            }
            Tag::Link => {
                self.markdown.push('[');
                self.visit(&element.children);
                self.markdown.push_str("](");
                self.markdown.push_str(element.href().unwrap_or_default());
                self.markdown.push(')');
            }
        }
    }
}

/// Renders only the text leaves of an inline tree.
#[derive(Debug, Default)]
pub struct TextEmitter {
    text: String,
}

impl TextEmitter {
    pub fn emit(nodes: &[Node]) -> String {
        let mut emitter = Self::default();
        emitter.visit(nodes);
        emitter.text
    }
}

impl Visitor for TextEmitter {
    fn text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}
