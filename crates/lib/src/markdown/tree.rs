use std::collections::BTreeMap;

use serde::Serialize;

/// Target attribute given to every link
pub const LINK_TARGET: &str = "_blank";

/// Element kinds of the inline tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Bold,
    Italic,
    Link,
}

impl Tag {
    /// The conventional HTML tag name
    pub fn html_name(self) -> &'static str {
        match self {
            Tag::Bold => "b",
            Tag::Italic => "i",
            Tag::Link => "a",
        }
    }
}

/// A node of the inline tree.
///
/// Serializes text leaves as bare strings and elements as objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn href(&self) -> Option<&str> {
        self.attribute("href")
    }
}

/// Builds the nodes produced by the parser.
///
/// Lets a host plug its own tree representation into the parser; the
/// default [`InlineTree`] builds [`Node`]s.
pub trait TreeBuilder {
    type Node;

    fn text(&mut self, text: String) -> Self::Node;

    fn element(
        &mut self,
        tag: Tag,
        attributes: &[(&str, &str)],
        children: Vec<Self::Node>,
    ) -> Self::Node;
}

/// The default tree builder
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineTree;

impl TreeBuilder for InlineTree {
    type Node = Node;

    fn text(&mut self, text: String) -> Node {
        Node::Text(text)
    }

    fn element(&mut self, tag: Tag, attributes: &[(&str, &str)], children: Vec<Node>) -> Node {
        Node::Element(Element {
            tag,
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children,
        })
    }
}
