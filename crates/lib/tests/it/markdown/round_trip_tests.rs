use folio::markdown::{self, Node, Tag, normalize, parse, plain_text, to_markdown};

const WELL_FORMED: [&str; 5] = [
    "plain text",
    "**bold**",
    "_italic_",
    "[label](https://example.com)",
    "mix **bold** and _italic_ and [a](u)",
];

#[test]
fn test_well_formed_markup_round_trips() {
    for source in WELL_FORMED {
        assert_eq!(to_markdown(&parse(source)), source);
    }
}

#[test]
fn test_nested_markup_round_trips() {
    for source in [
        "_a **b** c_",
        "**[x](y)**",
        "[**bold** _label_](https://example.com/a_b)",
        "",
    ] {
        assert_eq!(normalize(source), source);
    }
}

#[test]
fn test_unterminated_markup_is_idempotent() {
    for source in ["**open", "a _b", "[label", "[a](u", "**a _b**", "a * b"] {
        let once = normalize(source);
        assert_eq!(normalize(&once), once, "{source:?}");
    }
}

#[test]
fn test_plain_text_strips_structure() {
    assert_eq!(plain_text("mix **bold** and _italic_ and [a](u)"), "mix bold and italic and a");
    assert_eq!(plain_text("**open"), "**open");
    assert_eq!(plain_text(""), "");
}

#[test]
fn test_mixed_tree_shape() {
    let nodes = parse("mix **bold** and _italic_ and [a](u)");
    let tags: Vec<Option<Tag>> = nodes
        .iter()
        .map(|node| match node {
            Node::Element(element) => Some(element.tag),
            Node::Text(_) => None,
        })
        .collect();
    assert_eq!(
        tags,
        vec![
            None,
            Some(Tag::Bold),
            None,
            Some(Tag::Italic),
            None,
            Some(Tag::Link)
        ]
    );
    match &nodes[5] {
        Node::Element(link) => assert_eq!(link.href(), Some("u")),
        Node::Text(text) => panic!("expected link, got {text:?}"),
    }
}

#[test]
fn test_tree_serializes_for_hosts() {
    let json = serde_json::to_value(markdown::parse("a **b**")).unwrap();
    assert_eq!(
        json,
        serde_json::json!(["a ", { "tag": "bold", "children": ["b"] }])
    );
}
