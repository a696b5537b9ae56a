use folio::markdown::{Tag, TreeBuilder, parse_with};

/// Renders straight to HTML instead of building a tree
struct HtmlBuilder;

impl TreeBuilder for HtmlBuilder {
    type Node = String;

    fn text(&mut self, text: String) -> String {
        text
    }

    fn element(&mut self, tag: Tag, attributes: &[(&str, &str)], children: Vec<String>) -> String {
        let name = tag.html_name();
        let attributes: String = attributes
            .iter()
            .map(|(k, v)| format!(" {k}=\"{v}\""))
            .collect();
        format!("<{name}{attributes}>{}</{name}>", children.concat())
    }
}

fn html(source: &str) -> String {
    parse_with(source, HtmlBuilder).concat()
}

#[test]
fn test_custom_builder_receives_every_element() {
    assert_eq!(html("a **b** _c_"), "a <b>b</b> <i>c</i>");
}

#[test]
fn test_custom_builder_receives_link_attributes() {
    let rendered = html("[x](https://example.com)");
    assert!(rendered.starts_with("<a "));
    assert!(rendered.contains(r#"href="https://example.com""#));
    assert!(rendered.contains(r#"target="_blank""#));
    assert!(rendered.ends_with(">x</a>"));
}

#[test]
fn test_custom_builder_sees_literal_text_for_unterminated_markup() {
    assert_eq!(html("**open"), "**open");
}
