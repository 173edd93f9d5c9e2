use super::*;

#[test]
fn markup_returns_itself_unchanged() {
    for raw in ["", "plain text", "<b>bold</b> & \"quoted\"", "café ❤"] {
        let markup = Markup::from(raw);
        assert_eq!(markup.html(), raw);
        assert_eq!(markup.to_string(), raw);
    }
}

#[test]
fn markup_html_is_idempotent() {
    let markup = Markup::new("<hr/>");
    assert_eq!(Markup::new(markup.html()).html(), markup.html());
}

#[test]
fn markup_supports_string_operations() {
    let markup = Markup::new("<p>hello</p>");
    assert_eq!(markup.len(), 12);
    assert!(markup.contains("hello"));
    assert!(markup.starts_with("<p>"));
    assert_eq!(markup.as_ref(), "<p>hello</p>");
}

#[test]
fn node_markers_are_nodes() {
    fn assert_node<T: Node>(_: T) {}
    assert_node(Element);
    assert_node(Text);
    assert_node(Fragment);
    assert_node(Comment);
    assert_node(DocumentType);
}

#[test]
fn html_yields_placeholder_node() {
    assert_eq!(html(Template::default()), VDOMNode::default());
}

#[test]
fn static_form_matches_free_function() {
    let template = Template::default();
    assert_eq!(h::html(template), html(template));
}
