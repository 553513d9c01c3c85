//! XML utility functions for navigating roxmltree documents.
//!
//! xdoc sources use a default namespace, so matching is always done on the
//! local name.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xdoc_splitter::xml::get_tag_name;
///
/// let xml = r#"<document xmlns="http://maven.apache.org/XDOC/2.0"><body/></document>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "document");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given local name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// All descendant elements with the given local name, in document order.
///
/// Includes `node` itself when it matches.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xdoc_splitter::xml::descendants_named;
///
/// let xml = r#"<body><section name="A"><section name="B"/></section></body>"#;
/// let doc = Document::parse(xml).unwrap();
/// let names: Vec<_> = descendants_named(doc.root_element(), "section")
///     .filter_map(|n| n.attribute("name"))
///     .collect();
/// assert_eq!(names, ["A", "B"]);
/// ```
pub fn descendants_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants().filter(move |n| has_tag(*n, tag))
}

/// Get all element children of a node.
///
/// Excludes text nodes, comments and processing instructions.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}
