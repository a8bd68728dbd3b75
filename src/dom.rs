//! DOM adapter.
//!
//! Thin layer over the `dom_query` crate exposing the handful of node-level
//! operations the extraction engine needs: parsing, tag/attribute access and
//! child-node walks. Extractors never touch `dom_query` directly, so a markup
//! library change stays contained here.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document tree.
///
/// Entities are decoded during parsing, so node text is already unescaped.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Root node of a document, the starting point for selector chains.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> NodeRef {
    doc.root()
}

// === Node information ===

/// Tag name of an element node (lowercase), `None` for non-elements.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Attribute value by name.
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|v| v.to_string())
}

/// Whitespace-separated class tokens of an element.
#[must_use]
pub fn classes(node: &NodeRef) -> Vec<String> {
    attr(node, "class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Text content of a node and its descendants.
#[inline]
#[must_use]
pub fn text(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Whether the node is a text node consisting only of whitespace.
#[must_use]
pub fn is_blank_text(node: &NodeRef) -> bool {
    node.is_text() && node.text().trim().is_empty()
}

// === Child walks ===

/// All child nodes in order, text nodes included.
#[must_use]
pub fn child_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut children = Vec::new();
    let mut next = node.first_child();
    while let Some(child) = next {
        next = child.next_sibling();
        children.push(child);
    }
    children
}

/// Element children in order, text and comment nodes skipped.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    child_nodes(node)
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// Child nodes that carry structure: elements and non-blank text.
///
/// Pretty-printed markup interleaves indentation text nodes between elements;
/// positional access over this list is stable against that.
#[must_use]
pub fn significant_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    child_nodes(node)
        .into_iter()
        .filter(|n| n.is_element() || (n.is_text() && !n.text().trim().is_empty()))
        .collect()
}

/// Content of the first text child, if any.
#[must_use]
pub fn first_text_child(node: &NodeRef) -> Option<String> {
    child_nodes(node)
        .into_iter()
        .find(NodeRef::is_text)
        .map(|t| t.text().to_string())
}
