//! Narrow structural node selection.
//!
//! Each extraction rule targets its page location with a fixed chain of
//! single-descriptor queries (tag, `#id`, `.class`, or a combination).
//! This is deliberately not a CSS engine: no combinators, no attribute
//! predicates, no pseudo-classes. The extractors encode the catalog's
//! page shape as hand-chosen chains, so the selection language stays as
//! small as the assumptions it expresses.
//!
//! Chained selection narrows through the FIRST match of every intermediate
//! step. That is a contract, not an accident: sibling subtrees after the
//! first match are never consulted, and a chain whose step matches nothing
//! short-circuits to an empty result.

use crate::dom::{self, NodeRef};

/// One structural query: tag name, id and class constraints, all optional,
/// all of which must hold on a matching element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    tag: Option<String>,
    id: Option<String>,
    class: Option<String>,
}

impl Descriptor {
    /// Parse the compact query form.
    ///
    /// `"h2"` matches by tag, `"#bigpic"` by id, `".feature_name"` by class.
    /// Whitespace-separated tokens combine into one descriptor:
    /// `".attribute_list select"` matches `select` elements carrying the
    /// `attribute_list` class.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut descriptor = Descriptor::default();
        for token in query.split_whitespace() {
            if let Some(id) = token.strip_prefix('#') {
                descriptor.id = Some(id.to_string());
            } else if let Some(class) = token.strip_prefix('.') {
                descriptor.class = Some(class.to_string());
            } else {
                descriptor.tag = Some(token.to_ascii_lowercase());
            }
        }
        descriptor
    }

    /// Whether an element node satisfies every constraint.
    ///
    /// Class matching is token membership within the `class` attribute,
    /// never substring matching.
    #[must_use]
    pub fn matches(&self, node: &NodeRef) -> bool {
        if !node.is_element() {
            return false;
        }
        if let Some(tag) = &self.tag {
            if dom::tag_name(node).as_deref() != Some(tag.as_str()) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if dom::attr(node, "id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if let Some(class) = &self.class {
            if !dom::classes(node).iter().any(|c| c == class) {
                return false;
            }
        }
        true
    }
}

/// All descendants of `root` matching `query`, in document order
/// (depth-first, pre-order). `root` itself is never a candidate.
#[must_use]
pub fn select<'a>(root: &NodeRef<'a>, query: &Descriptor) -> Vec<NodeRef<'a>> {
    let mut matches = Vec::new();
    collect(root, query, &mut matches);
    matches
}

fn collect<'a>(node: &NodeRef<'a>, query: &Descriptor, out: &mut Vec<NodeRef<'a>>) {
    for child in dom::child_nodes(node) {
        if query.matches(&child) {
            out.push(child);
        }
        collect(&child, query, out);
    }
}

/// Apply a chain of queries with first-match narrowing.
///
/// The first query runs against `root`; every subsequent query runs against
/// the FIRST match of the query before it. The return value is the final
/// query's full match list. A step with no matches fails the whole chain
/// (empty result) without attempting later steps.
#[must_use]
pub fn select_chain<'a>(root: &NodeRef<'a>, queries: &[Descriptor]) -> Vec<NodeRef<'a>> {
    let mut scope = *root;
    let mut matches = Vec::new();

    for query in queries {
        matches = select(&scope, query);
        match matches.first() {
            Some(first) => scope = *first,
            None => return Vec::new(),
        }
    }

    matches
}

/// `select_chain` over compact query strings.
#[must_use]
pub fn chain<'a>(root: &NodeRef<'a>, queries: &[&str]) -> Vec<NodeRef<'a>> {
    let parsed: Vec<Descriptor> = queries.iter().map(|q| Descriptor::parse(q)).collect();
    select_chain(root, &parsed)
}

/// First match of a single query, if any.
#[must_use]
pub fn first<'a>(root: &NodeRef<'a>, query: &str) -> Option<NodeRef<'a>> {
    select(root, &Descriptor::parse(query)).into_iter().next()
}
