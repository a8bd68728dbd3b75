//! Title and category rules.

use crate::dom::{self, NodeRef};
use crate::selector;
use crate::text;

/// Product title: `#primary_block` narrowed to its first `h2`.
///
/// `None` when the chain finds nothing or the heading carries no text;
/// the assembler turns that into the not-a-product error.
pub(crate) fn title(root: &NodeRef) -> Option<String> {
    let headings = selector::chain(root, &["#primary_block", "h2"]);
    let heading = headings.first()?;

    let raw = dom::first_text_child(heading)?;
    let title = text::clean_trimmed(&raw);
    (!title.is_empty()).then_some(title)
}

/// Breadcrumb category: the text two levels inside `.navigation_end`.
///
/// The site nests the category name in a link inside the breadcrumb
/// terminator. Empty string when the structure is absent.
pub(crate) fn category(root: &NodeRef) -> String {
    let Some(nav) = selector::first(root, ".navigation_end") else {
        return String::new();
    };

    let Some(link) = dom::significant_children(&nav).into_iter().next() else {
        return String::new();
    };
    let Some(inner) = dom::significant_children(&link).into_iter().next() else {
        return String::new();
    };

    text::clean_trimmed(&dom::text(&inner))
}
