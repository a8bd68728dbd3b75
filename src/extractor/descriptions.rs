//! Description chapters rule.
//!
//! `#idTab1` holds one child per description chapter. The usable text sits
//! in the chapter's first `span`, which is either a single text run or a
//! mix of text nodes and inline elements (line breaks, emphasis) whose
//! leading text must be stitched back together in order.

use crate::dom::{self, NodeRef};
use crate::selector;
use crate::text;

/// Extract the description chapters in page order.
pub(crate) fn descriptions(root: &NodeRef) -> Vec<String> {
    let Some(tab) = selector::first(root, "#idTab1") else {
        return Vec::new();
    };

    let mut chapters = Vec::new();
    for chapter in dom::element_children(&tab) {
        let Some(span) = selector::first(&chapter, "span") else {
            continue;
        };

        let runs = dom::child_nodes(&span);
        let body = match runs.len() {
            0 => continue,
            1 => dom::text(&runs[0]).to_string(),
            _ => flatten_runs(&runs),
        };

        chapters.push(text::clean(&body));
    }
    chapters
}

/// Concatenate a mixed run list: text nodes verbatim, element nodes via
/// their leading text, anything else dropped.
fn flatten_runs(runs: &[NodeRef]) -> String {
    let mut body = String::new();
    for run in runs {
        if run.is_text() {
            body.push_str(&run.text());
        } else if run.is_element() {
            if let Some(first) = dom::child_nodes(run).first() {
                if first.is_text() {
                    body.push_str(&first.text());
                }
            }
        }
    }
    body
}
