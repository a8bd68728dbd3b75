//! Configurable option group rule.
//!
//! `#attributes` lists one group per configurable attribute. Inside a
//! group the first element is the label slot and the second is the value
//! slot (a select or list whose children each carry one option text).

use crate::dom::{self, NodeRef};
use crate::record::Selectable;
use crate::selector;
use crate::text;

/// Extract the option groups in page order.
///
/// A group whose name and options both fail to derive is omitted; a group
/// missing only one of the two is kept with the empty component. Neither
/// case aborts the rest of the list.
pub(crate) fn extras(root: &NodeRef) -> Vec<Selectable> {
    let Some(block) = selector::first(root, "#attributes") else {
        return Vec::new();
    };

    let mut groups = Vec::new();
    for group in dom::element_children(&block) {
        let slots = dom::element_children(&group);
        if slots.is_empty() {
            continue;
        }

        let name = slots
            .first()
            .and_then(dom::first_text_child)
            .map(|t| text::trim_label(&t))
            .unwrap_or_default();

        let options = slots.get(1).map(|slot| option_texts(slot)).unwrap_or_default();

        if name.is_empty() && options.is_empty() {
            continue;
        }
        groups.push(Selectable { name, options });
    }
    groups
}

/// First text of every child in the value slot; childless entries
/// (separators, blank runs) contribute nothing.
fn option_texts(slot: &NodeRef) -> Vec<String> {
    dom::element_children(slot)
        .iter()
        .filter_map(dom::first_text_child)
        .map(|t| text::clean_trimmed(&t))
        .filter(|t| !t.is_empty())
        .collect()
}
