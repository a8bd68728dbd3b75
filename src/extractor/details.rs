//! Extended feature table rule.
//!
//! `#idTab2` carries the long spec sheet as `tr` rows of
//! `.product_feature_name` / `.product_feature_value` cells. Labels on
//! this site end in a decorative `" :"` which is stripped from both sides
//! of the pair.

use std::collections::BTreeMap;

use crate::dom::{self, NodeRef};
use crate::selector;
use crate::text;

/// Extract the extended feature table. Rows missing either cell are
/// skipped; duplicate keys overwrite.
pub(crate) fn details(root: &NodeRef) -> BTreeMap<String, String> {
    let rows = selector::chain(root, &["#idTab2", "tr"]);

    let mut table = BTreeMap::new();
    for row in rows {
        let Some(name_cell) = selector::first(&row, ".product_feature_name") else {
            continue;
        };
        let Some(value_cell) = selector::first(&row, ".product_feature_value") else {
            continue;
        };

        let key = text::trim_label(&dom::first_text_child(&name_cell).unwrap_or_default());
        let value = text::trim_label(&dom::first_text_child(&value_cell).unwrap_or_default());
        if key.is_empty() {
            continue;
        }
        table.insert(key, value);
    }
    table
}
