//! Short feature table rule.
//!
//! Rows live under `.product_short_features_list` in a conventional
//! `table > tbody > tr` shell. The value cell comes in three shapes the
//! markup mixes freely: an `.editable` sub-node whose text is taken
//! verbatim, an availability marker, or plain text.

use std::collections::BTreeMap;

use crate::dom::{self, NodeRef};
use crate::selector;
use crate::text;

/// Availability marker translations used by the feed consumer.
const AVAILABLE: &str = "Dostupno";
const NOT_AVAILABLE: &str = "Nedostupno";

/// Extract the short feature table. Duplicate keys overwrite.
pub(crate) fn features(root: &NodeRef) -> BTreeMap<String, String> {
    let rows = selector::chain(root, &[".product_short_features_list", "table", "tbody", "tr"]);

    let mut table = BTreeMap::new();
    for row in rows {
        if let Some((key, value)) = feature_pair(&row) {
            table.insert(key, value);
        }
    }
    table
}

/// One (key, value) pair from a feature row; `None` when the row lacks
/// a name or value cell.
fn feature_pair(row: &NodeRef) -> Option<(String, String)> {
    let name_cell = selector::first(row, ".feature_name")?;
    let key = text::clean_trimmed(&dom::first_text_child(&name_cell)?);

    let value_cell = selector::first(row, ".feature_value")?;
    Some((key, feature_value(&value_cell)))
}

/// Resolve a value cell.
///
/// `.editable` wins over availability markers; its text is taken verbatim,
/// untrimmed. Only then are `.not_available` / `.available` consulted, and
/// plain trimmed text is the last resort.
fn feature_value(cell: &NodeRef) -> String {
    if let Some(editable) = selector::first(cell, ".editable") {
        return text::clean(&dom::first_text_child(&editable).unwrap_or_default());
    }

    if selector::first(cell, ".not_available").is_some() {
        return NOT_AVAILABLE.to_string();
    }
    if selector::first(cell, ".available").is_some() {
        return AVAILABLE.to_string();
    }

    text::clean_trimmed(&dom::first_text_child(cell).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn rows(body: &str) -> String {
        format!(
            r#"<div class="product_short_features_list"><table><tbody>{body}</tbody></table></div>"#
        )
    }

    #[test]
    fn plain_rows_become_trimmed_pairs() {
        let doc = dom::parse(&rows(
            r#"<tr><td class="feature_name">Weight</td><td class="feature_value">  9.5 kg
            </td></tr>"#,
        ));
        let table = features(&dom::root(&doc));
        assert_eq!(table.get("Weight").map(String::as_str), Some("9.5 kg"));
    }

    #[test]
    fn not_available_marker_wins_over_plain_text() {
        let doc = dom::parse(&rows(
            r#"<tr><td class="feature_name">Stock</td>
                <td class="feature_value">ignored <span class="not_available">x</span></td></tr>"#,
        ));
        let table = features(&dom::root(&doc));
        assert_eq!(table.get("Stock").map(String::as_str), Some("Nedostupno"));
    }

    #[test]
    fn available_marker_wins_over_plain_text() {
        let doc = dom::parse(&rows(
            r#"<tr><td class="feature_name">Stock</td>
                <td class="feature_value">ignored <span class="available">x</span></td></tr>"#,
        ));
        let table = features(&dom::root(&doc));
        assert_eq!(table.get("Stock").map(String::as_str), Some("Dostupno"));
    }

    #[test]
    fn editable_takes_precedence_over_markers() {
        let doc = dom::parse(&rows(
            r#"<tr><td class="feature_name">Stock</td>
                <td class="feature_value">
                    <span class="not_available">x</span>
                    <span class="editable"> 3 left </span>
                </td></tr>"#,
        ));
        let table = features(&dom::root(&doc));
        // Verbatim: no trimming of the editable text.
        assert_eq!(table.get("Stock").map(String::as_str), Some(" 3 left "));
    }

    #[test]
    fn rows_missing_cells_are_skipped() {
        let doc = dom::parse(&rows(
            r#"<tr><td class="feature_name">Lonely</td></tr>
               <tr><td class="feature_value">no name</td></tr>
               <tr><td class="feature_name">Kept</td><td class="feature_value">v</td></tr>"#,
        ));
        let table = features(&dom::root(&doc));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Kept").map(String::as_str), Some("v"));
    }

    #[test]
    fn duplicate_keys_overwrite() {
        let doc = dom::parse(&rows(
            r#"<tr><td class="feature_name">Color</td><td class="feature_value">red</td></tr>
               <tr><td class="feature_name">Color</td><td class="feature_value">blue</td></tr>"#,
        ));
        let table = features(&dom::root(&doc));
        assert_eq!(table.get("Color").map(String::as_str), Some("blue"));
    }

    #[test]
    fn missing_table_yields_empty_map() {
        let doc = dom::parse("<div><p>nothing here</p></div>");
        assert!(features(&dom::root(&doc)).is_empty());
    }
}
