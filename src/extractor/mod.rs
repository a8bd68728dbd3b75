//! Product assembly.
//!
//! One extraction rule per product attribute, each a fixed selector chain
//! plus its field-specific fallback policy, so a markup change on the site
//! touches exactly one rule. The assembler gates on the title - a page
//! without a resolvable title is not a product page - and merges every
//! other field unconditionally, letting each degrade to its empty value.

mod descriptions;
mod details;
mod extras;
mod fields;
mod features;
mod images;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::record::ProductRecord;

/// Extract one structured record from a parsed product page.
///
/// `base_url` is the origin prefixed onto image paths, e.g.
/// `http://keindl-sport.hr`.
///
/// # Errors
///
/// Returns [`Error::NotAValidProduct`] when the title rule finds nothing;
/// no partial record is ever produced. Every other rule tolerates missing
/// structure by yielding an empty field.
pub fn extract_product(doc: &Document, base_url: &str) -> Result<ProductRecord> {
    let root = dom::root(doc);

    let name = fields::title(&root).ok_or(Error::NotAValidProduct)?;

    Ok(ProductRecord {
        name,
        category: fields::category(&root),
        features: features::features(&root),
        images: images::images(&root, base_url),
        descriptions: descriptions::descriptions(&root),
        extras: extras::extras(&root),
        details: details::details(&root),
        geometry: images::geometry(&root),
    })
}
