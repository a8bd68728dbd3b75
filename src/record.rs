//! Output data model.
//!
//! One `ProductRecord` per successfully extracted page, aggregated into a
//! `Catalog` for the final JSON document. Field names are serialized
//! capitalized, matching the downstream consumer of the feed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A configurable option group on a product (size, color, ...) together
/// with its allowed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Selectable {
    /// Display name of the option group.
    pub name: String,

    /// Allowed values, in page order.
    pub options: Vec<String>,
}

/// Structured data extracted from one product page.
///
/// Only `name` is guaranteed non-empty: assembly refuses pages without a
/// resolvable title, and every other field degrades to its empty value
/// when the markup lacks the corresponding structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductRecord {
    /// Product title. Never empty.
    pub name: String,

    /// Breadcrumb category, possibly empty.
    pub category: String,

    /// Short feature table. Sorted keys keep repeated runs byte-identical.
    pub features: BTreeMap<String, String>,

    /// Image URLs as (normal, zoomed) adjacent pairs: the primary image
    /// pair first, then one pair per thumbnail in page order.
    pub images: Vec<String>,

    /// Description chapters, in page order.
    pub descriptions: Vec<String>,

    /// Configurable option groups, in page order.
    pub extras: Vec<Selectable>,

    /// Extended feature table.
    pub details: BTreeMap<String, String>,

    /// Geometry diagram URL, or empty when the page has none.
    pub geometry: String,
}

/// The aggregated output document: `{"Products": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "Products")]
    pub products: Vec<serde_json::Value>,
}
