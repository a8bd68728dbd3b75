//! # catalog-scrape
//!
//! Structured product extraction for a catalog storefront: pages are
//! fetched by numeric identifier (or read back from an on-disk cache),
//! parsed once, and run through a set of fixed extraction rules that
//! tolerate the site's markup inconsistencies. Successful records are
//! aggregated into a single JSON document.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_scrape::parse_product;
//!
//! let html = r#"<html><body>
//!     <div id="primary_block"><h2>Trail Bike 29</h2></div>
//!     <img id="bigpic" src="/img/large/1.jpg">
//! </body></html>"#;
//!
//! let record = parse_product(html, "http://shop.example")?;
//! assert_eq!(record.name, "Trail Bike 29");
//! assert_eq!(record.images[1], "http://shop.example/img/thickbox/1.jpg");
//! # Ok::<(), catalog_scrape::Error>(())
//! ```
//!
//! Batch runs go through [`Config`] and [`batch::run`], which add the
//! cache, the inter-request pacing and the single-shot output file.

mod config;
mod error;
mod record;

/// Batch orchestration over an identifier range.
pub mod batch;

/// DOM adapter over the markup parser.
pub mod dom;

/// Charset sniffing and transcoding for fetched pages.
pub mod encoding;

/// Field extraction rules and product assembly.
pub mod extractor;

/// Narrow structural selection with chained first-match narrowing.
pub mod selector;

/// Cache-aware page acquisition.
pub mod source;

/// Text cleanup shared by the extraction rules.
pub mod text;

// Public API - re-exports
pub use batch::{run, RunReport};
pub use config::Config;
pub use error::{Error, Result};
pub use extractor::extract_product;
pub use record::{Catalog, ProductRecord, Selectable};

/// Parse markup and assemble one product record.
///
/// Convenience wrapper over [`extract_product`] for callers that already
/// hold the page body. `base_url` is prefixed onto image paths.
///
/// # Errors
///
/// [`Error::Parse`] on an empty body, [`Error::NotAValidProduct`] when the
/// page has no resolvable title.
pub fn parse_product(html: &str, base_url: &str) -> Result<ProductRecord> {
    let doc = source::parse_page(html)?;
    extractor::extract_product(&doc, base_url)
}
