//! Batch orchestration.
//!
//! Walks the configured identifier sequence, funnels every page through
//! the document source and the assembler, and writes the aggregated JSON
//! document once at the end. This is the single catch boundary for
//! per-identifier failures: they are logged with the offending identifier
//! and skipped, never interrupting the range.

use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extractor;
use crate::record::Catalog;
use crate::source::DocumentSource;

/// Summary of a finished run.
#[derive(Debug)]
pub struct RunReport {
    /// Identifiers processed.
    pub attempted: usize,

    /// Records that made it into the output.
    pub extracted: usize,

    /// Identifiers skipped over recoverable failures.
    pub skipped: usize,

    /// Where the output document was written.
    pub output_path: PathBuf,
}

/// Process every configured identifier and write the output document.
///
/// Expects a validated [`Config`]. Recoverable failures skip their
/// identifier; persistence failures abort with the error.
pub fn run(config: &Config) -> Result<RunReport> {
    let source = DocumentSource::new(config)?;

    let mut catalog = Catalog::default();
    let mut attempted = 0usize;

    for id in config.ids() {
        attempted += 1;
        info!("processing product {id}");

        match scrape_one(&source, config, id) {
            Ok(value) => catalog.products.push(value),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => warn!("skipping product {id}: {e}"),
        }
    }

    let output_path = write_catalog(config, &catalog)?;

    let extracted = catalog.products.len();
    info!("wrote {extracted} of {attempted} products to {}", output_path.display());

    Ok(RunReport {
        attempted,
        extracted,
        skipped: attempted - extracted,
        output_path,
    })
}

/// Fetch, assemble and render one identifier.
fn scrape_one(source: &DocumentSource, config: &Config, id: u64) -> Result<serde_json::Value> {
    let doc = source.fetch(id)?;
    let record = extractor::extract_product(&doc, &config.base_url)?;
    Ok(serde_json::to_value(&record)?)
}

/// Write the aggregated document in one shot.
fn write_catalog(config: &Config, catalog: &Catalog) -> Result<PathBuf> {
    fs::create_dir_all(&config.output_dir).map_err(|e| Error::Persistence {
        path: config.output_dir.clone(),
        source: e,
    })?;

    let path = config.output_path();
    let body = serde_json::to_vec(catalog)?;
    fs::write(&path, body).map_err(|e| Error::Persistence {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}
