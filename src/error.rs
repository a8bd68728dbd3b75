//! Error types for catalog scraping.
//!
//! This module defines the error taxonomy shared by the document source,
//! the extraction engine and the batch orchestrator.

use std::path::PathBuf;

/// Error type for fetch, extraction and output operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page body could not be retrieved over HTTP.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The markup could not be parsed into a usable document tree.
    #[error("no usable document tree: {0}")]
    Parse(String),

    /// The required title extraction failed; the page is not a product.
    #[error("not a valid product")]
    NotAValidProduct,

    /// An assembled record could not be converted to JSON.
    #[error("record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A cache or output file could not be written.
    #[error("cannot persist {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The run configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error must abort the whole run.
    ///
    /// Per-identifier failures (transport, parse, invalid product,
    /// serialization) are recoverable: the batch logs them and moves on.
    /// Persistence and configuration failures mean the run cannot produce
    /// a trustworthy result.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Persistence { .. } | Error::Config(_))
    }
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
