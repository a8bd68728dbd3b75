//! Run configuration.
//!
//! One immutable `Config` value describes a whole scraping run and is passed
//! explicitly into the batch orchestrator; nothing here lives in process-wide
//! state. The CLI binary builds it from flags, tests build it literally.

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Configuration for one scraping run.
///
/// All fields are public for easy construction. Use `Default::default()`
/// for the catalog's standard settings and override what differs:
///
/// ```rust
/// use catalog_scrape::Config;
///
/// let config = Config {
///     single: Some(1200),
///     use_cache: true,
///     ..Config::default()
/// };
/// assert_eq!(config.ids().collect::<Vec<_>>(), vec![1200]);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Product page URL prefix; the numeric identifier is appended as-is.
    pub url_template: String,

    /// Origin prefix for image and diagram URLs. When empty it is derived
    /// from `url_template` during `validate`.
    pub base_url: String,

    /// First identifier of the range (inclusive).
    pub min_id: u64,

    /// Last identifier of the range (inclusive).
    pub max_id: u64,

    /// When set, process exactly this identifier instead of the range.
    pub single: Option<u64>,

    /// Read pages from the on-disk cache when present.
    pub use_cache: bool,

    /// Directory holding one raw-markup file per identifier.
    pub cache_dir: PathBuf,

    /// Directory the output document is written into.
    pub output_dir: PathBuf,

    /// Output file name within `output_dir`.
    pub output_file: String,

    /// Pause after every live fetch, so the origin is never hammered.
    pub fetch_delay: Duration,

    /// Per-request timeout for the HTTP client.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url_template: "http://keindl-sport.hr/product.php?id_product=".to_string(),
            base_url: String::new(),
            min_id: 1,
            max_id: 2100,
            single: None,
            use_cache: false,
            cache_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("out"),
            output_file: "products.json".to_string(),
            fetch_delay: Duration::from_secs(1),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Check the configuration and fill in the derived base URL.
    ///
    /// Fails on an unparsable URL template, an inverted range or a missing
    /// output file name. Meant to run once at startup, before any fetch.
    pub fn validate(mut self) -> Result<Config> {
        let url = Url::parse(&self.url_template)
            .map_err(|e| Error::Config(format!("bad url template {:?}: {e}", self.url_template)))?;

        if self.base_url.is_empty() {
            let origin = url.origin().ascii_serialization();
            if origin == "null" {
                return Err(Error::Config(format!(
                    "cannot derive a base url from {:?}",
                    self.url_template
                )));
            }
            self.base_url = origin;
        }

        if self.single.is_none() && self.min_id > self.max_id {
            return Err(Error::Config(format!(
                "empty identifier range {}..={}",
                self.min_id, self.max_id
            )));
        }

        if self.output_file.is_empty() {
            return Err(Error::Config("output file name is empty".to_string()));
        }

        Ok(self)
    }

    /// The identifiers this run processes, ascending.
    #[must_use]
    pub fn ids(&self) -> RangeInclusive<u64> {
        match self.single {
            Some(id) => id..=id,
            None => self.min_id..=self.max_id,
        }
    }

    /// Full page URL for one identifier.
    #[must_use]
    pub fn page_url(&self, id: u64) -> String {
        format!("{}{id}", self.url_template)
    }

    /// Cache file path for one identifier.
    #[must_use]
    pub fn cache_path(&self, id: u64) -> PathBuf {
        self.cache_dir.join(format!("product_{id}.txt"))
    }

    /// Output file path.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_derived_from_template() {
        let config = Config::default().validate().unwrap();
        assert_eq!(config.base_url, "http://keindl-sport.hr");
    }

    #[test]
    fn explicit_base_url_wins() {
        let config = Config {
            base_url: "https://cdn.example.com".to_string(),
            ..Config::default()
        };
        let config = config.validate().unwrap();
        assert_eq!(config.base_url, "https://cdn.example.com");
    }

    #[test]
    fn single_overrides_range() {
        let config = Config { single: Some(7), min_id: 1, max_id: 5, ..Config::default() };
        assert_eq!(config.ids().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn range_is_inclusive_and_ascending() {
        let config = Config { min_id: 3, max_id: 5, ..Config::default() };
        assert_eq!(config.ids().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = Config { min_id: 10, max_id: 2, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_range_allowed_with_single() {
        let config = Config { min_id: 10, max_id: 2, single: Some(4), ..Config::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bad_template_is_rejected() {
        let config = Config { url_template: "not a url".to_string(), ..Config::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn paths_are_keyed_by_identifier() {
        let config = Config::default();
        assert_eq!(config.cache_path(42), PathBuf::from("data/product_42.txt"));
        assert_eq!(config.page_url(42), "http://keindl-sport.hr/product.php?id_product=42");
        assert_eq!(config.output_path(), PathBuf::from("out/products.json"));
    }
}
