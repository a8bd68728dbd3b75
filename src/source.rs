//! Cache-aware page acquisition.
//!
//! Pages are fetched once and kept as raw markup on disk, one file per
//! identifier. A cached entry that no longer parses falls through to a
//! live fetch, and every live round-trip is followed by a fixed pause so
//! a range run never hammers the origin.

use std::fs;
use std::thread;

use log::{debug, info};
use reqwest::blocking::Client;

use crate::config::Config;
use crate::dom::{self, Document};
use crate::encoding;
use crate::error::{Error, Result};

/// Obtains parsed document trees by product identifier.
pub struct DocumentSource {
    client: Client,
    config: Config,
}

impl DocumentSource {
    /// Build the source and its HTTP client.
    pub fn new(config: &Config) -> Result<DocumentSource> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(DocumentSource { client, config: config.clone() })
    }

    /// Obtain the parsed page for one identifier, from cache when enabled
    /// and present, live otherwise.
    ///
    /// # Errors
    ///
    /// `Transport` and `Parse` errors are per-identifier and recoverable;
    /// a failed cache write is a `Persistence` error and fatal.
    pub fn fetch(&self, id: u64) -> Result<Document> {
        if self.config.use_cache {
            if let Some(doc) = self.load_cached(id) {
                return Ok(doc);
            }
        }
        self.fetch_live(id)
    }

    fn load_cached(&self, id: u64) -> Option<Document> {
        let raw = fs::read(self.config.cache_path(id)).ok()?;
        match parse_page(&encoding::decode(&raw)) {
            Ok(doc) => {
                debug!("cache hit for product {id}");
                Some(doc)
            }
            Err(_) => {
                debug!("cache entry for product {id} unusable, refetching");
                None
            }
        }
    }

    fn fetch_live(&self, id: u64) -> Result<Document> {
        let url = self.config.page_url(id);
        info!("fetching {url}");

        let response = self.client.get(&url).send()?.error_for_status()?;
        let body = response.bytes()?;

        // Raw markup is persisted before parsing: a page that fails to
        // parse today can be re-examined from cache without a refetch.
        self.persist(id, &body)?;

        thread::sleep(self.config.fetch_delay);

        parse_page(&encoding::decode(&body))
    }

    fn persist(&self, id: u64, body: &[u8]) -> Result<()> {
        let dir = &self.config.cache_dir;
        fs::create_dir_all(dir).map_err(|e| Error::Persistence {
            path: dir.clone(),
            source: e,
        })?;

        let path = self.config.cache_path(id);
        fs::write(&path, body).map_err(|e| Error::Persistence { path, source: e })
    }
}

/// Parse a decoded body into a usable tree.
///
/// The parser itself accepts anything, so usability is an emptiness check:
/// a blank body means the origin served nothing worth extracting.
pub(crate) fn parse_page(body: &str) -> Result<Document> {
    if body.trim().is_empty() {
        return Err(Error::Parse("empty page body".to_string()));
    }
    Ok(dom::parse(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_config(cache_dir: &std::path::Path) -> Config {
        Config {
            // Nothing listens here; live fetches fail fast.
            url_template: "http://127.0.0.1:9/product.php?id_product=".to_string(),
            use_cache: true,
            cache_dir: cache_dir.to_path_buf(),
            fetch_delay: Duration::ZERO,
            request_timeout: Duration::from_millis(250),
            ..Config::default()
        }
    }

    #[test]
    fn empty_body_is_not_a_usable_tree() {
        assert!(matches!(parse_page(""), Err(Error::Parse(_))));
        assert!(matches!(parse_page("  \n\t "), Err(Error::Parse(_))));
        assert!(parse_page("<html><body>x</body></html>").is_ok());
    }

    #[test]
    fn cached_page_is_served_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let config = offline_config(dir.path());
        fs::write(
            config.cache_path(7),
            "<div id=\"primary_block\"><h2>Cached product</h2></div>",
        )
        .unwrap();

        let source = DocumentSource::new(&config).unwrap();
        let doc = source.fetch(7).unwrap();
        assert_eq!(&*doc.select("h2").text(), "Cached product");
    }

    #[test]
    fn unusable_cache_entry_falls_through_to_live_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let config = offline_config(dir.path());
        fs::write(config.cache_path(7), "   ").unwrap();

        let source = DocumentSource::new(&config).unwrap();
        // The live fetch has nowhere to go, so the fall-through surfaces
        // as a transport error rather than a silent cache hit.
        assert!(matches!(source.fetch(7), Err(Error::Transport(_))));
    }

    #[test]
    fn cache_disabled_ignores_cache_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            use_cache: false,
            ..offline_config(dir.path())
        };
        fs::write(
            config.cache_path(7),
            "<div id=\"primary_block\"><h2>Stale</h2></div>",
        )
        .unwrap();

        let source = DocumentSource::new(&config).unwrap();
        assert!(matches!(source.fetch(7), Err(Error::Transport(_))));
    }
}
