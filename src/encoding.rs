//! Character encoding handling for fetched pages.
//!
//! Catalog storefronts still serve legacy encodings (the site this targets
//! historically used windows-1250 alongside UTF-8), so raw page bytes are
//! sniffed for a charset declaration and transcoded before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Matches the charset token of either meta form:
/// `<meta charset="...">` and `<meta http-equiv=... content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([a-zA-Z0-9_-]+)"#).expect("valid regex")
});

/// How many leading bytes to inspect for a charset declaration.
const SNIFF_WINDOW: usize = 2048;

/// Detect the character encoding declared in the page head.
///
/// Falls back to UTF-8 when no declaration is found or the label is unknown.
#[must_use]
pub fn sniff(raw: &[u8]) -> &'static Encoding {
    let head = &raw[..raw.len().min(SNIFF_WINDOW)];
    let head = String::from_utf8_lossy(head);

    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode raw page bytes to a UTF-8 string.
///
/// Invalid sequences are replaced rather than rejected; a page with a few
/// broken bytes is still worth extracting.
#[must_use]
pub fn decode(raw: &[u8]) -> String {
    let encoding = sniff(raw);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(raw).into_owned();
    }

    let (decoded, _, _) = encoding.decode(raw);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniff_meta_charset() {
        let raw = br#"<html><head><meta charset="windows-1250"></head></html>"#;
        assert_eq!(sniff(raw).name(), "windows-1250");
    }

    #[test]
    fn sniff_http_equiv_form() {
        let raw =
            br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-2">"#;
        // encoding_rs maps ISO-8859-2 per WHATWG label rules
        assert_eq!(sniff(raw).name(), "ISO-8859-2");
    }

    #[test]
    fn sniff_defaults_to_utf8() {
        assert_eq!(sniff(b"<html><body>plain</body></html>"), UTF_8);
        assert_eq!(sniff(br#"<meta charset="no-such-label">"#), UTF_8);
    }

    #[test]
    fn decode_legacy_bytes() {
        // windows-1250: 0xE8 is "č"
        let raw = b"<html><head><meta charset=\"windows-1250\"></head><body>Ko\xE8nica</body></html>";
        let text = decode(raw);
        assert!(text.contains("Kočnica"));
    }

    #[test]
    fn decode_utf8_passthrough() {
        let raw = "<html><body>Brzina — čelik</body></html>".as_bytes();
        assert_eq!(decode(raw), "<html><body>Brzina — čelik</body></html>");
    }

    #[test]
    fn decode_tolerates_invalid_sequences() {
        let raw = b"<html><body>ok \xFF\xFE still ok</body></html>";
        let text = decode(raw);
        assert!(text.contains("ok"));
        assert!(text.contains("still ok"));
    }
}
