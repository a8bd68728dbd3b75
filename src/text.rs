//! Text cleanup shared by the field extractors.
//!
//! Markup entities are already decoded by the parser; what remains is
//! site-level noise: non-breaking spaces inside names and the `" : "`
//! suffixes the catalog puts on labels.

/// Decoded `&nbsp;`.
const NBSP: char = '\u{a0}';

/// Normalize decoded text: non-breaking spaces become plain spaces.
#[must_use]
pub fn clean(s: &str) -> String {
    s.replace(NBSP, " ")
}

/// `clean` plus surrounding-whitespace trim, for display fields.
#[must_use]
pub fn clean_trimmed(s: &str) -> String {
    clean(s).trim().to_string()
}

/// Strip label decoration: surrounding whitespace and colons.
///
/// `"Frame size :"` and `"Frame size:"` both become `"Frame size"`.
#[must_use]
pub fn trim_label(s: &str) -> String {
    clean(s)
        .trim_matches(|c: char| c.is_whitespace() || c == ':')
        .to_string()
}
