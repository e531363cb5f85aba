//! Placeholder scanning for text content.
//!
//! A placeholder is `{{` + one or more non-`}` characters + `}}`. The key is
//! the interior trimmed of surrounding whitespace. Scanning resumes after a
//! complete match, and one position past a `{{` that never completes, so
//! overlapping brace runs behave like a left-to-right regex scan.

use memchr::{memchr, memmem};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The full `{{ … }}` slice as it appears in the content.
    pub raw: &'a str,
    /// Trimmed lookup key.
    pub key: &'a str,
}

pub fn placeholders(content: &str) -> Vec<Placeholder<'_>> {
    let bytes = content.as_bytes();
    let finder = memmem::Finder::new("{{");
    let mut out = Vec::new();
    let mut pos = 0;

    while pos + 4 <= bytes.len() {
        let Some(rel) = finder.find(&bytes[pos..]) else {
            break;
        };
        let start = pos + rel;
        let interior = start + 2;
        let Some(brace_rel) = memchr(b'}', &bytes[interior..]) else {
            break;
        };
        let brace = interior + brace_rel;
        if brace == interior || !bytes[brace..].starts_with(b"}}") {
            // empty interior or a lone closing brace: no match at this start
            pos = start + 1;
            continue;
        }
        out.push(Placeholder {
            raw: &content[start..brace + 2],
            key: content[interior..brace].trim(),
        });
        pos = brace + 2;
    }

    out
}
