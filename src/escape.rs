//! HTML escaping for gemtext fragments.
//!
//! Scans for the first escapable byte with `memchr`, then bulk-copies the
//! segments between escapes. Every escape sequence is ASCII, so escaping
//! valid UTF-8 always yields valid UTF-8.
//!
//! Text content and the double-quoted `href` share one table: both quote
//! characters are escaped everywhere, so an apostrophe in prose renders the
//! same as one in a URL.

use memchr::{memchr2, memchr3};

/// Bytes escaped in text content and attribute values.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Escape HTML text or a quoted attribute value into output buffer.
///
/// Escapes `<`, `>`, `&`, `"` and `'`.
///
/// # Example
/// ```
/// use gmi2html::escape::escape_html_into;
///
/// let mut out = Vec::new();
/// escape_html_into(&mut out, b"<it's> & \"more\"");
/// assert_eq!(out, b"&lt;it&#39;s&gt; &amp; &quot;more&quot;");
/// ```
pub fn escape_html_into(out: &mut Vec<u8>, input: &[u8]) {
    let Some(mut pos) = first_escape(input) else {
        out.extend_from_slice(input);
        return;
    };

    out.extend_from_slice(&input[..pos]);

    while pos < input.len() {
        let scan_start = pos;
        while pos < input.len() && !ESCAPE_TABLE[input[pos] as usize] {
            pos += 1;
        }
        out.extend_from_slice(&input[scan_start..pos]);

        if let Some(&b) = input.get(pos) {
            out.extend_from_slice(entity_for(b));
            pos += 1;
        }
    }
}

#[inline]
fn entity_for(b: u8) -> &'static [u8] {
    match b {
        b'<' => b"&lt;",
        b'>' => b"&gt;",
        b'&' => b"&amp;",
        b'"' => b"&quot;",
        b'\'' => b"&#39;",
        // Only reached through the lookup table above.
        _ => b"",
    }
}

#[inline]
fn first_escape(input: &[u8]) -> Option<usize> {
    match (memchr3(b'<', b'>', b'&', input), memchr2(b'"', b'\'', input)) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
