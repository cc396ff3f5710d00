//! Link line parsing.
//!
//! A link line has the shape
//!
//! ```text
//! =>[ \t]+URL([ \t]+DESCRIPTION)?
//! ```
//!
//! where `URL` is a run of non-whitespace bytes. Anything after the URL that
//! is not introduced by a space or tab is ignored.

use std::borrow::Cow;

use memchr::memchr_iter;

use crate::error::LinkError;

/// Link line marker.
pub const LINK_MARKER: &str = "=>";

/// A parsed link line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    /// Link target, still percent-encoded as written.
    pub url: Cow<'a, str>,
    /// Human-readable label. Falls back to the URL.
    pub description: Cow<'a, str>,
}

/// Parse a `=>` line into its URL and description.
///
/// With `replace_gmi_ext`, a URL ending in exactly `.gmi` gets `.html`
/// instead, which is what a mirrored site serves.
///
/// # Example
/// ```
/// use gmi2html::parse_link;
///
/// let link = parse_link("=> /docs/index.gmi  Documentation ", true).unwrap();
/// assert_eq!(link.url, "/docs/index.html");
/// assert_eq!(link.description, "Documentation");
/// ```
pub fn parse_link(line: &str, replace_gmi_ext: bool) -> Result<Link<'_>, LinkError> {
    let malformed = || LinkError::Malformed {
        line: line.to_owned(),
    };

    let rest = line.strip_prefix(LINK_MARKER).ok_or_else(malformed)?;
    let bytes = rest.as_bytes();

    let url_start = skip_blanks(bytes, 0);
    if url_start == 0 {
        return Err(malformed());
    }
    let url_end = scan_token(bytes, url_start);
    if url_end == url_start {
        return Err(malformed());
    }

    let raw_url = &rest[url_start..url_end];
    check_percent_encoding(raw_url, line)?;

    let url: Cow<'_, str> = match raw_url.strip_suffix(".gmi") {
        Some(stem) if replace_gmi_ext => Cow::Owned(format!("{stem}.html")),
        _ => Cow::Borrowed(raw_url),
    };

    let description = if skip_blanks(bytes, url_end) > url_end {
        rest[url_end..].trim()
    } else {
        ""
    };
    let description = if description.is_empty() {
        url.clone()
    } else {
        Cow::Borrowed(description)
    };

    Ok(Link { url, description })
}

/// Advance past spaces and tabs.
#[inline]
fn skip_blanks(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t') {
        pos += 1;
    }
    pos
}

/// Advance to the end of a run of non-whitespace bytes.
#[inline]
fn scan_token(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && !matches!(bytes[pos], b' ' | b'\t' | b'\n' | b'\x0c' | b'\r') {
        pos += 1;
    }
    pos
}

/// Every `%` must open a two-digit hex escape. The decoded bytes are not
/// checked further, so `%E9` is as good as `%C3%A9`.
fn check_percent_encoding(url: &str, line: &str) -> Result<(), LinkError> {
    let bytes = url.as_bytes();
    for pos in memchr_iter(b'%', bytes) {
        let well_formed = bytes
            .get(pos + 1..pos + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(LinkError::InvalidEscape {
                url: url.to_owned(),
                line: line.to_owned(),
            });
        }
    }
    Ok(())
}
