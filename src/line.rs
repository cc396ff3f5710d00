//! Line classification.
//!
//! Gemtext is strictly line-oriented: the kind of a line is decided by its
//! prefix alone, checked in a fixed priority order. Prefixes overlap (`###`
//! also starts with `#`), so the order matters.

use crate::link::LINK_MARKER;

/// Preformatting toggle marker.
pub const FENCE_MARKER: &str = "```";

/// What a single gemtext line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `=>` line, holding the whole raw line for the link parser.
    Link(&'a str),
    /// ```` ``` ```` line. The rest of the line (alt text) is dropped.
    Fence,
    /// `#`, `##` or `###` line with its trimmed text.
    Heading {
        /// Heading level (1-3).
        level: u8,
        /// Heading text after the marker, trimmed.
        text: &'a str,
    },
    /// `*` line with its trimmed text.
    ListItem(&'a str),
    /// `>` line with its trimmed text.
    Quote(&'a str),
    /// Anything else, untouched. Rendered as a paragraph or, inside a
    /// preformatted block, verbatim.
    Text(&'a str),
}

/// Classify a raw line (without its trailing `\n`).
///
/// # Example
/// ```
/// use gmi2html::{classify, Line};
///
/// assert_eq!(classify("## Setup "), Line::Heading { level: 2, text: "Setup" });
/// assert_eq!(classify("*"), Line::ListItem(""));
/// ```
pub fn classify(line: &str) -> Line<'_> {
    if line.starts_with(LINK_MARKER) {
        return Line::Link(line);
    }
    if line.starts_with(FENCE_MARKER) {
        return Line::Fence;
    }
    if let Some(text) = line.strip_prefix("###") {
        return Line::Heading {
            level: 3,
            text: text.trim(),
        };
    }
    if let Some(text) = line.strip_prefix("##") {
        return Line::Heading {
            level: 2,
            text: text.trim(),
        };
    }
    if let Some(text) = line.strip_prefix('#') {
        return Line::Heading {
            level: 1,
            text: text.trim(),
        };
    }
    if let Some(text) = line.strip_prefix('*') {
        return Line::ListItem(text.trim());
    }
    if let Some(text) = line.strip_prefix('>') {
        return Line::Quote(text.trim());
    }
    Line::Text(line)
}
