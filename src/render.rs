//! HTML output writer and per-line fragment emitters.
//!
//! Every fragment shape is fixed; only escaped text is substituted into it.

use std::string::FromUtf8Error;

use crate::escape;
use crate::link::Link;

/// Bullet prepended to list items.
pub const BULLET: &str = "•";

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use gmi2html::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.heading(1, "Fish & Chips");
/// writer.text_line("<b>not bold</b>");
///
/// let html = writer.into_string().unwrap();
/// assert_eq!(
///     html,
///     "<h1 class=\"gemini-heading-1\">Fish &amp; Chips</h1>\
///      <p class=\"gemini-textline\">&lt;b&gt;not bold&lt;/b&gt;</p>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with capacity based on expected input size.
    ///
    /// Markup roughly doubles short gemtext lines, so reserve for that.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len * 2),
        }
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    /// Write a static string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write already-rendered HTML without escaping.
    #[inline]
    pub fn write_html(&mut self, html: &str) {
        self.out.extend_from_slice(html.as_bytes());
    }

    /// Write text content or an attribute value with HTML escaping.
    #[inline]
    pub fn write_escaped(&mut self, text: &str) {
        escape::escape_html_into(&mut self.out, text.as_bytes());
    }

    /// `<p class="gemini-textline">`
    pub fn text_line(&mut self, text: &str) {
        self.write_str("<p class=\"gemini-textline\">");
        self.write_escaped(text);
        self.write_str("</p>");
    }

    /// `<h1>` through `<h3>`. Levels outside 1-3 are clamped.
    pub fn heading(&mut self, level: u8, text: &str) {
        let (open, close) = match level {
            0 | 1 => ("<h1 class=\"gemini-heading-1\">", "</h1>"),
            2 => ("<h2 class=\"gemini-heading-2\">", "</h2>"),
            _ => ("<h3 class=\"gemini-heading-3\">", "</h3>"),
        };
        self.write_str(open);
        self.write_escaped(text);
        self.write_str(close);
    }

    pub fn list_item(&mut self, text: &str) {
        self.write_str("<p class=\"gemini-list-item\">");
        self.write_str(BULLET);
        self.write_str(" ");
        self.write_escaped(text);
        self.write_str("</p>");
    }

    pub fn blockquote(&mut self, text: &str) {
        self.write_str("<blockquote class=\"gemini-blockquote\">");
        self.write_escaped(text);
        self.write_str("</blockquote>");
    }

    pub fn link(&mut self, link: &Link<'_>) {
        self.write_str("<div class=\"gemini-link-container\"><a href=\"");
        self.write_escaped(&link.url);
        self.write_str("\">");
        self.write_escaped(&link.description);
        self.write_str("</a></div>");
    }

    /// Opening tag of a preformatted block. The newline keeps the first
    /// verbatim line from being swallowed by the HTML parser.
    pub fn preformatted_start(&mut self) {
        self.write_str("<pre class=\"gemini-preformatted\">\n");
    }

    /// One line inside a preformatted block, newline-terminated.
    pub fn preformatted_line(&mut self, line: &str) {
        self.write_escaped(line);
        self.out.push(b'\n');
    }

    pub fn preformatted_end(&mut self) {
        self.write_str("</pre>");
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get the output as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Mutable access to the underlying buffer.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut Vec<u8> {
        &mut self.out
    }

    /// Consume the writer and return the output as a `String`.
    pub fn into_string(self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.out)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    fn emit(f: impl FnOnce(&mut HtmlWriter)) -> String {
        let mut writer = HtmlWriter::new();
        f(&mut writer);
        writer.into_string().unwrap()
    }

    #[test]
    fn test_text_line() {
        assert_eq!(
            emit(|w| w.text_line("This is a simple text line")),
            "<p class=\"gemini-textline\">This is a simple text line</p>"
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(emit(|w| w.heading(1, "A")), "<h1 class=\"gemini-heading-1\">A</h1>");
        assert_eq!(emit(|w| w.heading(2, "B")), "<h2 class=\"gemini-heading-2\">B</h2>");
        assert_eq!(emit(|w| w.heading(3, "C")), "<h3 class=\"gemini-heading-3\">C</h3>");
    }

    #[test]
    fn test_list_item_has_bullet() {
        assert_eq!(
            emit(|w| w.list_item("Item 1")),
            "<p class=\"gemini-list-item\">• Item 1</p>"
        );
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            emit(|w| w.blockquote("This is a quote")),
            "<blockquote class=\"gemini-blockquote\">This is a quote</blockquote>"
        );
    }

    #[test]
    fn test_link_escapes_both_parts() {
        let link = Link {
            url: Cow::Borrowed("/q?a=1&b='2'"),
            description: Cow::Borrowed("<Search>"),
        };
        assert_eq!(
            emit(|w| w.link(&link)),
            "<div class=\"gemini-link-container\"><a href=\"/q?a=1&amp;b=&#39;2&#39;\">&lt;Search&gt;</a></div>"
        );
    }

    #[test]
    fn test_preformatted_block() {
        let html = emit(|w| {
            w.preformatted_start();
            w.preformatted_line("if a < b {");
            w.preformatted_end();
        });
        assert_eq!(html, "<pre class=\"gemini-preformatted\">\nif a &lt; b {\n</pre>");
    }

    #[test]
    fn test_len_tracks_output() {
        let mut writer = HtmlWriter::new();
        assert!(writer.is_empty());
        writer.write_str("abc");
        assert_eq!(writer.len(), 3);
        assert_eq!(writer.as_bytes(), b"abc");
    }

    #[test]
    fn test_apostrophe_escaped_in_text() {
        assert_eq!(
            emit(|w| w.text_line("it's")),
            "<p class=\"gemini-textline\">it&#39;s</p>"
        );
    }
}
