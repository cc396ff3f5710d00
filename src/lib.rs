//! gmi2html: Gemini text (gemtext) to HTML converter
//!
//! Gemtext is a line-oriented format: every line is exactly one of a text
//! line, a link, a heading, a list item, a quote, or a preformatting
//! toggle. This crate classifies each line, renders a fixed HTML fragment
//! for it, and concatenates the fragments in input order. The result is
//! either that bare content fragment or a complete document with an
//! embedded stylesheet.
//!
//! # Design Principles
//! - No AST: one pass, one fragment per line
//! - No regex: byte-level prefix and link scanning
//! - One piece of cross-line state: the preformatted mode flag
//! - A broken link line is skipped and logged, never fatal

pub mod document;
pub mod error;
pub mod escape;
pub mod line;
pub mod link;
pub mod render;

use log::{debug, warn};

pub use error::{Error, LinkError, Result};
pub use line::{Line, classify};
pub use link::{Link, parse_link};
pub use render::HtmlWriter;

/// Rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Rewrite link targets ending in `.gmi` to end in `.html`.
    pub replace_gmi_ext: bool,
    /// Return only the content fragment, without the document shell.
    pub content_only: bool,
}

/// Convert gemtext to HTML.
///
/// With `content_only`, only the content fragment is returned and `title`
/// is ignored. Otherwise the fragment is wrapped in a full document titled
/// `title`.
///
/// # Example
/// ```
/// let html = gmi2html::render("# Hello\n=> gemini://example.org Home", "", true, false).unwrap();
/// assert_eq!(
///     html,
///     "<h1 class=\"gemini-heading-1\">Hello</h1>\
///      <div class=\"gemini-link-container\"><a href=\"gemini://example.org\">Home</a></div>"
/// );
/// ```
pub fn render(text: &str, title: &str, content_only: bool, replace_gmi_ext: bool) -> Result<String> {
    let options = Options {
        replace_gmi_ext,
        content_only,
    };
    render_with_options(text, title, &options)
}

/// Convert gemtext to HTML with options.
pub fn render_with_options(text: &str, title: &str, options: &Options) -> Result<String> {
    let content = to_html_with_options(text, options)?;
    if options.content_only {
        return Ok(content);
    }

    let mut writer = HtmlWriter::with_capacity(content.len() + document::shell_len());
    document::wrap_document(&mut writer, title, &content);
    Ok(writer.into_string()?)
}

/// Convert gemtext to an HTML content fragment with default options.
///
/// # Example
/// ```
/// let html = gmi2html::to_html("This is a simple text line").unwrap();
/// assert_eq!(html, "<p class=\"gemini-textline\">This is a simple text line</p>");
/// ```
pub fn to_html(text: &str) -> Result<String> {
    to_html_with_options(text, &Options::default())
}

/// Convert gemtext to an HTML content fragment with options.
///
/// `options.content_only` has no effect here; the result is always the bare
/// fragment.
pub fn to_html_with_options(text: &str, options: &Options) -> Result<String> {
    let mut writer = HtmlWriter::with_capacity_for(text.len());
    render_to_writer(text, &mut writer, options);
    Ok(writer.into_string()?)
}

/// Convert gemtext to an HTML content fragment, appending to `out`.
///
/// Lets a caller reuse one buffer across many documents.
pub fn to_html_into(text: &str, out: &mut Vec<u8>, options: &Options) {
    out.reserve(text.len() * 2);
    let mut writer = HtmlWriter::with_capacity(0);
    // Render straight into the caller's buffer
    std::mem::swap(writer.buffer_mut(), out);
    render_to_writer(text, &mut writer, options);
    std::mem::swap(writer.buffer_mut(), out);
}

/// Whether plain lines become paragraphs or pass through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    Preformatted,
}

/// Split into lines on `\n`. The empty document has no lines; otherwise a
/// trailing newline yields a final empty line.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    (!text.is_empty()).then(|| text.split('\n')).into_iter().flatten()
}

/// Render every line of `text` into `writer`.
fn render_to_writer(text: &str, writer: &mut HtmlWriter, options: &Options) {
    let mut mode = Mode::Normal;
    let mut line_count = 0usize;
    let mut skipped_links = 0usize;

    for raw in lines(text) {
        line_count += 1;
        match classify(raw) {
            Line::Link(line) => match parse_link(line, options.replace_gmi_ext) {
                Ok(link) => writer.link(&link),
                Err(err) => {
                    warn!("Skipping line {line_count}: {err}");
                    skipped_links += 1;
                }
            },
            Line::Fence => {
                mode = match mode {
                    Mode::Normal => {
                        writer.preformatted_start();
                        Mode::Preformatted
                    }
                    Mode::Preformatted => {
                        writer.preformatted_end();
                        Mode::Normal
                    }
                };
            }
            Line::Heading { level, text } => writer.heading(level, text),
            Line::ListItem(text) => writer.list_item(text),
            Line::Quote(text) => writer.blockquote(text),
            Line::Text(text) => match mode {
                Mode::Normal => writer.text_line(text),
                Mode::Preformatted => writer.preformatted_line(text),
            },
        }
    }

    if mode == Mode::Preformatted {
        debug!("Preformatted block left open at end of document, closing it");
        writer.preformatted_end();
    }

    debug!(
        "Rendered {line_count} lines into {} bytes ({skipped_links} link lines skipped)",
        writer.len()
    );
}
