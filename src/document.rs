//! Standalone HTML document shell.
//!
//! The shell is fixed: a doctype, a head carrying the title and the
//! embedded stylesheet (light colors by default, dark ones under
//! `prefers-color-scheme: dark`), and a body holding the content in a
//! `gemini-container` div.

use crate::render::HtmlWriter;

/// Stylesheet embedded in every wrapped document.
pub const STYLESHEET: &str = include_str!("assets/gemini.css");

const HEAD_START: &str = "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"UTF-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
<title>";

const STYLE_START: &str = "</title>\n<style>\n";

const BODY_START: &str = "</style>\n\
</head>\n\
<body>\n\
<div class=\"gemini-container\">\n";

const BODY_END: &str = "\n</div>\n</body>\n</html>\n";

/// Wrap rendered content in the document shell.
///
/// `content` is trusted HTML and is written as-is; `title` is escaped.
pub fn wrap_document(writer: &mut HtmlWriter, title: &str, content: &str) {
    writer.write_str(HEAD_START);
    writer.write_escaped(title);
    writer.write_str(STYLE_START);
    writer.write_str(STYLESHEET);
    writer.write_str(BODY_START);
    writer.write_html(content);
    writer.write_str(BODY_END);
}

/// Bytes the shell adds around the content.
pub fn shell_len() -> usize {
    HEAD_START.len() + STYLE_START.len() + STYLESHEET.len() + BODY_START.len() + BODY_END.len()
}
