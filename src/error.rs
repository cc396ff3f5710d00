use std::{io, string::FromUtf8Error};

use thiserror::Error;

/// Fatal errors surfaced by [`render`](crate::render) and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// The rendered buffer could not be turned into a string. No partial
    /// output is returned.
    #[error("Rendering error: {0}")]
    Render(#[from] FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Why a `=>` line was skipped.
///
/// These never abort a render; the offending line simply produces no HTML.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("error parsing link line: no URL after link marker in line '{line}'")]
    Malformed { line: String },

    #[error("error parsing link line: invalid escape in URL '{url}', input '{line}'")]
    InvalidEscape { url: String, line: String },
}

pub type Result<T> = std::result::Result<T, Error>;
