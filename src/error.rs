//! Errors produced while reading UCD files and emitting tables.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while generating tables.  None of these are
/// recoverable: the generator runs over trusted, versioned input and any of
/// them means the input or the emission request is broken.
#[derive(Error, Debug)]
pub enum Error {
    /// A UCD file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Reading from an already opened source failed.
    #[error("read error: {0}")]
    Io(#[from] io::Error),

    /// A record line had fewer than two `;`-separated fields.
    #[error("line {line}: record has only one field: {text:?}")]
    MalformedRecord { line: usize, text: String },

    /// A code point or code point range was not hexadecimal.
    #[error("invalid code point span {0:?}")]
    InvalidSpan(String),

    /// A script tag that is not exactly four ASCII characters.
    #[error("invalid fourcc string: {0:?}")]
    InvalidFourcc(String),

    /// A width code with no long name in the alias file.
    #[error("unknown East Asian Width code {0:?}")]
    UnknownWidth(String),

    /// A property name that does not form a Rust identifier.
    #[error("{0:?} is not a valid Rust identifier")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, Error>;
