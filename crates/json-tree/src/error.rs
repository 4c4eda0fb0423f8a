//! Error type shared by accessors, the decoder, and the file helpers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::value::JsonType;

/// Errors raised by this crate.
///
/// Every error is unrecoverable at the point of failure and propagates
/// synchronously to the caller; a failed decode leaves no partial tree
/// behind. The one swallowed failure in the crate is [`crate::from_file`] on
/// a path that cannot be opened, which yields a null document instead.
#[derive(Debug, Error)]
pub enum JsonError {
    /// A typed accessor was called on a node of a different variant.
    #[error("not {}", indefinite(.expected))]
    TypeMismatch { expected: JsonType },

    #[error("misspelled literal, expected `{expected}` at offset {offset}")]
    MisspelledLiteral {
        expected: &'static str,
        offset: usize,
    },

    #[error("expected ':' after object key at offset {offset}")]
    ExpectedColon { offset: usize },

    #[error("unexpected character `{found}` at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("unsupported escape `\\{found}` at offset {offset}")]
    UnsupportedEscape { found: char, offset: usize },

    #[error("invalid number literal at offset {offset}")]
    InvalidNumber { offset: usize },

    #[error("invalid UTF-8 in string literal")]
    InvalidUtf8,

    #[error("document nested deeper than {limit} levels")]
    TooDeeplyNested { limit: usize },

    /// The output file could not be created.
    #[error("could not write to file {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Sink or source I/O failure mid-operation.
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn indefinite(kind: &JsonType) -> String {
    match kind {
        JsonType::Array | JsonType::Object => format!("an {kind}"),
        _ => format!("a {kind}"),
    }
}
