//! Error types for pandoc-wrap.

use std::time::Duration;
use thiserror::Error;

/// Result type for pandoc-wrap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while invoking pandoc.
#[derive(Error, Debug)]
pub enum Error {
    /// The pandoc executable is missing or could not be started.
    #[error("pandoc could not be invoked: {0}")]
    Invocation(String),

    /// Pandoc ran and exited non-zero. The message is its stderr, verbatim.
    #[error("{0}")]
    External(String),

    /// Pandoc exceeded the caller-supplied time bound and was killed.
    #[error("pandoc did not finish within {0:?}")]
    Timeout(Duration),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A string writer produced output that is not valid UTF-8.
    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
