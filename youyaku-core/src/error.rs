//! Library error types

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors surfaced by the extraction API
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading an input source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, Error>;
