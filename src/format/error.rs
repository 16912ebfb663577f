//! Error types for palette format operations.

use thiserror::Error;

/// Errors that can occur while reading or writing palette files.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format structure or content
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of the format error
        message: String,
    },

    /// A line could not be parsed in strict mode
    #[error("Malformed color line {line}: {content:?}")]
    MalformedLine {
        /// 1-based line number in the file
        line: usize,
        /// The offending line
        content: String,
    },

    /// Operation not supported by this format
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl FormatError {
    /// Create an invalid format error with a message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create a malformed line error.
    pub fn malformed_line(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            content: content.into(),
        }
    }
}
