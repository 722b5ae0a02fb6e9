//! Error types for column title generation.

use thiserror::Error;

/// Errors that can occur while decoding column definitions or rendering titles.
#[derive(Debug, Error)]
pub enum ColumnTitlesError {
    // === Input Errors ===
    /// Failed to read the input stream.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input exceeded the configured byte limit.
    #[error("input exceeds {limit} bytes")]
    InputTooLarge { limit: u64 },

    // === Decoding Errors ===
    /// Input is not well-formed JSON.
    #[error("malformed JSON at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Input is valid JSON but not an object of column definitions.
    #[error("unexpected column definition shape: {message}")]
    Shape { message: String },

    /// A column carries a `title` attribute that is not a string.
    #[error("column '{column}' has a non-string title ({found})")]
    InvalidTitle { column: String, found: &'static str },

    // === Output Format Errors ===
    /// Output format settings are unusable.
    #[error("invalid output format: {message}")]
    Config { message: String },
}

impl From<serde_json::Error> for ColumnTitlesError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Self::Shape {
                message: err.to_string(),
            },
            Category::Io => Self::Io(err.into()),
            Category::Syntax | Category::Eof => Self::Syntax {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            },
        }
    }
}

/// Result type for column title operations.
pub type Result<T> = std::result::Result<T, ColumnTitlesError>;
