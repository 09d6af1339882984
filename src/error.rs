//! Error types for translation and searching.

use thiserror::Error;

/// Errors that can occur when translating a layout into a parse format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("layout component '{text}' cannot be parsed back into a time value")]
    Unsupported { text: &'static str },
}

/// Errors that can occur when searching text with a layout.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("layout compiles to an invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("matched text '{text}' does not conform to the layout: {source}")]
    Timestamp {
        text: String,
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
