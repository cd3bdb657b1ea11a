//! Error types for wire document decoding

use thiserror::Error;

/// Errors that can occur while decoding wire documents
#[derive(Debug, Error)]
pub enum ParseError {
    /// An attribute value could not be parsed as a URL
    #[error("malformed URL {value:?}")]
    MalformedUrl {
        /// The raw attribute value as it appeared on the wire
        value: String,
    },

    /// An attribute value was expected to be a base-10 integer
    #[error("expected a base-10 integer, got {value:?}")]
    NotANumber {
        /// The raw attribute value as it appeared on the wire
        value: String,
    },

    /// The document structure or a value in it does not match the schema
    #[error("document does not match schema: {0}")]
    SchemaViolation(String),
}

/// Result type alias for decoding operations
pub type ParseResult<T> = Result<T, ParseError>;
