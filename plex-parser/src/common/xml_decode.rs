//! XML decoding entry points for directory and server documents.
//!
//! Every document this crate understands comes through one of the functions
//! here, so schema-level failures all surface as
//! [`ParseError::SchemaViolation`] regardless of which entity was the root.

use crate::error::{ParseError, ParseResult};
use serde::de::DeserializeOwned;

/// Parse an XML document into a deserializable type.
pub fn parse<T: DeserializeOwned>(xml: &str) -> ParseResult<T> {
    quick_xml::de::from_str(xml).map_err(|e| ParseError::SchemaViolation(e.to_string()))
}

/// Parse raw response bytes into a deserializable type.
///
/// The fetch collaborator hands back bytes; the wire format is UTF-8 XML.
pub fn parse_bytes<T: DeserializeOwned>(bytes: &[u8]) -> ParseResult<T> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::SchemaViolation(format!("document is not valid UTF-8: {}", e)))?;
    parse(text)
}
