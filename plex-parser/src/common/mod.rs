//! Shared wire-format building blocks: scalar decoders and XML entry points.

pub mod scalars;
pub mod xml_decode;

pub use scalars::{CommaSeparated, HttpUrl, IntAsBool, MillisDuration, UnixTime, UrlPath};
