//! Scalar decoders for wire attribute values.
//!
//! The wire format expresses every attribute as a string. Each semantic kind
//! of value gets one newtype here with a pure `from_wire` decoder, and every
//! field of that kind shares it through the type's `Deserialize` impl. That
//! keeps the format quirks (missing schemes, epoch seconds, millisecond
//! durations, `"1"`-as-true) in one place, testable without a document.
//!
//! Each type also implements `Serialize`, emitting the canonical wire string
//! form of the value.

use crate::error::{ParseError, ParseResult};
use chrono::{DateTime, Utc};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::time::Duration;
use url::Url;

/// A fully parsed absolute URL.
///
/// Wire values frequently omit the scheme (`publicAddress="24.56.78.91"`);
/// decoding prefixes `http://` before parsing whenever no scheme is present,
/// so the stored URL always has a scheme and host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpUrl(Url);

impl HttpUrl {
    /// Decode a wire attribute value into a URL.
    pub fn from_wire(raw: &str) -> ParseResult<Self> {
        let parsed = if raw.contains("://") {
            Url::parse(raw)
        } else {
            Url::parse(&format!("http://{}", raw))
        };
        parsed.map(HttpUrl).map_err(|_| ParseError::MalformedUrl {
            value: raw.to_string(),
        })
    }

    /// Borrow the parsed URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// The `host` or `host:port` text of this URL.
    ///
    /// Connection resolution compares addresses on this text.
    pub fn host_with_port(&self) -> String {
        let host = self.0.host_str().unwrap_or_default();
        match self.0.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    }
}

impl Deref for HttpUrl {
    type Target = Url;

    fn deref(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for HttpUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for HttpUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        HttpUrl::from_wire(&raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for HttpUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

// Relative references have no scheme or host to resolve against; parse them
// against a fixed placeholder base and keep only the path and query.
const PATH_BASE: &str = "http://path.invalid/";

/// A URL reference that may be relative or path-only.
///
/// Unlike [`HttpUrl`], no scheme is ever prepended; the value is kept as a
/// path plus optional query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlPath {
    path: String,
    query: Option<String>,
}

impl UrlPath {
    /// Decode a wire attribute value into a path reference.
    pub fn from_wire(raw: &str) -> ParseResult<Self> {
        if raw.is_empty() {
            return Ok(Self::default());
        }
        let malformed = || ParseError::MalformedUrl {
            value: raw.to_string(),
        };
        let base = Url::parse(PATH_BASE).map_err(|_| malformed())?;
        let resolved = base.join(raw).map_err(|_| malformed())?;
        Ok(UrlPath {
            path: resolved.path().to_string(),
            query: resolved.query().map(str::to_string),
        })
    }

    /// The path component of the reference.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query string, when the reference carried one.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

impl fmt::Display for UrlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.query {
            Some(query) => write!(f, "{}?{}", self.path, query),
            None => f.write_str(&self.path),
        }
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        UrlPath::from_wire(&raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// A point in time encoded as whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnixTime(pub DateTime<Utc>);

impl UnixTime {
    /// Decode a wire attribute value into a timestamp.
    pub fn from_wire(raw: &str) -> ParseResult<Self> {
        let not_a_number = || ParseError::NotANumber {
            value: raw.to_string(),
        };
        let secs: i64 = raw.parse().map_err(|_| not_a_number())?;
        DateTime::from_timestamp(secs, 0)
            .map(UnixTime)
            .ok_or_else(not_a_number)
    }

    /// Seconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }
}

impl<'de> Deserialize<'de> for UnixTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        UnixTime::from_wire(&raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for UnixTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.timestamp().to_string())
    }
}

/// An elapsed time encoded as whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MillisDuration(pub Duration);

impl MillisDuration {
    /// Decode a wire attribute value into a duration.
    pub fn from_wire(raw: &str) -> ParseResult<Self> {
        let millis: u64 = raw.parse().map_err(|_| ParseError::NotANumber {
            value: raw.to_string(),
        })?;
        Ok(MillisDuration(Duration::from_millis(millis)))
    }
}

impl<'de> Deserialize<'de> for MillisDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        MillisDuration::from_wire(&raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for MillisDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.as_millis().to_string())
    }
}

/// A boolean encoded as `"1"` for true; every other value is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntAsBool(pub bool);

impl IntAsBool {
    /// Decode a wire attribute value. Never fails.
    pub fn from_wire(raw: &str) -> Self {
        IntAsBool(raw == "1")
    }

    /// The canonical wire form of this value.
    pub fn as_wire(&self) -> &'static str {
        if self.0 {
            "1"
        } else {
            "0"
        }
    }
}

impl<'de> Deserialize<'de> for IntAsBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(IntAsBool::from_wire(&raw))
    }
}

impl Serialize for IntAsBool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_wire())
    }
}

/// An ordered list encoded as comma-separated text.
///
/// Order and duplicates are preserved exactly as they appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommaSeparated(pub Vec<String>);

impl CommaSeparated {
    /// Decode a wire attribute value. Never fails.
    ///
    /// An empty value decodes to a single empty-string element, matching
    /// what splitting the empty string produces.
    pub fn from_wire(raw: &str) -> Self {
        CommaSeparated(raw.split(',').map(str::to_string).collect())
    }
}

impl Deref for CommaSeparated {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CommaSeparated {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(CommaSeparated::from_wire(&raw))
    }
}

impl Serialize for CommaSeparated {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.join(","))
    }
}
