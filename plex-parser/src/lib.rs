//! # plex-parser
//!
//! Typed decoding of the XML documents served by a Plex-style media-server
//! directory service: the sign-in response, the registered-devices
//! directory, and a server's active playback sessions.
//!
//! The crate is split into two layers:
//!
//! - [`common`] — the scalar decoders (URLs, epoch timestamps, millisecond
//!   durations, `"1"`-as-true booleans, comma-separated lists) and the XML
//!   entry points. Every field of a given semantic kind shares one decoder.
//! - [`entities`] — serde schema structs mapping wire attribute and element
//!   names onto the domain entities. Absent attributes decode to zero
//!   values; only values that are present but unconvertible fail.
//!
//! ## Usage
//!
//! ```rust
//! use plex_parser::DeviceContainer;
//!
//! let xml = r#"<MediaContainer>
//!   <Device name="Server" publicAddress="203.0.113.7" provides="server">
//!     <Connection uri="http://203.0.113.7:32400"/>
//!   </Device>
//! </MediaContainer>"#;
//!
//! let container = DeviceContainer::from_xml(xml).unwrap();
//! assert!(container.devices[0].provides_feature("server"));
//! ```

pub mod common;
pub mod entities;
pub mod error;

// Re-export the scalar decoders for convenient top-level access
pub use common::{CommaSeparated, HttpUrl, IntAsBool, MillisDuration, UnixTime, UrlPath};

// Re-export the entity schema for convenient top-level access
pub use entities::{
    Connection, Device, DeviceContainer, Media, Player, SessionContainer, Subscription,
    TranscodeSession, User, Video,
};

// Re-export error types for convenient top-level access
pub use error::{ParseError, ParseResult};
