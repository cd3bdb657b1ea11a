//! Playback-session entities returned by a server's sessions endpoint.
//!
//! Everything here is a point-in-time snapshot: each fetch produces a fresh,
//! independent sequence with no identity carried across fetches.

use crate::common::scalars::{IntAsBool, MillisDuration, UnixTime, UrlPath};
use crate::common::xml_decode;
use crate::entities::user::User;
use crate::error::ParseResult;
use serde::{Deserialize, Serialize};

/// The active-sessions document (`MediaContainer` root).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename = "MediaContainer")]
pub struct SessionContainer {
    #[serde(rename = "Video", default)]
    pub videos: Vec<Video>,
}

impl SessionContainer {
    /// Decode an active-sessions document.
    pub fn from_xml(xml: &str) -> ParseResult<Self> {
        xml_decode::parse(xml)
    }
}

/// One video being played on a server right now.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Video {
    #[serde(rename = "@addedAt", default)]
    pub added_at: Option<UnixTime>,

    #[serde(rename = "@art", default)]
    pub art: UrlPath,

    #[serde(rename = "@contentRating", default)]
    pub content_rating: String,

    #[serde(rename = "@duration", default)]
    pub duration: MillisDuration,

    #[serde(rename = "@grandparentArt", default)]
    pub grandparent_art: UrlPath,

    #[serde(rename = "@grandparentTheme", default)]
    pub grandparent_theme: UrlPath,

    #[serde(rename = "@grandparentThumb", default)]
    pub grandparent_thumb: UrlPath,

    /// Title of the grandparent item, e.g. the show an episode belongs to
    #[serde(rename = "@grandparentTitle", default)]
    pub grandparent_title: String,

    #[serde(rename = "@guid", default)]
    pub guid: String,

    #[serde(rename = "@parentThumb", default)]
    pub parent_thumb: UrlPath,

    #[serde(rename = "@thumb", default)]
    pub thumb: UrlPath,

    #[serde(rename = "@title", default)]
    pub title: String,

    #[serde(rename = "@updatedAt", default)]
    pub updated_at: Option<UnixTime>,

    #[serde(rename = "Media", default)]
    pub media: Media,

    /// The account watching this session
    #[serde(rename = "User", default)]
    pub user: User,

    #[serde(rename = "Player", default)]
    pub player: Player,

    #[serde(rename = "TranscodeSession", default)]
    pub transcode_session: TranscodeSession,
}

/// Source media characteristics of a session.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Media {
    #[serde(rename = "@aspectRatio", default)]
    pub aspect_ratio: f32,

    #[serde(rename = "@audioChannels", default)]
    pub audio_channels: u32,

    #[serde(rename = "@audioCodec", default)]
    pub audio_codec: String,

    #[serde(rename = "@videoCodec", default)]
    pub video_codec: String,

    #[serde(rename = "@videoFrameRate", default)]
    pub video_frame_rate: String,

    /// Vertical resolution; the wire calls this `videoResolution`
    #[serde(rename = "@videoResolution", default)]
    pub height_px: u32,

    #[serde(rename = "@width", default)]
    pub width_px: u32,
}

/// The client playing a session.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Player {
    #[serde(rename = "@machineIdentifier", default)]
    pub machine_identifier: String,

    #[serde(rename = "@platform", default)]
    pub platform: String,

    #[serde(rename = "@product", default)]
    pub product: String,

    /// Playback state as reported, e.g. `playing` or `paused`
    #[serde(rename = "@state", default)]
    pub state: String,

    #[serde(rename = "@title", default)]
    pub title: String,
}

/// Live transcode progress for a session, when the server is transcoding.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct TranscodeSession {
    #[serde(rename = "@key", default)]
    pub key: String,

    #[serde(rename = "@throttled", default)]
    pub throttled: IntAsBool,

    #[serde(rename = "@progress", default)]
    pub progress: f64,

    #[serde(rename = "@speed", default)]
    pub speed: f64,

    #[serde(rename = "@duration", default)]
    pub duration: MillisDuration,

    #[serde(rename = "@videoDecision", default)]
    pub video_decision: String,

    #[serde(rename = "@audioDecision", default)]
    pub audio_decision: String,

    #[serde(rename = "@protocol", default)]
    pub protocol: String,

    #[serde(rename = "@container", default)]
    pub container: String,

    #[serde(rename = "@videoCodec", default)]
    pub video_codec: String,

    #[serde(rename = "@audioCodec", default)]
    pub audio_codec: String,

    #[serde(rename = "@audioChannels", default)]
    pub audio_channels: u32,

    #[serde(rename = "@width", default)]
    pub width: u32,

    #[serde(rename = "@height", default)]
    pub height: u32,
}
