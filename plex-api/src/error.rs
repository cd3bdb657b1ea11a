use fetch_client::FetchError;
use plex_parser::ParseError;
use thiserror::Error;

/// High-level errors for directory and server operations
///
/// Transport failures, unexpected status codes, and decode failures bubble
/// up unchanged inside their wrappers; nothing is retried, and no partial
/// entity is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The fetch collaborator failed: transport error or unexpected status
    #[error("request failed: {0}")]
    Fetch(#[from] FetchError),

    /// The response document did not decode
    #[error("response did not decode: {0}")]
    Parse(#[from] ParseError),

    /// The device does not advertise the `"server"` capability
    ///
    /// `servers` uses this internally to filter candidates; it is only
    /// surfaced when resolving a single device directly.
    #[error("device {name:?} is not a server")]
    NotAServer {
        /// Name of the rejected device
        name: String,
    },

    /// The server declared no public address to send requests to
    #[error("server {name:?} has no public address")]
    NoAddress {
        /// Name of the unreachable server
        name: String,
    },
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
