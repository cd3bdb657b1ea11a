//! High-level client for a Plex-style media-server directory service
//!
//! This crate composes the `plex-parser` decoding layer with the private
//! fetch client into four operations: sign in, list an account's devices,
//! refine those devices into servers, and fetch a server's active playback
//! sessions.
//!
//! ```no_run
//! use plex_api::PlexClient;
//!
//! fn main() -> Result<(), plex_api::ApiError> {
//!     let client = PlexClient::new();
//!     let user = client.sign_in("username", "password")?;
//!
//!     for server in client.servers(&user)? {
//!         for session in client.sessions(&server)? {
//!             println!("{}: {}", server.name(), session.title);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod server;

pub use client::{PlexClient, PLEX_TV_URL};
pub use error::{ApiError, Result};
pub use server::Server;

// Re-export the decoded entity types so callers rarely need plex-parser
// directly
pub use plex_parser::{Device, User, Video};
