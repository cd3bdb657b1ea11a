//! Client for the directory service and its registered servers.

use crate::error::{ApiError, Result};
use crate::server::Server;
use fetch_client::FetchClient;
use plex_parser::common::xml_decode;
use plex_parser::{Device, DeviceContainer, SessionContainer, User, Video};
use tracing::{debug, trace};

/// Base URL of the hosted directory service
pub const PLEX_TV_URL: &str = "https://plex.tv";

const CLIENT_IDENTIFIER: &str = "plex-sdk";
const CLIENT_IDENTIFIER_HEADER: &str = "X-Plex-Client-Identifier";
const AUTH_TOKEN_HEADER: &str = "X-Plex-Token";
const SIGN_IN_PATH: &str = "/users/sign_in.xml";
const DEVICES_PATH: &str = "/devices.xml";
const SESSIONS_PATH: &str = "/status/sessions";

/// A client for the directory service's account, device, and session
/// operations
///
/// Each operation performs at most one fetch and decodes the response into
/// the entity graph; no state is retained between calls beyond the
/// underlying HTTP agent. Clones share that agent, so one client can serve
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct PlexClient {
    fetch_client: FetchClient,
    directory_url: String,
}

impl PlexClient {
    /// Create a client against the hosted directory service.
    pub fn new() -> Self {
        Self::with_directory_url(PLEX_TV_URL)
    }

    /// Create a client against a custom directory base URL.
    pub fn with_directory_url(directory_url: impl Into<String>) -> Self {
        Self {
            fetch_client: FetchClient::new(),
            directory_url: directory_url.into(),
        }
    }

    /// Create a client with a custom fetch client (for advanced use cases).
    ///
    /// Most applications should use [`PlexClient::new`] instead.
    pub fn with_fetch_client(fetch_client: FetchClient, directory_url: impl Into<String>) -> Self {
        Self {
            fetch_client,
            directory_url: directory_url.into(),
        }
    }

    /// Authenticate and decode the signed-in account.
    ///
    /// Sends the credentials as HTTP basic auth; the returned [`User`]
    /// carries the auth token used by every other operation.
    pub fn sign_in(&self, username: &str, password: &str) -> Result<User> {
        let url = format!("{}{}", self.directory_url, SIGN_IN_PATH);
        debug!("signing in to the directory service");

        let body = self.fetch_client.fetch(
            "POST",
            &url,
            &[(CLIENT_IDENTIFIER_HEADER, CLIENT_IDENTIFIER)],
            Some((username, password)),
            201,
        )?;

        let user: User = xml_decode::parse_bytes(&body)?;
        Ok(user)
    }

    /// List the account's registered devices.
    ///
    /// Decoding produces owner-less devices; each one is then stamped with
    /// the requesting account as its owner.
    pub fn devices(&self, user: &User) -> Result<Vec<Device>> {
        let url = format!("{}{}", self.directory_url, DEVICES_PATH);
        debug!("listing registered devices");

        let body = self.fetch_client.fetch(
            "GET",
            &url,
            &[
                (CLIENT_IDENTIFIER_HEADER, CLIENT_IDENTIFIER),
                (AUTH_TOKEN_HEADER, &user.auth_token),
            ],
            None,
            200,
        )?;

        let container: DeviceContainer = xml_decode::parse_bytes(&body)?;
        let mut devices = container.devices;
        for device in &mut devices {
            device.owner = user.clone();
        }

        Ok(devices)
    }

    /// List the account's devices that qualify as servers.
    ///
    /// Devices without the `"server"` capability are silently skipped;
    /// every other failure aborts the listing. Device order is preserved.
    pub fn servers(&self, user: &User) -> Result<Vec<Server>> {
        let devices = self.devices(user)?;

        let mut servers = Vec::new();
        for device in devices {
            match Server::from_device(device) {
                Ok(server) => servers.push(server),
                Err(ApiError::NotAServer { name }) => {
                    trace!(device = %name, "skipping device without the server capability");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(servers)
    }

    /// Fetch the snapshot of sessions currently playing on a server.
    ///
    /// The request goes to the server's resolved address with the owning
    /// account's auth token as credential.
    pub fn sessions(&self, server: &Server) -> Result<Vec<Video>> {
        let address = server.address().ok_or_else(|| ApiError::NoAddress {
            name: server.name().to_string(),
        })?;
        let mut url = address.as_url().clone();
        url.set_path(SESSIONS_PATH);
        debug!(server = server.name(), "fetching active sessions");

        let body = self.fetch_client.fetch(
            "GET",
            url.as_str(),
            &[
                (CLIENT_IDENTIFIER_HEADER, CLIENT_IDENTIFIER),
                (AUTH_TOKEN_HEADER, &server.owner().auth_token),
            ],
            None,
            200,
        )?;

        let container: SessionContainer = xml_decode::parse_bytes(&body)?;
        trace!(sessions = container.videos.len(), "decoded session snapshot");

        Ok(container.videos)
    }
}

impl Default for PlexClient {
    fn default() -> Self {
        Self::new()
    }
}
