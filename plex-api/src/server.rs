//! Server refinement of directory devices.
//!
//! A [`Server`] is not a separate wire entity: it is a [`Device`] that
//! passed the capability check, with its public address resolved against
//! the device's connection list.

use crate::error::{ApiError, Result};
use plex_parser::{Connection, Device, HttpUrl, User};

/// Capability string a device must advertise to qualify as a server
const SERVER_CAPABILITY: &str = "server";

/// A directory device that advertises the `"server"` capability.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    /// The embedded directory entry, with its public address possibly
    /// rewritten to a port-qualified connection address
    pub device: Device,
}

impl Server {
    /// Refine a device into a server.
    ///
    /// Fails with [`ApiError::NotAServer`] when the device does not
    /// advertise the `"server"` capability. Address resolution is
    /// best-effort: when no connection matches the declared host, the
    /// device's original address is kept and the refinement still
    /// succeeds.
    pub fn from_device(device: Device) -> Result<Self> {
        if !device.provides_feature(SERVER_CAPABILITY) {
            return Err(ApiError::NotAServer { name: device.name });
        }

        let mut server = Server { device };
        // The declared public address usually lacks the port; the
        // connection whose host matches it carries the full address.
        let resolved = server
            .device
            .public_address
            .as_ref()
            .and_then(|address| find_matching_connection(address, &server.device.connections));
        if let Some(address) = resolved {
            server.device.public_address = Some(address);
        }

        Ok(server)
    }

    /// The resolved public address, when the device declared one.
    pub fn address(&self) -> Option<&HttpUrl> {
        self.device.public_address.as_ref()
    }

    /// The device name as listed in the directory.
    pub fn name(&self) -> &str {
        &self.device.name
    }

    /// The account this server was listed for.
    pub fn owner(&self) -> &User {
        &self.device.owner
    }
}

/// First connection, in wire order, whose `host[:port]` text contains the
/// declared address's `host[:port]` text as a substring.
///
/// The containment is directional (declared inside candidate) and looks at
/// the host text only; schemes play no part.
fn find_matching_connection(
    public_address: &HttpUrl,
    connections: &[Connection],
) -> Option<HttpUrl> {
    let declared = public_address.host_with_port();
    connections
        .iter()
        .filter_map(|connection| connection.uri.as_ref())
        .find(|address| address.host_with_port().contains(&declared))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plex_parser::CommaSeparated;
    use rstest::rstest;

    fn device(provides: &str, public_address: Option<&str>, connections: &[&str]) -> Device {
        Device {
            name: "Server".to_string(),
            public_address: public_address.map(|raw| HttpUrl::from_wire(raw).unwrap()),
            product: "Plex Media Server".to_string(),
            provides: CommaSeparated::from_wire(provides),
            connections: connections
                .iter()
                .map(|uri| Connection {
                    uri: Some(HttpUrl::from_wire(uri).unwrap()),
                })
                .collect(),
            owner: User::default(),
        }
    }

    #[test]
    fn resolves_the_first_matching_connection() {
        let server = Server::from_device(device(
            "server",
            Some("serverPublicAddress.com"),
            &[
                "http://serverPublicAddress.com:12345",
                "http://192.168.1.2:32400",
                "http://192.168.1.2:32400",
            ],
        ))
        .unwrap();

        assert_eq!(
            server.address().unwrap().host_with_port(),
            "serverpublicaddress.com:12345"
        );
        // the connection list itself is untouched, duplicates included
        assert_eq!(server.device.connections.len(), 3);
        assert_eq!(server.device.connections[1], server.device.connections[2]);
    }

    #[test]
    fn keeps_the_declared_address_when_nothing_matches() {
        let server = Server::from_device(device(
            "server",
            Some("example.com"),
            &["http://10.0.0.1:32400"],
        ))
        .unwrap();

        let address = server.address().unwrap();
        assert_eq!(address.host_str(), Some("example.com"));
        assert_eq!(address.port(), None);
    }

    #[test]
    fn keeps_the_declared_address_with_no_connections() {
        let server = Server::from_device(device("server", Some("example.com"), &[])).unwrap();
        assert_eq!(server.address().unwrap().host_str(), Some("example.com"));
    }

    #[test]
    fn qualifies_without_any_declared_address() {
        let server = Server::from_device(device(
            "server",
            None,
            &["http://10.0.0.1:32400"],
        ))
        .unwrap();

        assert_eq!(server.address(), None);
    }

    #[rstest]
    #[case("controller,sync-target")]
    // the capability match is exact and case-sensitive
    #[case("Server")]
    #[case("serve")]
    #[case("")]
    fn rejects_devices_without_the_server_capability(#[case] provides: &str) {
        let err = Server::from_device(device(provides, Some("24.56.78.91"), &[])).unwrap_err();

        match err {
            ApiError::NotAServer { name } => assert_eq!(name, "Server"),
            other => panic!("expected NotAServer, got {:?}", other),
        }
    }

    #[test]
    fn host_containment_is_directional() {
        // candidate host extends the declared host, so it matches
        let server = Server::from_device(device(
            "server",
            Some("box"),
            &["http://box.internal:32400"],
        ))
        .unwrap();
        assert_eq!(
            server.address().unwrap().host_with_port(),
            "box.internal:32400"
        );

        // declared host extends the candidate host, so it does not
        let server = Server::from_device(device(
            "server",
            Some("box.internal"),
            &["http://box:32400"],
        ))
        .unwrap();
        assert_eq!(server.address().unwrap().host_str(), Some("box.internal"));
        assert_eq!(server.address().unwrap().port(), None);
    }
}
