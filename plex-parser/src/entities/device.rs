//! Directory entries: devices and their reachable addresses.

use crate::common::scalars::{CommaSeparated, HttpUrl};
use crate::common::xml_decode;
use crate::entities::user::User;
use crate::error::ParseResult;
use serde::{Deserialize, Serialize};

/// The devices directory document (`MediaContainer` root).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename = "MediaContainer")]
pub struct DeviceContainer {
    /// Public address of the caller as observed by the directory service
    #[serde(rename = "@publicAddress", default)]
    pub public_address: Option<HttpUrl>,

    #[serde(rename = "Device", default)]
    pub devices: Vec<Device>,
}

impl DeviceContainer {
    /// Decode a devices directory document.
    pub fn from_xml(xml: &str) -> ParseResult<Self> {
        xml_decode::parse(xml)
    }
}

/// One registered device in the directory.
///
/// `owner` is not part of the wire document. Decoding leaves it at the
/// default; the caller attaches the owning [`User`] in a separate wiring
/// step after decode. It is a back-reference for lookup only.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Device {
    #[serde(rename = "@name", default)]
    pub name: String,

    /// Declared public address; usually a bare host without a port
    #[serde(rename = "@publicAddress", default)]
    pub public_address: Option<HttpUrl>,

    #[serde(rename = "@product", default)]
    pub product: String,

    /// Capability strings this device advertises, in wire order
    #[serde(rename = "@provides", default)]
    pub provides: CommaSeparated,

    #[serde(rename = "Connection", default)]
    pub connections: Vec<Connection>,

    #[serde(skip)]
    pub owner: User,
}

impl Device {
    /// Whether this device advertises the named capability.
    ///
    /// The comparison is exact and case-sensitive.
    pub fn provides_feature(&self, feature: &str) -> bool {
        self.provides.iter().any(|provided| provided == feature)
    }
}

/// One reachable address for a device.
///
/// A device commonly lists several connections, and duplicates are
/// preserved as they appear on the wire.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Connection {
    #[serde(rename = "@uri", default)]
    pub uri: Option<HttpUrl>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICES_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
    <MediaContainer publicAddress="serverPublicAddress.com">
      <Device name="My Nexus 5" publicAddress="24.56.78.91" product="Plex for Android" provides="controller,sync-target" clientIdentifier="caac4066dbaa6a9c-com-plexapp-android" createdAt="1422553670" lastSeenAt="1430577652">
        <SyncList itemsCompleteCount="0" totalSize="0" version="1"/>
        <Connection uri="http://192.168.1.1:32400"/>
      </Device>
      <Device name="Server" publicAddress="serverPublicAddress.com" product="Plex Media Server" provides="server" clientIdentifier="clientIdentifier" createdAt="1394924489" lastSeenAt="1430601269">
        <Connection uri="http://serverPublicAddress.com:12345"/>
        <Connection uri="http://192.168.1.2:32400"/>
        <Connection uri="http://192.168.1.2:32400"/>
      </Device>
    </MediaContainer>"#;

    #[test]
    fn decodes_the_device_directory() {
        let container = DeviceContainer::from_xml(DEVICES_RESPONSE).unwrap();

        assert_eq!(
            container.public_address.as_ref().unwrap().host_str(),
            Some("serverpublicaddress.com")
        );
        assert_eq!(container.devices.len(), 2);

        let nexus = &container.devices[0];
        assert_eq!(nexus.name, "My Nexus 5");
        assert_eq!(
            nexus.public_address.as_ref().unwrap().host_str(),
            Some("24.56.78.91")
        );
        assert_eq!(nexus.product, "Plex for Android");
        assert_eq!(&*nexus.provides, &["controller", "sync-target"]);
        assert_eq!(nexus.connections.len(), 1);
        assert_eq!(
            nexus.connections[0].uri.as_ref().unwrap().host_with_port(),
            "192.168.1.1:32400"
        );

        let server = &container.devices[1];
        assert_eq!(server.name, "Server");
        assert_eq!(&*server.provides, &["server"]);
        // duplicate connections survive decoding untouched
        assert_eq!(server.connections.len(), 3);
        assert_eq!(server.connections[1], server.connections[2]);
    }

    #[test]
    fn decoding_leaves_the_owner_unset() {
        let container = DeviceContainer::from_xml(DEVICES_RESPONSE).unwrap();

        for device in &container.devices {
            assert_eq!(device.owner, User::default());
        }
    }

    #[test]
    fn provides_feature_matches_exactly() {
        let container = DeviceContainer::from_xml(DEVICES_RESPONSE).unwrap();
        let server = &container.devices[1];

        assert!(server.provides_feature("server"));
        assert!(!server.provides_feature("Server"));
        assert!(!server.provides_feature("serve"));
        assert!(!container.devices[0].provides_feature("server"));
    }

    #[test]
    fn device_with_no_connections_decodes_to_an_empty_list() {
        let container = DeviceContainer::from_xml(
            r#"<MediaContainer><Device name="bare" provides="client"/></MediaContainer>"#,
        )
        .unwrap();

        assert_eq!(container.devices[0].connections, Vec::new());
        assert_eq!(container.devices[0].public_address, None);
    }

    #[test]
    fn unparseable_connection_address_is_a_schema_violation() {
        let err = DeviceContainer::from_xml(
            r#"<MediaContainer><Device name="d"><Connection uri="1.2.3.4:notaport"/></Device></MediaContainer>"#,
        )
        .unwrap_err();

        assert!(matches!(err, crate::error::ParseError::SchemaViolation(_)));
    }
}
