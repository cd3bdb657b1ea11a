//! Integration tests decoding complete wire documents through the crate's
//! public API.

use plex_parser::{DeviceContainer, ParseError, SessionContainer, User};

#[test]
fn sign_in_document_decodes_from_top_level_import() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
    <user email="email@address.com" id="123456" thumb="http://thumb.com" username="username" title="title" locale="locale" authenticationToken="authtoken" queueEmail="queue@email.com">
      <subscription active="1" status="Active" plan="lifetime"/>
    </user>"#;

    let user = User::from_xml(xml).unwrap();
    assert_eq!(user.username, "username");
    assert_eq!(user.auth_token, "authtoken");
    assert!(user.subscription.active.0);
}

#[test]
fn devices_document_decodes_scalars_through_their_shared_decoders() {
    let xml = r#"<MediaContainer publicAddress="198.51.100.4">
      <Device name="phone" publicAddress="24.56.78.91" product="Plex for Android" provides="controller,sync-target">
        <Connection uri="http://192.168.1.1:32400"/>
      </Device>
    </MediaContainer>"#;

    let container = DeviceContainer::from_xml(xml).unwrap();
    let device = &container.devices[0];

    // the scheme-prefixing URL decoder ran for the attribute
    let address = device.public_address.as_ref().unwrap();
    assert_eq!(address.scheme(), "http");
    assert_eq!(address.host_str(), Some("24.56.78.91"));

    // the list decoder preserved wire order
    assert_eq!(&*device.provides, &["controller", "sync-target"]);
}

#[test]
fn sessions_document_decodes_from_bytes() {
    let xml = br#"<MediaContainer size="1">
      <Video title="Episode 21" addedAt="1430373171" duration="1297172" thumb="/library/metadata/1751/thumb/1430373196"/>
    </MediaContainer>"#;

    let container: SessionContainer = plex_parser::common::xml_decode::parse_bytes(xml).unwrap();
    let video = &container.videos[0];

    assert_eq!(video.title, "Episode 21");
    assert_eq!(video.added_at.unwrap().timestamp(), 1430373171);
    assert_eq!(video.duration.0.as_millis(), 1_297_172);
    assert_eq!(video.thumb.path(), "/library/metadata/1751/thumb/1430373196");
}

#[test]
fn value_present_but_unconvertible_fails_with_the_offending_value() {
    let xml = r#"<MediaContainer>
      <Video title="bad" duration="twenty minutes"/>
    </MediaContainer>"#;

    let err = SessionContainer::from_xml(xml).unwrap_err();
    match err {
        ParseError::SchemaViolation(message) => {
            assert!(message.contains("twenty minutes"), "message: {message}")
        }
        other => panic!("expected SchemaViolation, got {other:?}"),
    }
}
