// prose-core-client/prose-muc-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use prose_muc::test::ConnectedMUC;

#[test]
fn test_disconnect_drops_handlers() -> Result<()> {
    let muc = ConnectedMUC::new()?;

    muc.router.disconnect();
    muc.receive(
        r#"
        <message xmlns="jabber:client" from="r@c/alice" type="groupchat">
          <body>Anyone here?</body>
        </message>
        "#,
    )?;

    assert!(!muc.router.is_connected());
    assert!(muc.transport.is_disconnected());
    assert_eq!(muc.router.handler_count(), 0);
    assert_eq!(muc.sent_events(), vec![]);

    Ok(())
}

#[test]
fn test_ignores_non_stanza_elements() -> Result<()> {
    let muc = ConnectedMUC::new()?;

    muc.receive(r#"<a xmlns="urn:xmpp:sm:3" h="1"/>"#)?;
    muc.receive(
        r#"
        <iq xmlns="jabber:client" from="r@c" id="ping-1" type="get">
          <ping xmlns="urn:xmpp:ping"/>
        </iq>
        "#,
    )?;

    assert_eq!(muc.sent_events(), vec![]);
    assert_eq!(muc.router.handler_count(), 3);

    Ok(())
}

#[test]
fn test_rejects_malformed_xml() -> Result<()> {
    let muc = ConnectedMUC::new()?;

    assert!(muc.router.dispatch_str("<message xmlns='jabber:client'>").is_err());
    assert_eq!(muc.sent_events(), vec![]);

    Ok(())
}
