// prose-core-client/prose-muc-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use minidom::Element;
use pretty_assertions::assert_eq;

use prose_muc::stanza::muc::Invite;
use prose_muc::stanza::{Message, MessageType, Presence, PresenceType, Show};
use prose_muc::test::{ConnectedMUC, ConstantIDProvider, RecordingTransport};
use prose_muc::{bare, full, jid, ns, ConnectionError, Event, Router, MUC};

/// Serializes what went over the wire and parses it again.
fn sent_elements(transport: &RecordingTransport) -> Result<Vec<Element>> {
    transport
        .sent_stanza_strings()
        .iter()
        .map(|xml| Ok(Element::from_str(xml)?))
        .collect()
}

fn sent_presences(transport: &RecordingTransport) -> Result<Vec<Presence>> {
    Ok(sent_elements(transport)?
        .into_iter()
        .map(Presence::from)
        .collect())
}

fn sent_messages(transport: &RecordingTransport) -> Result<Vec<Message>> {
    Ok(sent_elements(transport)?
        .into_iter()
        .map(Message::from)
        .collect())
}

#[test]
fn test_join_room() -> Result<()> {
    let ConnectedMUC { muc, transport, .. } = ConnectedMUC::new()?;

    muc.join(&bare!("room@conf.example"), "bob", None)?;

    let presences = sent_presences(&transport)?;
    assert_eq!(presences.len(), 1);

    let presence = &presences[0];
    assert_eq!(presence.from.as_deref(), Some("test@prose.org/test"));
    assert_eq!(presence.to.as_deref(), Some("room@conf.example/bob"));
    assert_eq!(presence.type_, PresenceType::Available);
    assert_eq!(presence.show, None);
    assert_eq!(presence.payloads.len(), 1);
    assert!(presence.payloads[0].is("x", ns::MUC));

    Ok(())
}

#[test]
fn test_join_room_with_show() -> Result<()> {
    let ConnectedMUC { muc, transport, .. } = ConnectedMUC::new()?;

    muc.join(&bare!("room@conf.example"), "bob", Some(Show::Away))?;

    let presences = sent_presences(&transport)?;
    assert_eq!(presences.len(), 1);
    assert_eq!(presences[0].show.as_deref(), Some("away"));
    assert!(presences[0].payloads.iter().any(|p| p.is("x", ns::MUC)));

    Ok(())
}

#[test]
fn test_leave_room_addresses_bare_room() -> Result<()> {
    let ConnectedMUC { muc, transport, .. } = ConnectedMUC::new()?;

    muc.leave(&bare!("room@conf.example"), "bob")?;

    let presences = sent_presences(&transport)?;
    assert_eq!(presences.len(), 1);

    let presence = &presences[0];
    assert_eq!(presence.type_, PresenceType::Unavailable);
    assert_eq!(presence.from.as_deref(), Some("test@prose.org/test"));
    // The nickname is not part of the address.
    assert_eq!(presence.to.as_deref(), Some("room@conf.example"));
    assert_eq!(presence.payloads.len(), 1);
    assert!(presence.payloads[0].is("x", ns::MUC));

    Ok(())
}

#[test]
fn test_send_message() -> Result<()> {
    let ConnectedMUC { muc, transport, .. } = ConnectedMUC::new()?;

    muc.send_message(&bare!("room@conf.example"), "bob", "Hello World")?;
    muc.send_message(&bare!("room@conf.example"), "bob", "Second")?;

    assert_eq!(
        sent_messages(&transport)?,
        vec![
            Message::new()
                .set_type(MessageType::Groupchat)
                .set_id("id-1")
                .set_from(full!("test@prose.org/bob"))
                .set_to(bare!("room@conf.example"))
                .set_body("Hello World"),
            Message::new()
                .set_type(MessageType::Groupchat)
                .set_id("id-2")
                .set_from(full!("test@prose.org/bob"))
                .set_to(bare!("room@conf.example"))
                .set_body("Second"),
        ]
    );

    Ok(())
}

#[test]
fn test_send_message_ignores_connection_resource() -> Result<()> {
    let transport = RecordingTransport::default();
    let router = Router::builder(full!("me@prose.org/laptop/work"), transport.clone())
        .set_id_provider(ConstantIDProvider::new("msg"))
        .build();
    let muc = MUC::new(Arc::new(router), |_: Event| {});

    for nick in ["alice", "alice/away", "\u{FB01}sh", "\u{2168}", "Ünïcødé nick"] {
        transport.reset();
        muc.send_message(&bare!("r@c"), nick, "hi")?;

        let messages = sent_messages(&transport)?;
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].from,
            Some(format!("{}/{}", full!("me@prose.org/laptop/work").to_bare(), nick))
        );
        assert_eq!(messages[0].id.as_deref(), Some("msg"));
    }

    Ok(())
}

#[test]
fn test_join_room_keeps_nick_verbatim() -> Result<()> {
    let ConnectedMUC { muc, transport, .. } = ConnectedMUC::new()?;

    // No resourceprep folding, U+FB01 stays a ligature and U+2168 stays a numeral.
    muc.join(&bare!("r@c"), "\u{FB01}sh", None)?;
    muc.join(&bare!("r@c"), "\u{2168}", None)?;

    let recipients = sent_presences(&transport)?
        .into_iter()
        .map(|presence| presence.to)
        .collect::<Vec<_>>();

    assert_eq!(
        recipients,
        vec![
            Some("r@c/\u{FB01}sh".to_string()),
            Some("r@c/\u{2168}".to_string())
        ]
    );

    Ok(())
}

#[test]
fn test_set_topic() -> Result<()> {
    let ConnectedMUC { muc, transport, .. } = ConnectedMUC::new()?;

    muc.set_topic(&bare!("room@conf.example"), "Fire Burn and Cauldron Bubble!")?;

    assert_eq!(
        sent_messages(&transport)?,
        vec![Message::new()
            .set_type(MessageType::Groupchat)
            .set_from(full!("test@prose.org/test"))
            .set_to(bare!("room@conf.example"))
            .add_subject("Fire Burn and Cauldron Bubble!")]
    );

    Ok(())
}

#[test]
fn test_invite_user_with_reason() -> Result<()> {
    let ConnectedMUC { muc, transport, .. } = ConnectedMUC::new()?;

    muc.invite_user(&bare!("r@c"), &jid!("a@x"), &jid!("b@x"), Some("join us"))?;

    let elements = sent_elements(&transport)?;
    assert_eq!(elements.len(), 1);

    let message = &elements[0];
    assert!(message.is("message", ns::JABBER_CLIENT));
    assert_eq!(message.attr("to"), Some("r@c"));
    assert_eq!(message.attr("from"), Some("a@x"));
    assert_eq!(message.attr("type"), None);

    let reason = message
        .get_child("x", ns::MUC_USER)
        .and_then(|x| x.get_child("invite", ns::MUC_USER))
        .filter(|invite| invite.attr("to") == Some("b@x"))
        .and_then(|invite| invite.get_child("reason", ns::MUC_USER))
        .map(Element::text);
    assert_eq!(reason.as_deref(), Some("join us"));

    Ok(())
}

#[test]
fn test_invite_user_without_reason() -> Result<()> {
    let ConnectedMUC { muc, transport, .. } = ConnectedMUC::new()?;

    muc.invite_user(&bare!("r@c"), &jid!("a@x"), &jid!("b@x"), None)?;

    let messages = sent_messages(&transport)?;
    assert_eq!(messages.len(), 1);

    let muc_user = messages[0].muc_user().expect("Missing muc#user payload");
    assert_eq!(
        muc_user.invites,
        vec![Invite {
            from: None,
            to: Some("b@x".to_string()),
            reason: None,
        }]
    );
    assert!(!transport.sent_stanza_strings()[0].contains("reason"));

    Ok(())
}

#[test]
fn test_operations_fail_after_disconnect() -> Result<()> {
    let ConnectedMUC {
        muc,
        router,
        transport,
        ..
    } = ConnectedMUC::new()?;

    router.disconnect();

    let err = muc
        .join(&bare!("room@conf.example"), "bob", None)
        .expect_err("Expected join to fail");
    assert_eq!(
        err.downcast_ref::<ConnectionError>(),
        Some(&ConnectionError::NotConnected)
    );
    assert!(muc.set_topic(&bare!("room@conf.example"), "Topic").is_err());
    assert!(transport.sent_stanzas().is_empty());
    assert!(transport.is_disconnected());

    Ok(())
}

#[test]
fn test_transport_failures_are_returned() -> Result<()> {
    let ConnectedMUC { muc, transport, .. } = ConnectedMUC::new()?;

    transport.set_failing(true);
    assert!(muc.leave(&bare!("room@conf.example"), "bob").is_err());

    transport.set_failing(false);
    muc.leave(&bare!("room@conf.example"), "bob")?;
    assert_eq!(transport.sent_stanzas().len(), 1);

    Ok(())
}
