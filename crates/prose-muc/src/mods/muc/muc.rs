// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use jid::{BareJid, Jid};
use minidom::Element;
use tracing::{debug, trace};

use crate::connection::{
    Connection, HandlerPoll, StanzaKind, StanzaMatcher, Subscription, Subscriptions,
};
use crate::mods::muc::{
    ChatNotice, Event, EventHandler, InviteNotice, PresenceNotice, TopicNotice,
};
use crate::ns;
use crate::stanza::muc::{Invite, Muc, MucUser};
use crate::stanza::{Message, MessageType, Presence, PresenceType, Show, XMPPElement};

/// XEP-0045: Multi-User Chat
///
/// Turns inbound invites, room messages, topic changes and occupant presences into `Event`s
/// and sends the stanzas for joining, leaving and talking in rooms.
#[derive(Clone)]
pub struct MUC {
    connection: Arc<dyn Connection>,
    event_handler: Arc<dyn EventHandler>,
}

impl MUC {
    pub fn new(connection: Arc<dyn Connection>, event_handler: impl EventHandler + 'static) -> Self {
        MUC {
            connection,
            event_handler: Arc::new(event_handler),
        }
    }

    /// Registers the stanza handlers on the connection. They stay registered until the
    /// returned subscriptions are disposed or the connection is closed.
    pub fn attach(&self) -> Subscriptions {
        let subscriptions = vec![
            self.subscribe(
                StanzaMatcher::new()
                    .with_ns(ns::MUC_USER)
                    .with_kind(StanzaKind::Message),
                Self::handle_invite,
            ),
            self.subscribe(
                StanzaMatcher::new()
                    .with_kind(StanzaKind::Message)
                    .with_type(MessageType::Groupchat.as_ref()),
                Self::handle_groupchat_message,
            ),
            self.subscribe(
                StanzaMatcher::new()
                    .with_ns(ns::MUC_USER)
                    .with_kind(StanzaKind::Presence),
                Self::handle_presence,
            ),
        ];

        debug!(count = subscriptions.len(), "Attached MUC stanza handlers");
        Subscriptions::from(subscriptions)
    }
}

impl MUC {
    /// Enters `room` under `nick`.
    pub fn join(&self, room: &BareJid, nick: &str, show: Option<Show>) -> Result<()> {
        let presence = Presence::new()
            .set_from(self.connection.jid())
            .set_to(occupant_address(room, nick))
            .set_show(show)
            .add_payload(Muc::new());

        self.send_stanza(presence)
    }

    /// Exits `room`. The presence goes to the bare room address, `nick` is not part of it.
    pub fn leave(&self, room: &BareJid, nick: &str) -> Result<()> {
        debug!(room = %room, nick, "Leaving room");

        let presence = Presence::new()
            .set_type(PresenceType::Unavailable)
            .set_from(self.connection.jid())
            .set_to(room)
            .add_payload(Muc::new());

        self.send_stanza(presence)
    }

    /// Sends `text` to everyone in `room`. The message is sent from our bare JID with
    /// `nick` as its resource, regardless of the resource the connection is bound to.
    pub fn send_message(&self, room: &BareJid, nick: &str, text: &str) -> Result<()> {
        let from = occupant_address(&self.connection.jid().to_bare(), nick);

        let message = Message::new()
            .set_type(MessageType::Groupchat)
            .set_id(self.connection.generate_id())
            .set_from(from)
            .set_to(room)
            .set_body(text);

        self.send_stanza(message)
    }

    /// Asks the room to change its subject to `topic`.
    pub fn set_topic(&self, room: &BareJid, topic: &str) -> Result<()> {
        let message = Message::new()
            .set_type(MessageType::Groupchat)
            .set_from(self.connection.jid())
            .set_to(room)
            .add_subject(topic);

        self.send_stanza(message)
    }

    /// Sends a mediated invitation for `to` through `room`.
    pub fn invite_user(
        &self,
        room: &BareJid,
        from: &Jid,
        to: &Jid,
        reason: Option<&str>,
    ) -> Result<()> {
        let message = Message::new()
            .set_from(from)
            .set_to(room)
            .add_payload(MucUser::new().with_invite(Invite {
                from: None,
                to: Some(to.to_string()),
                reason: reason.map(ToString::to_string),
            }));

        self.send_stanza(message)
    }
}

impl MUC {
    /// The registered handler only holds on to the event handler. Holding the connection
    /// would keep it alive through its own handler list.
    fn subscribe(
        &self,
        matcher: StanzaMatcher,
        handler: fn(&dyn EventHandler, &XMPPElement),
    ) -> Subscription {
        let event_handler = self.event_handler.clone();
        let handle = self.connection.add_handler(
            matcher,
            Box::new(move |stanza: &XMPPElement| {
                handler(event_handler.as_ref(), stanza);
                HandlerPoll::Keep
            }),
        );
        Subscription::new(self.connection.clone(), handle)
    }

    fn send_stanza(&self, stanza: impl Into<Element>) -> Result<()> {
        self.connection.send_stanza(stanza.into())
    }
}

impl MUC {
    fn handle_invite(event_handler: &dyn EventHandler, stanza: &XMPPElement) {
        let XMPPElement::Message(message) = stanza else {
            return;
        };

        let Some(notice) = InviteNotice::from_message(message) else {
            trace!("Ignoring muc#user message without invite");
            return;
        };

        publish(event_handler, Event::InviteReceived(notice))
    }

    fn handle_groupchat_message(event_handler: &dyn EventHandler, stanza: &XMPPElement) {
        let XMPPElement::Message(message) = stanza else {
            return;
        };

        for notice in TopicNotice::from_message(message) {
            publish(event_handler, Event::TopicReceived(notice))
        }

        if let Some(notice) = ChatNotice::from_message(message) {
            publish(event_handler, Event::MessageReceived(notice))
        }
    }

    fn handle_presence(event_handler: &dyn EventHandler, stanza: &XMPPElement) {
        let XMPPElement::Presence(presence) = stanza else {
            return;
        };

        publish(
            event_handler,
            Event::PresenceReceived(PresenceNotice::from(presence)),
        )
    }
}

fn publish(event_handler: &dyn EventHandler, event: Event) {
    trace!(event = event.name(), "Publishing MUC event");
    event_handler.handle_event(event)
}

/// `room/nick` with `nick` taken verbatim. Nicknames are not normalized before they are sent.
fn occupant_address(room: &BareJid, nick: &str) -> String {
    format!("{}/{}", room, nick)
}
