// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Serialize;
use strum_macros::IntoStaticStr;

use crate::stanza::{Message, Presence};
use crate::util::split_occupant_jid;

/// A notice published by `MUC`. Serializes as `{"event": <name>, "payload": <notice>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Event {
    InviteReceived(InviteNotice),
    TopicReceived(TopicNotice),
    MessageReceived(ChatNotice),
    PresenceReceived(PresenceNotice),
}

impl Event {
    /// The name the event is published under, e.g. `messageReceived`.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// A mediated invitation into a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteNotice {
    /// The `from` of the message as is, i.e. the room.
    pub room: String,
    pub reason: String,
    pub body: String,
    /// The inviter.
    pub from: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicNotice {
    pub room: String,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatNotice {
    pub room: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    pub body: String,
    /// The markup inside of the XHTML-IM body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    pub delay: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceNotice {
    pub room: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// `available` or the verbatim `type` of the presence.
    pub status: String,
    pub show: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    /// The real JID of the occupant or an empty string in anonymous rooms.
    pub jid: String,
}

impl InviteNotice {
    pub(super) fn from_message(message: &Message) -> Option<Self> {
        let invite = message.muc_user()?.invites.into_iter().next()?;

        Some(InviteNotice {
            room: message.from.clone().unwrap_or_default(),
            reason: invite.reason.unwrap_or_default(),
            body: message.body.clone().unwrap_or_default(),
            from: invite.from,
        })
    }
}

impl TopicNotice {
    pub(super) fn from_message(message: &Message) -> Vec<Self> {
        let (room, _) = split_occupant_jid(message.from.as_deref().unwrap_or_default());

        message
            .subjects
            .iter()
            .map(|topic| TopicNotice {
                room: room.to_string(),
                topic: topic.clone(),
            })
            .collect()
    }
}

impl ChatNotice {
    pub(super) fn from_message(message: &Message) -> Option<Self> {
        let body = message.body.as_ref().filter(|body| !body.is_empty())?;
        let (room, nick) = split_occupant_jid(message.from.as_deref().unwrap_or_default());

        Some(ChatNotice {
            room: room.to_string(),
            nick: nick.map(ToString::to_string),
            body: body.clone(),
            html_body: message.html_body(),
            delay: message.delay_stamp().map(ToString::to_string),
        })
    }
}

impl From<&Presence> for PresenceNotice {
    fn from(presence: &Presence) -> Self {
        let (room, nick) = split_occupant_jid(presence.from.as_deref().unwrap_or_default());
        let item = presence
            .muc_user()
            .and_then(|user| user.occupant_item().cloned());

        PresenceNotice {
            room: room.to_string(),
            nick: nick.map(ToString::to_string),
            status: presence.type_.as_str().to_string(),
            show: presence.show.clone().unwrap_or_default(),
            role: item.as_ref().and_then(|item| item.role.clone()),
            affiliation: item.as_ref().and_then(|item| item.affiliation.clone()),
            jid: item.and_then(|item| item.jid).unwrap_or_default(),
        }
    }
}
