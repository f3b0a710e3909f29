// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;

use crate::ns;
use crate::util::{ElementExt, ParseError};

/// XEP-0045: Multi-User Chat
/// The `<x xmlns='http://jabber.org/protocol/muc#user'/>` payload carried by occupant
/// presences and by mediated invitations.
///
/// Parsing is lenient. Unknown children are skipped and missing attributes become `None`.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct MucUser {
    pub items: Vec<Item>,
    pub invites: Vec<Invite>,
}

/// Occupant metadata.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Item {
    pub affiliation: Option<String>,
    pub role: Option<String>,
    /// The real JID of the occupant, only visible in non-anonymous rooms.
    pub jid: Option<String>,
    pub nick: Option<String>,
}

/// https://xmpp.org/extensions/xep-0045.html#invite-mediated
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Invite {
    pub from: Option<String>,
    pub to: Option<String>,
    pub reason: Option<String>,
}

impl MucUser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_invite(mut self, invite: Invite) -> Self {
        self.invites.push(invite);
        self
    }

    /// The first item carrying both an affiliation and a role.
    pub fn occupant_item(&self) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.affiliation.is_some() && item.role.is_some())
    }
}

impl TryFrom<&Element> for MucUser {
    type Error = ParseError;

    fn try_from(root: &Element) -> Result<Self, Self::Error> {
        root.expect_is("x", ns::MUC_USER)?;

        let mut user = MucUser::default();

        for child in root.children() {
            match child {
                _ if child.is("item", ns::MUC_USER) => user.items.push(Item::from(child)),
                _ if child.is("invite", ns::MUC_USER) => user.invites.push(Invite::from(child)),
                _ => (),
            }
        }

        Ok(user)
    }
}

impl From<MucUser> for Element {
    fn from(value: MucUser) -> Self {
        Element::builder("x", ns::MUC_USER)
            .append_all(value.items)
            .append_all(value.invites)
            .build()
    }
}

impl From<&Element> for Item {
    fn from(value: &Element) -> Self {
        Item {
            affiliation: value.attr_string("affiliation"),
            role: value.attr_string("role"),
            jid: value.attr_string("jid"),
            nick: value.attr_string("nick"),
        }
    }
}

impl From<Item> for Element {
    fn from(value: Item) -> Self {
        Element::builder("item", ns::MUC_USER)
            .attr("affiliation", value.affiliation)
            .attr("role", value.role)
            .attr("jid", value.jid)
            .attr("nick", value.nick)
            .build()
    }
}

impl From<&Element> for Invite {
    fn from(value: &Element) -> Self {
        Invite {
            from: value.attr_string("from"),
            to: value.attr_string("to"),
            reason: value
                .get_child("reason", ns::MUC_USER)
                .map(Element::text),
        }
    }
}

impl From<Invite> for Element {
    fn from(value: Invite) -> Self {
        Element::builder("invite", ns::MUC_USER)
            .attr("from", value.from)
            .attr("to", value.to)
            .append_all(
                value
                    .reason
                    .map(|reason| Element::builder("reason", ns::MUC_USER).append(reason)),
            )
            .build()
    }
}
