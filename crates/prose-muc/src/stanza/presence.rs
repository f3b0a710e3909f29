// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::{Element, IntoAttributeValue};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::ns;
use crate::stanza::muc::MucUser;
use crate::util::ElementExt;

/// RFC 6121: Presence types. `Available` is the absence of a `type` attribute, values
/// outside of the RFC are kept as they are.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum PresenceType {
    #[default]
    Available,
    Error,
    Probe,
    Subscribe,
    Subscribed,
    Unavailable,
    Unsubscribe,
    Unsubscribed,
    Other(String),
}

impl PresenceType {
    pub fn as_str(&self) -> &str {
        match self {
            PresenceType::Available => "available",
            PresenceType::Error => "error",
            PresenceType::Probe => "probe",
            PresenceType::Subscribe => "subscribe",
            PresenceType::Subscribed => "subscribed",
            PresenceType::Unavailable => "unavailable",
            PresenceType::Unsubscribe => "unsubscribe",
            PresenceType::Unsubscribed => "unsubscribed",
            PresenceType::Other(value) => value,
        }
    }
}

impl From<&str> for PresenceType {
    fn from(value: &str) -> Self {
        match value {
            "available" => PresenceType::Available,
            "error" => PresenceType::Error,
            "probe" => PresenceType::Probe,
            "subscribe" => PresenceType::Subscribe,
            "subscribed" => PresenceType::Subscribed,
            "unavailable" => PresenceType::Unavailable,
            "unsubscribe" => PresenceType::Unsubscribe,
            "unsubscribed" => PresenceType::Unsubscribed,
            _ => PresenceType::Other(value.to_string()),
        }
    }
}

impl IntoAttributeValue for PresenceType {
    fn into_attribute_value(self) -> Option<String> {
        match self {
            PresenceType::Available => None,
            _ => Some(self.as_str().to_string()),
        }
    }
}

/// RFC 6121: The `show` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Show {
    Away,
    Chat,
    Dnd,
    Xa,
}

/// A `presence` stanza in the `jabber:client` namespace.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Presence {
    pub from: Option<String>,
    pub to: Option<String>,
    pub id: Option<String>,
    pub type_: PresenceType,
    /// The raw text of the `show` child.
    pub show: Option<String>,
    /// The raw text of the `status` child.
    pub status: Option<String>,
    pub payloads: Vec<Element>,
}

impl Presence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_from(mut self, from: impl ToString) -> Self {
        self.from = Some(from.to_string());
        self
    }

    pub fn set_to(mut self, to: impl ToString) -> Self {
        self.to = Some(to.to_string());
        self
    }

    pub fn set_type(mut self, type_: PresenceType) -> Self {
        self.type_ = type_;
        self
    }

    pub fn set_show(mut self, show: Option<Show>) -> Self {
        self.show = show.map(|show| show.to_string());
        self
    }

    pub fn add_payload(mut self, payload: impl Into<Element>) -> Self {
        self.payloads.push(payload.into());
        self
    }
}

impl Presence {
    pub fn muc_user(&self) -> Option<MucUser> {
        self.payloads.iter().find_map(|p| MucUser::try_from(p).ok())
    }
}

impl From<Element> for Presence {
    fn from(root: Element) -> Self {
        let mut presence = Presence {
            from: root.attr_string("from"),
            to: root.attr_string("to"),
            id: root.attr_string("id"),
            type_: root.attr("type").map(PresenceType::from).unwrap_or_default(),
            show: None,
            status: None,
            payloads: vec![],
        };

        for child in root.children() {
            match child {
                _ if child.is("show", ns::JABBER_CLIENT) => presence.show = Some(child.text()),
                _ if child.is("status", ns::JABBER_CLIENT) && presence.status.is_none() => {
                    presence.status = Some(child.text())
                }
                _ => presence.payloads.push(child.clone()),
            }
        }

        presence
    }
}

impl From<Presence> for Element {
    fn from(value: Presence) -> Self {
        Element::builder("presence", ns::JABBER_CLIENT)
            .attr("from", value.from)
            .attr("to", value.to)
            .attr("id", value.id)
            .attr("type", value.type_)
            .append_all(
                value
                    .show
                    .map(|show| Element::builder("show", ns::JABBER_CLIENT).append(show)),
            )
            .append_all(
                value
                    .status
                    .map(|status| Element::builder("status", ns::JABBER_CLIENT).append(status)),
            )
            .append_all(value.payloads)
            .build()
    }
}
