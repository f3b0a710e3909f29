// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;

use crate::connection::StanzaKind;
use crate::ns;
use crate::stanza::{Message, Presence, PresenceType};
use crate::util::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum XMPPElement {
    Presence(Presence),
    Message(Message),
    IQ(Element),
}

impl XMPPElement {
    pub fn kind(&self) -> StanzaKind {
        match self {
            XMPPElement::Presence(_) => StanzaKind::Presence,
            XMPPElement::Message(_) => StanzaKind::Message,
            XMPPElement::IQ(_) => StanzaKind::IQ,
        }
    }

    /// The value of the stanza's `type` attribute. Messages without one report `normal`,
    /// available presences report `None`.
    pub fn type_attr(&self) -> Option<&str> {
        match self {
            XMPPElement::Presence(presence) => match &presence.type_ {
                PresenceType::Available => None,
                type_ => Some(type_.as_str()),
            },
            XMPPElement::Message(message) => Some(message.type_.as_ref()),
            XMPPElement::IQ(iq) => iq.attr("type"),
        }
    }

    /// Whether the stanza itself or any of its payloads lives in the namespace `ns`.
    pub fn has_ns(&self, namespace: &str) -> bool {
        let payloads = match self {
            XMPPElement::Presence(presence) => &presence.payloads,
            XMPPElement::Message(message) => &message.payloads,
            XMPPElement::IQ(iq) => {
                return iq.ns() == namespace || iq.children().any(|c| c.ns() == namespace)
            }
        };

        namespace == ns::JABBER_CLIENT || payloads.iter().any(|p| p.ns() == namespace)
    }
}

impl TryFrom<Element> for XMPPElement {
    type Error = ParseError;

    fn try_from(value: Element) -> Result<Self, Self::Error> {
        if value.is("iq", ns::JABBER_CLIENT) {
            Ok(Self::IQ(value))
        } else if value.is("message", ns::JABBER_CLIENT) {
            Ok(Self::Message(value.into()))
        } else if value.is("presence", ns::JABBER_CLIENT) {
            Ok(Self::Presence(value.into()))
        } else {
            Err(ParseError::Generic {
                msg: format!("Encountered unknown element {} ({}).", value.name(), value.ns()),
            })
        }
    }
}

impl From<XMPPElement> for Element {
    fn from(value: XMPPElement) -> Self {
        match value {
            XMPPElement::Presence(presence) => presence.into(),
            XMPPElement::Message(message) => message.into(),
            XMPPElement::IQ(iq) => iq,
        }
    }
}
