// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::{Element, IntoAttributeValue, NSChoice};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::ns;
use crate::stanza::muc::MucUser;
use crate::util::ElementExt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MessageType {
    Chat,
    Error,
    Groupchat,
    Headline,
    #[default]
    Normal,
}

impl MessageType {
    /// RFC 6121 wants unknown or missing types to be treated as `normal`.
    fn from_attr(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl IntoAttributeValue for MessageType {
    fn into_attribute_value(self) -> Option<String> {
        match self {
            MessageType::Normal => None,
            _ => Some(self.to_string()),
        }
    }
}

/// A `message` stanza in the `jabber:client` namespace.
///
/// Parsing never fails: whatever the stanza lacks stays `None` or empty.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Message {
    pub from: Option<String>,
    pub to: Option<String>,
    pub id: Option<String>,
    pub type_: MessageType,
    /// The text of the first direct `body` child.
    pub body: Option<String>,
    /// The text of every direct `subject` child, in document order.
    pub subjects: Vec<String>,
    pub payloads: Vec<Element>,
}

impl Message {
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

    pub fn set_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_type(mut self, type_: MessageType) -> Self {
        self.type_ = type_;
        self
    }

    pub fn set_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn add_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    pub fn add_payload(mut self, payload: impl Into<Element>) -> Self {
        self.payloads.push(payload.into());
        self
    }
}

impl Message {
    pub fn muc_user(&self) -> Option<MucUser> {
        self.payloads.iter().find_map(|p| MucUser::try_from(p).ok())
    }

    /// XEP-0071: XHTML-IM
    /// Returns the markup inside of `<html><body>…</body></html>` with the formatting intact.
    pub fn html_body(&self) -> Option<String> {
        self.payloads
            .iter()
            .find(|p| p.is("html", ns::XHTML_IM))
            .and_then(|html| html.get_child("body", NSChoice::Any))
            .map(|body| body.inner_markup())
    }

    /// XEP-0203: Delayed Delivery
    pub fn delay_stamp(&self) -> Option<&str> {
        self.payloads
            .iter()
            .find(|p| p.name() == "delay")
            .and_then(|delay| delay.attr("stamp"))
    }
}

impl From<Element> for Message {
    fn from(root: Element) -> Self {
        let mut message = Message {
            from: root.attr_string("from"),
            to: root.attr_string("to"),
            id: root.attr_string("id"),
            type_: MessageType::from_attr(root.attr("type")),
            body: None,
            subjects: vec![],
            payloads: vec![],
        };

        for child in root.children() {
            match child {
                _ if child.is("body", ns::JABBER_CLIENT) && message.body.is_none() => {
                    message.body = Some(child.text())
                }
                _ if child.is("subject", ns::JABBER_CLIENT) => message.subjects.push(child.text()),
                _ => message.payloads.push(child.clone()),
            }
        }

        message
    }
}

impl From<Message> for Element {
    fn from(value: Message) -> Self {
        Element::builder("message", ns::JABBER_CLIENT)
            .attr("from", value.from)
            .attr("to", value.to)
            .attr("id", value.id)
            .attr("type", value.type_)
            .append_all(
                value
                    .subjects
                    .into_iter()
                    .map(|subject| Element::builder("subject", ns::JABBER_CLIENT).append(subject)),
            )
            .append_all(
                value
                    .body
                    .map(|body| Element::builder("body", ns::JABBER_CLIENT).append(body)),
            )
            .append_all(value.payloads)
            .build()
    }
}
