// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;

use crate::ns;

/// XEP-0045: Multi-User Chat
/// The `<x xmlns='http://jabber.org/protocol/muc'/>` payload of a presence which signals
/// that the sender wants to enter a room.
/// https://xmpp.org/extensions/xep-0045.html#enter-muc
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Muc {}

impl Muc {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<Muc> for Element {
    fn from(_value: Muc) -> Self {
        Element::builder("x", ns::MUC).build()
    }
}
