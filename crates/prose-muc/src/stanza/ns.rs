// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

// See all at: https://xmpp.org/registrar/namespaces.html

/// RFC 6120: XMPP Core
pub const JABBER_CLIENT: &str = "jabber:client";

/// XEP-0045: Multi-User Chat
pub const MUC: &str = "http://jabber.org/protocol/muc";

/// XEP-0045: Multi-User Chat
pub const MUC_USER: &str = "http://jabber.org/protocol/muc#user";

/// XEP-0045: Multi-User Chat
pub const MUC_OWNER: &str = "http://jabber.org/protocol/muc#owner";

/// XEP-0045: Multi-User Chat
pub const MUC_ADMIN: &str = "http://jabber.org/protocol/muc#admin";

/// XEP-0071: XHTML-IM
pub const XHTML_IM: &str = "http://jabber.org/protocol/xhtml-im";

/// XEP-0071: XHTML-IM
pub const XHTML: &str = "http://www.w3.org/1999/xhtml";

/// XEP-0203: Delayed Delivery
pub const DELAY: &str = "urn:xmpp:delay";
