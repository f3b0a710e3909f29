// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::FullJid;
use minidom::Element;
use strum_macros::{AsRefStr, Display};

use crate::stanza::XMPPElement;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Not connected")]
    NotConnected,
    #[error("{msg:?}")]
    Generic { msg: String },
}

/// What a stanza handler wants to happen after it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerPoll {
    /// Keep the handler registered for subsequent stanzas.
    Keep,
    /// Unregister the handler.
    Remove,
}

pub type StanzaHandler = Box<dyn Fn(&XMPPElement) -> HandlerPoll + Send + Sync>;

/// Identifies a registered stanza handler so that it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerHandle(u64);

impl HandlerHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StanzaKind {
    Message,
    Presence,
    #[strum(serialize = "iq")]
    IQ,
}

/// Selects the stanzas a handler is interested in. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StanzaMatcher {
    pub ns: Option<String>,
    pub kind: Option<StanzaKind>,
    pub type_: Option<String>,
}

impl StanzaMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ns(mut self, ns: impl Into<String>) -> Self {
        self.ns = Some(ns.into());
        self
    }

    pub fn with_kind(mut self, kind: StanzaKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_type(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    pub fn matches(&self, stanza: &XMPPElement) -> bool {
        if let Some(kind) = self.kind {
            if kind != stanza.kind() {
                return false;
            }
        }

        if let Some(ns) = &self.ns {
            if !stanza.has_ns(ns) {
                return false;
            }
        }

        if let Some(type_) = &self.type_ {
            if stanza.type_attr() != Some(type_.as_str()) {
                return false;
            }
        }

        true
    }
}

/// The live XMPP connection an adapter plugs into.
pub trait Connection: Send + Sync {
    /// Hands `stanza` to the transport. Delivery is not awaited.
    fn send_stanza(&self, stanza: Element) -> Result<()>;

    /// The full JID the connection is bound to.
    fn jid(&self) -> FullJid;

    /// Returns a fresh identifier on every call.
    fn generate_id(&self) -> String;

    /// Registers `handler` for every inbound stanza accepted by `matcher`. The handler stays
    /// registered until it answers `HandlerPoll::Remove`, it is deleted or the connection is
    /// closed.
    fn add_handler(&self, matcher: StanzaMatcher, handler: StanzaHandler) -> HandlerHandle;

    fn delete_handler(&self, handle: HandlerHandle);
}
