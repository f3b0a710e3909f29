// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use jid::FullJid;
use minidom::Element;
use parking_lot::RwLock;
#[cfg(feature = "trace-stanzas")]
use tracing::info;
use tracing::{debug, error, warn};

use crate::connection::{
    Connection, ConnectionError, HandlerHandle, HandlerPoll, StanzaHandler, StanzaMatcher,
    Transport,
};
use crate::deps::{IDProvider, UUIDProvider};
use crate::stanza::XMPPElement;
use crate::util::ParseError;

type SharedStanzaHandler = Arc<dyn Fn(&XMPPElement) -> HandlerPoll + Send + Sync>;

/// An in-process `Connection` which routes inbound stanzas to registered handlers and
/// forwards outbound stanzas to a `Transport`.
#[derive(Clone)]
pub struct Router {
    inner: Arc<RouterInner>,
}

struct RouterInner {
    jid: FullJid,
    transport: Box<dyn Transport>,
    id_provider: Box<dyn IDProvider>,
    handlers: RwLock<Vec<Registration>>,
    last_handler_id: AtomicU64,
    is_connected: AtomicBool,
}

struct Registration {
    handle: HandlerHandle,
    matcher: StanzaMatcher,
    handler: SharedStanzaHandler,
}

pub struct RouterBuilder {
    jid: FullJid,
    transport: Box<dyn Transport>,
    id_provider: Box<dyn IDProvider>,
}

impl RouterBuilder {
    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Box::new(id_provider);
        self
    }

    pub fn build(self) -> Router {
        Router {
            inner: Arc::new(RouterInner {
                jid: self.jid,
                transport: self.transport,
                id_provider: self.id_provider,
                handlers: Default::default(),
                last_handler_id: AtomicU64::new(0),
                is_connected: AtomicBool::new(true),
            }),
        }
    }
}

impl Router {
    pub fn builder(jid: FullJid, transport: impl Transport + 'static) -> RouterBuilder {
        RouterBuilder {
            jid,
            transport: Box::new(transport),
            id_provider: Box::new(UUIDProvider::new()),
        }
    }

    /// Feeds an inbound stanza to every handler whose matcher accepts it. Handlers answering
    /// `HandlerPoll::Remove` are unregistered afterwards.
    pub fn dispatch(&self, stanza: Element) {
        if !self.is_connected() {
            warn!("Ignoring stanza received after the connection was closed.");
            return;
        }

        #[cfg(feature = "trace-stanzas")]
        info!(direction = "in", "{}", String::from(&stanza));

        let stanza = match XMPPElement::try_from(stanza) {
            Ok(stanza) => stanza,
            Err(err) => {
                error!("Failed to parse stanza. {}", err);
                return;
            }
        };

        // Handlers may add or delete handlers, so they must not run while the lock is held.
        let matching_handlers = self
            .inner
            .handlers
            .read()
            .iter()
            .filter(|registration| registration.matcher.matches(&stanza))
            .map(|registration| (registration.handle, registration.handler.clone()))
            .collect::<Vec<_>>();

        let mut expired_handles = vec![];

        for (handle, handler) in matching_handlers {
            if (handler)(&stanza) == HandlerPoll::Remove {
                expired_handles.push(handle);
            }
        }

        if !expired_handles.is_empty() {
            debug!(count = expired_handles.len(), "Removing expired stanza handlers");
            self.inner
                .handlers
                .write()
                .retain(|registration| !expired_handles.contains(&registration.handle));
        }
    }

    pub fn dispatch_str(&self, xml: &str) -> Result<(), ParseError> {
        self.dispatch(Element::from_str(xml)?);
        Ok(())
    }

    /// Closes the connection. Every registered handler is dropped.
    pub fn disconnect(&self) {
        if !self.inner.is_connected.swap(false, Ordering::SeqCst) {
            return;
        }
        self.inner.handlers.write().clear();
        self.inner.transport.disconnect();
    }

    pub fn is_connected(&self) -> bool {
        self.inner.is_connected.load(Ordering::SeqCst)
    }

    pub fn handler_count(&self) -> usize {
        self.inner.handlers.read().len()
    }
}

impl Connection for Router {
    fn send_stanza(&self, stanza: Element) -> Result<()> {
        if !self.is_connected() {
            return Err(ConnectionError::NotConnected.into());
        }

        #[cfg(feature = "trace-stanzas")]
        info!(direction = "out", "{}", String::from(&stanza));

        self.inner.transport.send_stanza(stanza)
    }

    fn jid(&self) -> FullJid {
        self.inner.jid.clone()
    }

    fn generate_id(&self) -> String {
        self.inner.id_provider.new_id()
    }

    fn add_handler(&self, matcher: StanzaMatcher, handler: StanzaHandler) -> HandlerHandle {
        let handle =
            HandlerHandle::new(self.inner.last_handler_id.fetch_add(1, Ordering::SeqCst) + 1);

        debug!(handle = handle.id(), ?matcher, "Adding stanza handler");

        self.inner.handlers.write().push(Registration {
            handle,
            matcher,
            handler: Arc::from(handler),
        });

        handle
    }

    fn delete_handler(&self, handle: HandlerHandle) {
        self.inner
            .handlers
            .write()
            .retain(|registration| registration.handle != handle);
    }
}

impl Debug for Router {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("jid", &self.inner.jid)
            .field("is_connected", &self.is_connected())
            .finish()
    }
}
