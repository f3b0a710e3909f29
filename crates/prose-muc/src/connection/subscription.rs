// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use tracing::debug;

use crate::connection::{Connection, HandlerHandle};

/// A stanza handler registered on a connection.
///
/// The handler stays registered until `dispose` is called or the connection is closed.
/// Dropping a `Subscription` does not unregister its handler.
pub struct Subscription {
    connection: Arc<dyn Connection>,
    handle: HandlerHandle,
}

impl Subscription {
    pub fn new(connection: Arc<dyn Connection>, handle: HandlerHandle) -> Self {
        Self { connection, handle }
    }

    pub fn handle(&self) -> HandlerHandle {
        self.handle
    }

    pub fn dispose(self) {
        debug!(handle = self.handle.id(), "Disposing stanza handler");
        self.connection.delete_handler(self.handle)
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("handle", &self.handle)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct Subscriptions(Vec<Subscription>);

impl Subscriptions {
    pub fn handles(&self) -> Vec<HandlerHandle> {
        self.0.iter().map(Subscription::handle).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dispose(self) {
        for subscription in self.0 {
            subscription.dispose()
        }
    }
}

impl From<Vec<Subscription>> for Subscriptions {
    fn from(value: Vec<Subscription>) -> Self {
        Self(value)
    }
}

impl IntoIterator for Subscriptions {
    type Item = Subscription;
    type IntoIter = std::vec::IntoIter<Subscription>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
