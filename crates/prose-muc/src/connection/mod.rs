// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection::{
    Connection, ConnectionError, HandlerHandle, HandlerPoll, StanzaHandler, StanzaKind,
    StanzaMatcher,
};
pub use router::{Router, RouterBuilder};
pub use subscription::{Subscription, Subscriptions};
pub use transport::Transport;

#[allow(clippy::module_inception)]
mod connection;
mod router;
mod subscription;
mod transport;
