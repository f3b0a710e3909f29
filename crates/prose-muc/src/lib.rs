// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection::{
    Connection, ConnectionError, HandlerHandle, HandlerPoll, Router, RouterBuilder, StanzaHandler,
    StanzaKind, StanzaMatcher, Subscription, Subscriptions, Transport,
};
pub use deps::{IDProvider, UUIDProvider};
pub use mods::muc::{event_channel, Event, EventHandler, MUC};
pub use stanza::ns;
pub use util::{ElementExt, ParseError};

pub mod connection;
mod deps;
pub mod mods;
pub mod stanza;
mod util;
