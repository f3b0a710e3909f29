// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use event::{ChatNotice, Event, InviteNotice, PresenceNotice, TopicNotice};
pub use event_handler::{event_channel, EventHandler};
pub use muc::MUC;

mod event;
mod event_handler;
#[allow(clippy::module_inception)]
mod muc;
