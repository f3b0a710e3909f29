// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message::{Message, MessageType};
pub use presence::{Presence, PresenceType, Show};
pub use xmpp_element::XMPPElement;

pub mod message;
pub mod muc;
pub mod ns;
pub mod presence;
mod xmpp_element;
