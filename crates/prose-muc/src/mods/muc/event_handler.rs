// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::warn;

use crate::mods::muc::Event;

/// Receives the notices published by `MUC`.
pub trait EventHandler: Send + Sync {
    fn handle_event(&self, event: Event);
}

impl<F> EventHandler for F
where
    F: Fn(Event) + Send + Sync,
{
    fn handle_event(&self, event: Event) {
        self(event)
    }
}

/// Returns an `EventHandler` which forwards every event into an unbounded channel together
/// with the receiving end of that channel.
pub fn event_channel() -> (impl EventHandler, UnboundedReceiver<Event>) {
    let (sender, receiver) = mpsc::unbounded_channel();

    let handler = move |event: Event| {
        if let Err(err) = sender.send(event) {
            warn!(
                event = err.0.name(),
                "Dropping event since the receiver was closed."
            );
        }
    };

    (handler, receiver)
}
