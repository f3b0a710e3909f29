// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Splits an occupant address like `room@conference.prose.org/nick` into the room
/// (bare part) and the nickname (resource part).
///
/// Everything after the first `/` is the nickname since resources may contain slashes.
pub(crate) fn split_occupant_jid(jid: &str) -> (&str, Option<&str>) {
    match jid.split_once('/') {
        Some((room, nick)) => (room, Some(nick)),
        None => (jid, None),
    }
}
