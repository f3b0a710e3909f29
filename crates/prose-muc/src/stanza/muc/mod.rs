// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use muc::Muc;
pub use muc_user::{Invite, Item, MucUser};

#[allow(clippy::module_inception)]
mod muc;
mod muc_user;
