// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use element_ext::ElementExt;
pub(crate) use occupant_jid::split_occupant_jid;
pub use parse_error::ParseError;

mod element_ext;
mod occupant_jid;
mod parse_error;
