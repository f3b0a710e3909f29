// prose-core-client/prose-muc
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::{Element, NSChoice};

use crate::util::ParseError;

pub trait ElementExt {
    fn expect_is<'a>(
        &self,
        name: impl AsRef<str>,
        ns: impl Into<NSChoice<'a>>,
    ) -> Result<(), ParseError>;

    fn attr_string(&self, name: impl AsRef<str>) -> Option<String>;

    /// Returns the serialized child nodes of this element, i.e. its markup without the
    /// enclosing tag.
    fn inner_markup(&self) -> String;
}

impl ElementExt for Element {
    fn expect_is<'a>(
        &self,
        name: impl AsRef<str>,
        ns: impl Into<NSChoice<'a>>,
    ) -> Result<(), ParseError> {
        let ns = ns.into();
        if !self.is(&name, ns) {
            return Err(ParseError::Generic {
                msg: format!(
                    "Expected element with name {} and namespace {}. Got {} and {} instead.",
                    name.as_ref(),
                    ns_choice_to_string(ns),
                    self.name(),
                    self.ns()
                ),
            });
        }
        Ok(())
    }

    fn attr_string(&self, name: impl AsRef<str>) -> Option<String> {
        self.attr(name.as_ref()).map(ToString::to_string)
    }

    fn inner_markup(&self) -> String {
        // Serialized inside a bare copy of this element the children inherit its namespace
        // and don't repeat the declaration.
        let markup = String::from(
            &Element::builder(self.name(), self.ns())
                .append_all(self.nodes().cloned())
                .build(),
        );

        let Some(start_tag_end) = markup.find('>') else {
            return String::new();
        };
        if markup[..start_tag_end].ends_with('/') {
            return String::new();
        }
        let end_tag_start = markup.rfind("</").unwrap_or(markup.len());

        markup
            .get(start_tag_end + 1..end_tag_start)
            .unwrap_or_default()
            .to_string()
    }
}

fn ns_choice_to_string<'a>(ns: impl Into<NSChoice<'a>>) -> String {
    match ns.into() {
        NSChoice::None => "<none>".to_string(),
        NSChoice::OneOf(ns) => ns.to_string(),
        NSChoice::AnyOf(ns_list) => ns_list.join(" or "),
        NSChoice::Any => "<any>".to_string(),
    }
}
