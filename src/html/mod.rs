mod attribute;
mod encoding;
mod render;
mod tag;
mod text;

pub use attribute::{Attribute, AttributeKind};
pub use encoding::{html_decode, html_encode};
pub use render::render_attributes;
pub use tag::Tag;
pub use text::Text;

use std::fmt::Display;

/// A node of the tree
///
/// Nodes of different variants are never equal, even when their content
/// matches. [`Element::Empty`] renders to nothing and is only equal to itself.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub enum Element {
    #[default]
    Empty,
    Tag(Tag),
    Text(Text),
}

impl Element {
    /// Render the node `indent` tabs deep
    pub fn render(&self, indent: usize) -> String {
        match self {
            Element::Empty => String::new(),
            Element::Tag(tag) => tag.render(indent),
            Element::Text(text) => text.render(indent),
        }
    }

    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Element::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Element::Text(text) => Some(text),
            _ => None,
        }
    }

    pub(crate) fn is_tag_named(&self, name: &str) -> bool {
        self.as_tag().is_some_and(|t| t.name() == name)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(0))
    }
}

impl From<Tag> for Element {
    fn from(tag: Tag) -> Self {
        Element::Tag(tag)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

/// Encoded text
impl From<&str> for Element {
    fn from(content: &str) -> Self {
        Element::Text(content.into())
    }
}

/// Build a list of plain [`Attribute`]s: `attributes!(src => "a.png", alt => "logo")`
#[macro_export]
macro_rules! attributes {
    (@name $name:ident) => {
        stringify!($name)
    };
    (@name $name:literal) => {
        $name
    };
    ($($name:tt => $value:expr),* $(,)?) => {
        vec![$($crate::Attribute::new($crate::attributes!(@name $name), $value)),*]
    };
}

#[cfg(test)]
#[test]
fn test_empty_element() {
    assert_eq!(Element::Empty, Element::default());
    assert_eq!(Element::Empty.to_string(), "");
    assert_ne!(Element::Empty, Element::from(Text::raw("")));
    assert_ne!(Element::Empty, Element::from(Tag::new("")));

    let tag = Tag::with_children("div", [Element::Empty]);
    assert_eq!(tag.to_string(), "<div />\n");
}

#[cfg(test)]
#[test]
fn test_variants_differ() {
    let text = Element::from(Text::raw("p"));
    let tag = Element::from(Tag::new("p"));
    assert_ne!(text, tag);
    assert!(tag.is_tag_named("p"));
    assert!(!text.is_tag_named("p"));
    assert_eq!(text.as_text().map(Text::content), Some("p"));
    assert_eq!(tag.as_tag().map(Tag::name), Some("p"));
}

#[cfg(test)]
#[test]
fn test_attributes_macro() {
    let attrs = attributes!(src => "logo.jpg", "data-id" => "7");
    assert_eq!(
        attrs,
        vec![Attribute::new("src", "logo.jpg"), Attribute::new("data-id", "7")]
    );
    // Quoted names are taken as string literals, escapes included
    let attrs = attributes!("data-\"q\"" => "1", "a'b" => "2");
    assert_eq!(attrs[0].name(), "data-\"q\"");
    assert_eq!(attrs[1].name(), "a'b");
    let empty: Vec<Attribute> = attributes!();
    assert!(empty.is_empty());
}
