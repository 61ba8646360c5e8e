//! Build HTML fragments as a tree of tags, text and attributes, then render
//! them to an indented string.
//!
//! ```
//! use html_builder::Tag;
//!
//! let mut div = Tag::new("div");
//! div.add_class("box").add_child(Tag::with_text("p", "x"));
//! assert_eq!(
//!     div.to_string(),
//!     "<div class=\"box\">\n\t<p>\n\t\tx\n\t</p>\n</div>\n"
//! );
//! ```

/// Reading of inline CSS declaration lists
pub mod css;
/// Sample documents printed by the binary
pub mod demos;
mod error;
/// The element tree: tags, text and attributes
pub mod html;

pub use error::Error;
pub use html::{Attribute, AttributeKind, Element, Tag, Text};
