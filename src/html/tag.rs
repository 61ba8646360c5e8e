use super::attribute::{Attribute, AttributeKind};
use super::render::render_attributes;
use super::text::Text;
use super::Element;
use crate::css::parse_inline_style;
use crate::Error;
use std::fmt::Display;
use tracing::{span, trace, Level};

/// One HTML element with its attributes and children
///
/// Both collections are `None` rather than empty when they hold nothing, and
/// every removal below restores that state once the last entry goes.
/// Equality and hashing are structural and order sensitive: the same
/// children added in a different order make a different tag.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Tag {
    name: String,
    attributes: Option<Vec<Attribute>>,
    children: Option<Vec<Element>>,
}

/// Turn `Some(empty)` back into `None`
fn collapse<T>(list: &mut Option<Vec<T>>) {
    if list.as_ref().is_some_and(|l| l.is_empty()) {
        *list = None;
    }
}

/// Keep the entries matching `keep`, then collapse. A missing list stays missing.
fn retain<T>(list: &mut Option<Vec<T>>, keep: impl FnMut(&T) -> bool) {
    match list {
        Some(entries) => entries.retain(keep),
        None => trace!("Nothing to remove from an absent list"),
    }
    collapse(list);
}

/// Remove the `pos`-th entry (zero-indexed) among those matching `matches`
fn remove_nth<T>(list: &mut Option<Vec<T>>, pos: usize, mut matches: impl FnMut(&T) -> bool) {
    if let Some(entries) = list {
        if let Some(index) = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| matches(*e))
            .map(|(i, _)| i)
            .nth(pos)
        {
            entries.remove(index);
        }
    }
    collapse(list);
}

fn push<T>(list: &mut Option<Vec<T>>, value: T) {
    list.get_or_insert_with(Vec::new).push(value);
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: None,
            children: None,
        }
    }

    /// A tag holding a single text child
    ///
    /// Plain strings are HTML-encoded, pass a [`Text::raw`] to keep markup.
    pub fn with_text(name: impl Into<String>, content: impl Into<Text>) -> Self {
        let mut tag = Self::new(name);
        tag.add_text(content);
        tag
    }

    /// A tag whose first child is `content`, followed by `children`
    pub fn with_text_and_children<E: Into<Element>>(
        name: impl Into<String>,
        content: impl Into<Text>,
        children: impl IntoIterator<Item = E>,
    ) -> Self {
        let mut tag = Self::with_text(name, content);
        tag.add_children(children);
        tag
    }

    pub fn with_children<E: Into<Element>>(
        name: impl Into<String>,
        children: impl IntoIterator<Item = E>,
    ) -> Self {
        let mut tag = Self::new(name);
        tag.add_children(children);
        tag
    }

    /// The element name, e.g. `div`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> Option<&[Attribute]> {
        self.attributes.as_deref()
    }

    pub fn children(&self) -> Option<&[Element]> {
        self.children.as_deref()
    }

    // Attributes

    /// Append an attribute, even if an equal one is already present.
    /// Duplicates are merged when rendering.
    pub fn add_attribute(&mut self, attribute: impl Into<Attribute>) -> &mut Self {
        push(&mut self.attributes, attribute.into());
        self
    }

    pub fn add_attributes<A: Into<Attribute>>(
        &mut self,
        attributes: impl IntoIterator<Item = A>,
    ) -> &mut Self {
        for attribute in attributes {
            self.add_attribute(attribute);
        }
        self
    }

    /// Add attributes from an alternating `name, value, name, value` list.
    /// A trailing name without a value is ignored.
    pub fn add_flat_attributes<S: AsRef<str>>(&mut self, pairs: &[S]) -> &mut Self {
        for pair in pairs.chunks_exact(2) {
            self.add_attribute((pair[0].as_ref(), pair[1].as_ref()));
        }
        self
    }

    /// Append `attribute` unless one with the same name and value exists
    pub fn add_unique(&mut self, attribute: Attribute) -> &mut Self {
        let exists = self
            .attributes
            .iter()
            .flatten()
            .any(|a| a.same_pair(&attribute));
        if !exists {
            push(&mut self.attributes, attribute);
        }
        self
    }

    /// [`Tag::add_unique`] for each attribute in order, e.g. a list of
    /// [`Attribute::class`] or [`Attribute::id`] values
    pub fn add_unique_all(&mut self, attributes: impl IntoIterator<Item = Attribute>) -> &mut Self {
        for attribute in attributes {
            self.add_unique(attribute);
        }
        self
    }

    /// Remove the plain attributes; classes, ids and styles stay
    pub fn remove_all_attributes(&mut self) -> &mut Self {
        retain(&mut self.attributes, |a| a.kind() != AttributeKind::Plain);
        self
    }

    /// Remove every attribute called `name`, whatever its kind
    pub fn remove_attribute(&mut self, name: &str) -> &mut Self {
        retain(&mut self.attributes, |a| a.name() != name);
        self
    }

    fn remove_kind(&mut self, kind: AttributeKind, value: Option<&str>) -> &mut Self {
        retain(&mut self.attributes, |a| {
            a.kind() != kind || value.is_some_and(|v| a.value() != v)
        });
        self
    }

    // Classes

    pub fn add_class(&mut self, value: impl Into<String>) -> &mut Self {
        self.add_unique(Attribute::class(value))
    }

    pub fn add_classes<S: Into<String>>(&mut self, values: impl IntoIterator<Item = S>) -> &mut Self {
        for value in values {
            self.add_class(value);
        }
        self
    }

    pub fn remove_all_classes(&mut self) -> &mut Self {
        self.remove_kind(AttributeKind::Class, None)
    }

    pub fn remove_class(&mut self, value: &str) -> &mut Self {
        self.remove_kind(AttributeKind::Class, Some(value))
    }

    // Ids

    pub fn add_id(&mut self, value: impl Into<String>) -> &mut Self {
        self.add_unique(Attribute::id(value))
    }

    pub fn add_ids<S: Into<String>>(&mut self, values: impl IntoIterator<Item = S>) -> &mut Self {
        for value in values {
            self.add_id(value);
        }
        self
    }

    pub fn remove_all_ids(&mut self) -> &mut Self {
        self.remove_kind(AttributeKind::Id, None)
    }

    pub fn remove_id(&mut self, value: &str) -> &mut Self {
        self.remove_kind(AttributeKind::Id, Some(value))
    }

    // Styles

    pub fn add_style(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.add_unique(Attribute::style(property, value))
    }

    /// Add styles, skipping any already present. Takes [`Attribute::style`]
    /// values or `(property, value)` pairs as tuples or two-element arrays.
    pub fn add_styles<A: Into<Attribute>>(&mut self, styles: impl IntoIterator<Item = A>) -> &mut Self {
        self.add_unique_all(styles.into_iter().map(|s| match s.into() {
            Attribute::Plain { name, value } => Attribute::style(name, value),
            other => other,
        }))
    }

    /// Add styles from an alternating `property, value, ...` list.
    /// A trailing property without a value is ignored.
    pub fn add_flat_styles<S: AsRef<str>>(&mut self, pairs: &[S]) -> &mut Self {
        for pair in pairs.chunks_exact(2) {
            self.add_style(pair[0].as_ref(), pair[1].as_ref());
        }
        self
    }

    /// Add every declaration of an inline style such as
    /// `"color: red; display: table"`. Nothing is added if the string can't
    /// be read.
    pub fn add_style_declarations(&mut self, css: &str) -> Result<&mut Self, Error> {
        for style in parse_inline_style(css)? {
            self.add_unique(style);
        }
        Ok(self)
    }

    pub fn remove_all_styles(&mut self) -> &mut Self {
        self.remove_kind(AttributeKind::Style, None)
    }

    /// Remove a CSS property. This goes by name, so a plain attribute with
    /// the same name is removed as well.
    pub fn remove_style(&mut self, property: &str) -> &mut Self {
        self.remove_attribute(property)
    }

    // Children

    pub fn add_child(&mut self, child: impl Into<Element>) -> &mut Self {
        push(&mut self.children, child.into());
        self
    }

    pub fn add_children<E: Into<Element>>(&mut self, children: impl IntoIterator<Item = E>) -> &mut Self {
        for child in children {
            self.add_child(child);
        }
        self
    }

    pub fn remove_all_children(&mut self) -> &mut Self {
        self.children = None;
        self
    }

    /// Remove every child tag called `name`; text stays
    pub fn remove_children(&mut self, name: &str) -> &mut Self {
        retain(&mut self.children, |c| !c.is_tag_named(name));
        self
    }

    /// Remove the `pos`-th (zero-indexed) child tag called `name`
    ///
    /// ```
    /// use html_builder::Tag;
    ///
    /// let mut tr = Tag::with_children(
    ///     "tr",
    ///     [Tag::with_text("td", "1"), Tag::with_text("td", "2"), Tag::with_text("td", "3")],
    /// );
    /// tr.remove_child("td", 1);
    /// assert_eq!(
    ///     tr.to_string(),
    ///     "<tr>\n\t<td>\n\t\t1\n\t</td>\n\t<td>\n\t\t3\n\t</td>\n</tr>\n"
    /// );
    /// ```
    pub fn remove_child(&mut self, name: &str, pos: usize) -> &mut Self {
        remove_nth(&mut self.children, pos, |c| c.is_tag_named(name));
        self
    }

    pub fn add_text(&mut self, content: impl Into<Text>) -> &mut Self {
        self.add_child(content.into())
    }

    /// Remove the `pos`-th (zero-indexed) text child
    pub fn remove_text(&mut self, pos: usize) -> &mut Self {
        remove_nth(&mut self.children, pos, |c| matches!(c, Element::Text(_)));
        self
    }

    /// Render this tag and everything below it, starting `indent` tabs in
    pub fn render(&self, indent: usize) -> String {
        let span = span!(Level::TRACE, "Rendering tag", "{}", self.name);
        let _enter = span.enter();

        let tabs = "\t".repeat(indent);
        let mut html = format!("{tabs}<{}", self.name);
        html.push_str(&render_attributes(self.attributes().unwrap_or_default()));

        let content: String = self
            .children
            .iter()
            .flatten()
            .map(|c| c.render(indent + 1))
            .collect();

        if content.is_empty() {
            html.push_str(" />\n");
        } else {
            html.push_str(">\n");
            html.push_str(&content);
            html.push_str(&format!("{tabs}</{}>\n", self.name));
        }
        html
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(0))
    }
}
