use std::fmt::Display;

/// The variant of an [`Attribute`], used wherever a removal or the renderer
/// needs to treat one kind differently from the others
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum AttributeKind {
    Plain,
    Class,
    Id,
    Style,
}

/// A name/value pair attached to a [`Tag`](super::Tag)
///
/// Two attributes are equal only when they are the same variant with the same
/// name and value, so `Attribute::class("a")` and `Attribute::new("class", "a")`
/// differ.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Attribute {
    /// Any attribute, grouped by name when rendered
    Plain { name: String, value: String },
    /// One token of the `class` attribute
    Class(String),
    /// One token of the `id` attribute
    Id(String),
    /// One CSS declaration, merged into the `style` attribute when rendered
    Style { property: String, value: String },
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute::Plain {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn class(value: impl Into<String>) -> Self {
        Attribute::Class(value.into())
    }

    pub fn id(value: impl Into<String>) -> Self {
        Attribute::Id(value.into())
    }

    pub fn style(property: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute::Style {
            property: property.into(),
            value: value.into(),
        }
    }

    /// The attribute name; for a [`Attribute::Style`] this is the CSS property
    pub fn name(&self) -> &str {
        match self {
            Attribute::Plain { name, .. } => name,
            Attribute::Class(_) => "class",
            Attribute::Id(_) => "id",
            Attribute::Style { property, .. } => property,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Attribute::Plain { value, .. } | Attribute::Style { value, .. } => value,
            Attribute::Class(value) | Attribute::Id(value) => value,
        }
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Plain { .. } => AttributeKind::Plain,
            Attribute::Class(_) => AttributeKind::Class,
            Attribute::Id(_) => AttributeKind::Id,
            Attribute::Style { .. } => AttributeKind::Style,
        }
    }

    /// Same name and value, regardless of the variant
    pub(crate) fn same_pair(&self, other: &Attribute) -> bool {
        self.name() == other.name() && self.value() == other.value()
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribute::Style { property, value } => write!(f, "style=\"{property}: {value}\""),
            _ => write!(f, "{}=\"{}\"", self.name(), self.value()),
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Attribute {
    fn from((name, value): (N, V)) -> Self {
        Attribute::new(name, value)
    }
}

impl<S: Into<String>> From<[S; 2]> for Attribute {
    fn from([name, value]: [S; 2]) -> Self {
        Attribute::new(name, value)
    }
}

#[cfg(test)]
#[test]
fn test_names() {
    assert_eq!(Attribute::new("src", "a.png").name(), "src");
    assert_eq!(Attribute::class("bold").name(), "class");
    assert_eq!(Attribute::id("main").name(), "id");
    assert_eq!(Attribute::style("color", "red").name(), "color");
    assert_eq!(Attribute::style("color", "red").value(), "red");
    assert_eq!(Attribute::style("color", "red").kind(), AttributeKind::Style);
}

#[cfg(test)]
#[test]
fn test_variant_equality() {
    assert_eq!(Attribute::class("a"), Attribute::class("a"));
    assert_ne!(Attribute::class("a"), Attribute::class("b"));
    assert_ne!(Attribute::class("a"), Attribute::new("class", "a"));
    assert_ne!(Attribute::id("a"), Attribute::new("id", "a"));
    assert_ne!(Attribute::style("a", "b"), Attribute::new("a", "b"));
    assert_ne!(Attribute::new("Name", "v"), Attribute::new("name", "v"));
    assert!(Attribute::style("a", "b").same_pair(&Attribute::new("a", "b")));
}

#[cfg(test)]
#[test]
fn test_display() {
    assert_eq!(Attribute::new("src", "a.png").to_string(), r#"src="a.png""#);
    assert_eq!(Attribute::class("bold").to_string(), r#"class="bold""#);
    assert_eq!(Attribute::id("main").to_string(), r#"id="main""#);
    assert_eq!(
        Attribute::style("color", "#999").to_string(),
        r#"style="color: #999""#
    );
}

#[cfg(test)]
#[test]
fn test_from_pairs() {
    assert_eq!(Attribute::from(("a", "1")), Attribute::new("a", "1"));
    assert_eq!(Attribute::from(["a", "1"]), Attribute::new("a", "1"));
}
