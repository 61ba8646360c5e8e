use super::encoding::html_encode;
use std::fmt::Display;

/// Literal text inside a tag
///
/// The content is encoded once when the value is built and never again, so
/// [`Text::raw`] can carry markup through untouched.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Text {
    content: String,
}

impl Text {
    /// HTML-encode `content` and wrap it
    pub fn new(content: impl AsRef<str>) -> Self {
        Self {
            content: html_encode(content.as_ref()),
        }
    }

    /// Wrap `content` as it is
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn render(&self, indent: usize) -> String {
        format!("{}{}\n", "\t".repeat(indent), self.content)
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(0))
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Text::new(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Text::new(content)
    }
}

#[cfg(test)]
#[test]
fn test_encoding() {
    let content = "Lorem ipsum <b>dolor</b> sit amet";
    assert_eq!(
        Text::new(content).content(),
        "Lorem ipsum &lt;b&gt;dolor&lt;/b&gt; sit amet"
    );
    assert_eq!(Text::raw(content).content(), content);
    assert_eq!(Text::from(content), Text::new(content));
}

#[cfg(test)]
#[test]
fn test_render() {
    let text = Text::raw("some text");
    assert_eq!(text.to_string(), "some text\n");
    assert_eq!(text.render(2), "\t\tsome text\n");
}
