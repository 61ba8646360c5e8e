use crate::{Element, Error, Tag, Text};
use std::str::FromStr;

const LOREM: &str = "Lorem ipsum dolor sit amet, consetetur sadipscing elitr.";
const LOREM_MARKUP: &str = "Lorem ipsum dolor sit amet, <b>consetetur sadipscing elitr</b>, sed diam \
    nonumy eirmod tempor invidunt ut labore et dolore magna aliquyam erat. At vero eos et accusam \
    et justo duo dolores et ea rebum, <i>stet clita kasd gubergren</i>.";
const LOGO: &str = "https://upload.wikimedia.org/wikipedia/fr/c/c8/Assystem_Logo.jpg";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Demo {
    Table,
    Image,
    Text,
    Mixed,
    Page,
}

impl Demo {
    pub const ALL: [Demo; 5] = [Demo::Table, Demo::Image, Demo::Text, Demo::Mixed, Demo::Page];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Table => "table",
            Demo::Image => "image",
            Demo::Text => "text",
            Demo::Mixed => "mixed",
            Demo::Page => "page",
        }
    }

    pub fn build(self) -> Tag {
        match self {
            Demo::Table => fruit_table(),
            Demo::Image => figure_paragraph(),
            Demo::Text => chapters(),
            Demo::Mixed => headlines_and_text(),
            Demo::Page => page(),
        }
    }
}

impl FromStr for Demo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Demo::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| Error::UnknownDemo(s.to_string()))
    }
}

/// `<tr>` of header cells
fn header_row(names: &[&str]) -> Tag {
    Tag::with_children("tr", names.iter().map(|n| Tag::with_text("th", *n)))
}

fn fruit_row(fruit: &str, color: &str, size: &str) -> Tag {
    let mut colored = Tag::with_text("span", color);
    colored.add_style("color", color.to_lowercase());
    Tag::with_children(
        "tr",
        [
            Tag::with_children("td", [Tag::with_text("span", fruit)]),
            Tag::with_children("td", [colored]),
            Tag::with_children("td", [Tag::with_text("span", size)]),
        ],
    )
}

fn fruit_table() -> Tag {
    let mut table = Tag::with_children(
        "table",
        [
            header_row(&["Name", "Color", "Size"]),
            fruit_row("Apple", "Green", "Big"),
            fruit_row("Pear", "Yellow", "Big"),
            fruit_row("Strawberry", "Red", "Small"),
        ],
    );
    table.add_id("fruit-table");
    table
}

fn logo_figure() -> Tag {
    let mut img = Tag::new("img");
    img.add_attribute(("src", LOGO))
        .add_styles([("width", "8cm"), ("height", "auto")]);
    Tag::with_children("figure", [img, Tag::with_text("figcaption", "Assystem Logo")])
}

fn figure_paragraph() -> Tag {
    Tag::with_children(
        "p",
        [
            Element::from(Text::new(LOREM)),
            logo_figure().into(),
            Text::new(LOREM).into(),
        ],
    )
}

fn chapters() -> Tag {
    Tag::with_children(
        "body",
        [
            Tag::with_text("h1", "Chapter 1"),
            Tag::with_text("p", Text::raw(LOREM_MARKUP)),
            Tag::with_text("h2", "Chapter 1.1."),
            Tag::with_text("p", LOREM),
            Tag::with_text("h2", "Chapter 1.2."),
            Tag::with_text("p", LOREM),
        ],
    )
}

fn headlines_and_text() -> Tag {
    let mut div = Tag::new("div");
    for headline in ["First headline", "Second headline", "Third headline"] {
        div.add_child(Tag::with_text("h1", headline)).add_text(LOREM);
    }
    div
}

fn list_item(content: &str, property: &str, value: &str) -> Tag {
    let mut li = Tag::with_text("li", Text::raw(content));
    li.add_style(property, value);
    li
}

fn page() -> Tag {
    let mut intro = Tag::with_text("p", Text::raw(LOREM_MARKUP));
    intro.add_style("font-family", "Courier New");

    let mut table = Tag::with_children("table", [header_row(&["Name", "Color", "Price"])]);
    for (fruit, color, price) in [
        ("Apple", "Green", "0.69€"),
        ("Pear", "Yellow", "0.59€"),
        ("Strawberry", "Red", "0.09€"),
    ] {
        let cells = [fruit, color, price].map(|value| {
            let mut span = Tag::with_text("span", value);
            span.add_class("margin-rl");
            Tag::with_children("td", [span])
        });
        table.add_child(Tag::with_children("tr", cells));
    }

    Tag::with_children(
        "body",
        [
            Tag::with_text("h1", "Example"),
            intro,
            Tag::with_text("h2", "Example for tables"),
            table,
            Tag::with_text("h2", "Example for lists"),
            Tag::with_children(
                "ul",
                [
                    list_item("Option 1", "font-weight", "bold"),
                    list_item("Option 2", "font-style", "italic"),
                    Tag::with_text("li", Text::raw("Option 3")),
                ],
            ),
            Tag::with_text("h2", "Example for images"),
            Tag::with_children("p", [logo_figure()]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for demo in Demo::ALL {
            assert_eq!(demo.name().parse::<Demo>().unwrap(), demo);
        }
        assert!(matches!(
            "nope".parse::<Demo>(),
            Err(Error::UnknownDemo(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_table() {
        let html = Demo::Table.build().to_string();
        assert!(html.starts_with("<table id=\"fruit-table\">\n\t<tr>\n\t\t<th>\n\t\t\tName\n\t\t</th>\n"));
        assert!(html.contains("\t\t\t<span style=\"color: green;\">\n\t\t\t\tGreen\n\t\t\t</span>\n"));
        assert!(html.ends_with("</table>\n"));
    }

    #[test]
    fn test_image() {
        let html = Demo::Image.build().to_string();
        let expected = format!(
            "<p>\n\t{LOREM}\n\t<figure>\n\t\t<img src=\"{LOGO}\" style=\"height: auto; width: 8cm;\" />\n\
             \t\t<figcaption>\n\t\t\tAssystem Logo\n\t\t</figcaption>\n\t</figure>\n\t{LOREM}\n</p>\n"
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_mixed() {
        let div = Demo::Mixed.build();
        let children = div.children().unwrap();
        assert_eq!(children.len(), 6);
        assert!(children.iter().step_by(2).all(|c| c.is_tag_named("h1")));
        assert!(children.iter().skip(1).step_by(2).all(|c| c.as_text().is_some()));
    }

    #[test]
    fn test_raw_markup_kept() {
        let html = Demo::Text.build().to_string();
        assert!(html.contains("<b>consetetur sadipscing elitr</b>"));
        let html = Demo::Page.build().to_string();
        assert!(html.contains("<p style=\"font-family: Courier New;\">"));
        assert!(html.contains("<li style=\"font-weight: bold;\">"));
        assert!(html.contains("\t\t\t\t<span class=\"margin-rl\">\n\t\t\t\t\t0.69€\n"));
    }
}
