use super::attribute::{Attribute, AttributeKind};
use std::collections::BTreeMap;
use tracing::trace;

/// Attribute name -> distinct values, iterated in name order
type Groups<'a> = BTreeMap<&'a str, Vec<String>>;

/// Add `value` under `key` unless that exact value is already there
fn add_value<'a>(groups: &mut Groups<'a>, key: &'a str, value: &str) {
    let values = groups.entry(key).or_default();
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Merge the style declarations into one `property: v1 v2;` string per CSS
/// property, sorted by property
fn style_declarations<'a>(styles: impl Iterator<Item = &'a Attribute>) -> Vec<String> {
    let mut grouped = Groups::new();
    for style in styles {
        if !style.name().is_empty() && !style.value().is_empty() {
            add_value(&mut grouped, style.name(), style.value());
        }
    }
    grouped
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(property, mut values)| {
            values.sort();
            format!("{property}: {};", values.join(" "))
        })
        .collect()
}

/// Build the fragment that follows the tag name in an opening tag
///
/// Attributes sharing a name are grouped into one, duplicate values dropped
/// and all [`Attribute::Style`] entries folded into a single `style`
/// attribute. Names and the values within a name are both sorted, so the
/// result does not depend on the order the attributes were added in:
///
/// ```
/// use html_builder::html::render_attributes;
/// use html_builder::Attribute;
///
/// let attributes = [
///     Attribute::style("font-family", "Tahoma"),
///     Attribute::new("att-1", "2"),
///     Attribute::style("color", "#555"),
///     Attribute::new("att-1", "1"),
///     Attribute::style("font-family", "Arial"),
/// ];
/// assert_eq!(
///     render_attributes(&attributes),
///     r#" att-1="1 2" style="color: #555; font-family: Arial Tahoma;""#
/// );
/// ```
pub fn render_attributes(attributes: &[Attribute]) -> String {
    let (styles, others): (Vec<_>, Vec<_>) = attributes
        .iter()
        .partition(|a| a.kind() == AttributeKind::Style);

    let mut grouped = Groups::new();
    for attribute in others {
        if !attribute.name().is_empty() && !attribute.value().is_empty() {
            add_value(&mut grouped, attribute.name(), attribute.value());
        }
    }
    for declaration in style_declarations(styles.into_iter()) {
        add_value(&mut grouped, "style", &declaration);
    }
    trace!("Grouped {} attributes under {} names", attributes.len(), grouped.len());

    grouped
        .into_iter()
        .map(|(name, mut values)| {
            values.sort();
            format!(" {name}=\"{}\"", values.join(" "))
        })
        .collect()
}
