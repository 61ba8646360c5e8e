use crate::{Attribute, Error};
use nom::combinator::all_consuming;
use tracing::debug;

mod parsing;

/// A single `property: value` pair of an inline style
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Declaration<'a> {
    pub property: &'a str,
    pub value: &'a str,
}

impl<'a> From<Declaration<'a>> for Attribute {
    fn from(decl: Declaration<'a>) -> Self {
        Attribute::style(decl.property, decl.value)
    }
}

/// Split an inline style such as `"color: #555; font-family: Arial"` into
/// [`Attribute::Style`] entries, in the order they appear
///
/// Values are taken as they are written; nothing checks that they are valid
/// CSS.
pub fn parse_inline_style(input: &str) -> Result<Vec<Attribute>, Error> {
    let (_, declarations) = all_consuming(parsing::declarations)(input).map_err(|e| {
        let rest = match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => e.input,
            nom::Err::Incomplete(_) => input,
        };
        Error::InvalidStyle {
            rest: rest.to_string(),
        }
    })?;
    debug!("Read {} style declarations", declarations.len());
    Ok(declarations.into_iter().map(Attribute::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_inline_style() {
        assert_eq!(
            parse_inline_style("font-family: Arial Tahoma; color:#555;").unwrap(),
            vec![
                Attribute::style("font-family", "Arial Tahoma"),
                Attribute::style("color", "#555"),
            ]
        );
        assert!(parse_inline_style("").unwrap().is_empty());
        assert!(parse_inline_style("  ").unwrap().is_empty());
    }

    #[rstest]
    #[case("color")]
    #[case("color:")]
    #[case(": red")]
    #[case("color: red;; display: none")]
    #[case("a b: c")]
    fn test_invalid_inline_style(#[case] input: &str) {
        assert!(matches!(
            parse_inline_style(input),
            Err(Error::InvalidStyle { .. })
        ));
    }
}
