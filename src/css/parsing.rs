use super::Declaration;
use nom::{
    bytes::complete::{is_not, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt, verify},
    multi::separated_list0,
    sequence::{pair, preceded, separated_pair, terminated, tuple},
    IResult,
};

/// A list of declarations separated by `;`, with an optional trailing `;`
pub fn declarations(input: &str) -> IResult<&str, Vec<Declaration<'_>>> {
    terminated(
        separated_list0(char(';'), parse_declaration),
        pair(opt(char(';')), multispace0),
    )(input)
}

#[cfg(test)]
#[test]
fn test_declarations() {
    let i = "width: 8cm; height: auto;";
    assert_eq!(
        declarations(i).unwrap(),
        (
            "",
            vec![
                Declaration {
                    property: "width",
                    value: "8cm"
                },
                Declaration {
                    property: "height",
                    value: "auto"
                },
            ]
        )
    );
    assert_eq!(declarations("").unwrap(), ("", Vec::new()));
    // Stops in front of anything it can't read
    assert_eq!(declarations("width: 8cm;; x").unwrap().0, "; x");
}

/// `property: value`
fn parse_declaration(input: &str) -> IResult<&str, Declaration<'_>> {
    let (res, (property, value)) = separated_pair(
        preceded(multispace0, parse_property),
        tuple((multispace0, char(':'), multispace0)),
        parse_value,
    )(input)?;
    Ok((res, Declaration { property, value }))
}

#[cfg(test)]
#[test]
fn test_parse_declaration() {
    let i = "  border : 1px solid #999 ";
    assert_eq!(
        parse_declaration(i).unwrap(),
        (
            "",
            Declaration {
                property: "border",
                value: "1px solid #999"
            }
        )
    );
    assert!(parse_declaration("border:").is_err());
    assert!(parse_declaration("border: ;").is_err());
}

fn parse_property(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')(input)
}

/// Everything up to the next `;`, trimmed; never empty
fn parse_value(input: &str) -> IResult<&str, &str> {
    verify(map(is_not(";"), str::trim), |v: &str| !v.is_empty())(input)
}

#[cfg(test)]
#[test]
fn test_parse_property() {
    assert_eq!(parse_property("-webkit-text-size-adjust: 100%"), Ok((": 100%", "-webkit-text-size-adjust")));
    assert!(parse_property(": red").is_err());
}
