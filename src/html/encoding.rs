/// Escape `&`, `<`, `>`, `"` and `'` so the string can be embedded in HTML
pub fn html_encode(value: &str) -> String {
    html_escape::encode_quoted_attribute(value).into_owned()
}

/// Replace HTML entities with the characters they stand for
pub fn html_decode(value: &str) -> String {
    html_escape::decode_html_entities(value).into_owned()
}

#[cfg(test)]
#[test]
fn test_encode() {
    assert_eq!(
        html_encode("This <b>is</b> a test & nothing more ..."),
        "This &lt;b&gt;is&lt;/b&gt; a test &amp; nothing more ..."
    );
    assert!(!html_encode(r#"say "hi" 'there'"#).contains(&['"', '\''][..]));
}

#[cfg(test)]
#[test]
fn test_decode() {
    assert_eq!(
        html_decode("This &lt;b&gt;is&lt;/b&gt; a test &amp; nothing more ..."),
        "This <b>is</b> a test & nothing more ..."
    );
    assert_eq!(html_decode("&quot;&#39;"), "\"'");
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decode_reverses_encode(s in r#"[a-z <>&"' ]*"#) {
            prop_assert_eq!(html_decode(&html_encode(&s)), s);
        }
    }
}
