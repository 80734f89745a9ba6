/// Escape a value for interpolation into an HTML text node, an attribute
/// value or a CSS declaration inside a `<style>` block.
///
/// Only markup is neutralized. `;`, `{` and `}` pass through, so a value
/// placed in a stylesheet can still add declarations or rules, but it can
/// never close the `<style>` element.
pub fn sanitize(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            sanitize(r#"<img src="x" onerror='y'>&"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;y&#39;&gt;&amp;"
        );
    }

    #[test]
    fn closing_tags_lose_their_slash() {
        assert_eq!(sanitize("</style>"), "&lt;&#x2F;style&gt;");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(sanitize("Hello, world 96px 한글"), "Hello, world 96px 한글");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn css_punctuation_passes_through() {
        assert_eq!(sanitize("96px;} body{color:red"), "96px;} body{color:red");
    }

    #[test]
    fn passes_control_characters_through() {
        assert_eq!(sanitize("a\u{0}\t\nb"), "a\u{0}\t\nb");
    }

    #[test]
    fn escapes_already_escaped_input_again() {
        assert_eq!(sanitize("&lt;"), "&amp;lt;");
    }
}
