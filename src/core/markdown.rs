//! Markdown rendering for card headings.
//!
//! Raw HTML in the source is never passed through: HTML blocks and inline
//! HTML are re-emitted as text events, which the HTML writer escapes.

use pulldown_cmark::{Event, Options, Parser, html};

pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings() {
        assert_eq!(markdown_to_html("# Hi"), "<h1>Hi</h1>\n");
    }

    #[test]
    fn renders_inline_emphasis_and_code() {
        let html = markdown_to_html("**Hello** `world`");
        assert!(html.contains("<strong>Hello</strong>"));
        assert!(html.contains("<code>world</code>"));
    }

    #[test]
    fn renders_strikethrough() {
        assert!(markdown_to_html("~~old~~").contains("<del>old</del>"));
    }

    #[test]
    fn escapes_inline_html() {
        let html = markdown_to_html("hi <img src=x onerror=alert(1)> there");
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn escapes_html_blocks() {
        let html = markdown_to_html("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
