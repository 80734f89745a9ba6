use std::fmt::Write as _;
use std::sync::Arc;

use crate::core::fonts::{FontAssets, HEADING_FAMILY};
use crate::core::sanitizer::sanitize;

pub const DEFAULT_BACKGROUND: &str = "black";
const FOREGROUND: &str = "white";
const RADIAL: &str = "lightgray";

const FONT_LICENSE: &str = r#"
        /*
        Copyright (c) 2021 Kil Hyung-jin, with Reserved Font Name Pretendard.
        https://github.com/orioncactus/pretendard

        This Font Software is licensed under the SIL Open Font License, Version 1.1.
        This license is copied below, and is also available with a FAQ at:
        http://scripts.sil.org/OFL
        */
"#;

/// Builds the card stylesheet around the embedded font faces.
#[derive(Debug, Clone)]
pub struct StyleBuilder {
    fonts: Arc<FontAssets>,
}

impl StyleBuilder {
    pub fn new(fonts: Arc<FontAssets>) -> Self {
        Self { fonts }
    }

    /// `theme` is used as the CSS background; `None` falls back to black.
    /// Both `theme` and `font_size` are sanitized before interpolation.
    pub fn build(&self, theme: Option<&str>, font_size: &str) -> String {
        let background = sanitize(theme.unwrap_or(DEFAULT_BACKGROUND));

        let mut font_faces = String::from(FONT_LICENSE);
        for face in self.fonts.faces() {
            let _ = write!(
                font_faces,
                r#"
        @font-face {{
            font-family: '{}';
            font-weight: {};
            font-display: swap;
            src: url(data:font/woff2;charset=utf-8;base64,{});
        }}
"#,
                face.family, face.weight, face.base64
            );
        }

        format!(
            r#"{font_faces}
        body {{
            background: {background};
            background-image: radial-gradient(circle at 25px 25px, {RADIAL} 2%, transparent 0%), radial-gradient(circle at 75px 75px, {RADIAL} 2%, transparent 0%);
            background-size: 100px 100px;
            height: 100vh;
            display: flex;
            text-align: center;
            align-items: center;
            justify-content: center;
        }}

        code {{
            color: #D400FF;
            font-family: 'Vera';
            white-space: pre-wrap;
            letter-spacing: -5px;
        }}

        code:before, code:after {{
            content: '`';
        }}

        .logo-wrapper {{
            display: flex;
            align-items: center;
            align-content: center;
            justify-content: center;
            justify-items: center;
        }}

        .logo {{
            margin: 0 75px;
        }}

        .plus {{
            color: #BBB;
            font-family: Times New Roman, Verdana;
            font-size: 100px;
        }}

        .spacer {{
            margin: 150px;
        }}

        .emoji {{
            height: 1em;
            width: 1em;
            margin: 0 .05em 0 .1em;
            vertical-align: -0.1em;
        }}

        .heading {{
            font-family: '{HEADING_FAMILY}', sans-serif;
            font-size: {font_size};
            font-style: normal;
            color: {FOREGROUND};
            line-height: 1.8;
            word-wrap: break-word;
            word-break: keep-all;
        }}"#,
            font_size = sanitize(font_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fonts::FontFace;

    fn builder() -> StyleBuilder {
        StyleBuilder::new(Arc::new(FontAssets::new(vec![
            FontFace::from_bytes(HEADING_FAMILY, 700, b"bold"),
            FontFace::from_bytes(HEADING_FAMILY, 400, b"regular"),
        ])))
    }

    #[test]
    fn missing_theme_uses_black_background() {
        let css = builder().build(None, "96px");
        assert!(css.contains("background: black;"));
    }

    #[test]
    fn theme_is_used_verbatim() {
        let css = builder().build(Some("red"), "96px");
        assert!(css.contains("background: red;"));

        let css = builder().build(Some("not-a-color"), "96px");
        assert!(css.contains("background: not-a-color;"));
    }

    #[test]
    fn theme_cannot_close_the_stylesheet() {
        let css = builder().build(Some("red}</style><script>alert(1)</script><style>"), "96px");
        assert!(!css.contains("</style>"));
        assert!(!css.contains("<script>"));
        assert!(css.contains("background: red}&lt;&#x2F;style&gt;&lt;script&gt;"));

        let css = builder().build(Some("rgb(0, 128, 255)"), "96px");
        assert!(css.contains("background: rgb(0, 128, 255);"));
    }

    #[test]
    fn font_size_is_sanitized() {
        let css = builder().build(None, "10px;}</style><script>");
        assert!(!css.contains("</style>"));
        assert!(!css.contains("<script>"));
        assert!(css.contains("font-size: 10px;}&lt;&#x2F;style&gt;&lt;script&gt;;"));
    }

    #[test]
    fn embeds_every_font_face() {
        let css = builder().build(None, "96px");
        assert_eq!(css.matches("@font-face").count(), 2);
        assert!(css.contains("font-weight: 700;"));
        assert!(css.contains("font-weight: 400;"));
        assert!(css.contains("base64,Ym9sZA=="));
        assert!(css.contains("font-family: 'Pretendard', sans-serif;"));
    }

    #[test]
    fn fixed_layout_rules_are_present() {
        let css = StyleBuilder::new(Arc::new(FontAssets::default())).build(None, "96px");
        assert!(!css.contains("@font-face"));
        assert!(css.contains("background-size: 100px 100px;"));
        assert!(css.contains("radial-gradient(circle at 25px 25px, lightgray 2%"));
        assert!(css.contains("color: white;"));
        assert!(css.contains(".emoji {"));
    }
}
