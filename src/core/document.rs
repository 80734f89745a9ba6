//! Card document assembly.
//!
//! Pure and deterministic: the same request and fonts always produce the
//! same bytes. Every untrusted field is escaped at the point where it is
//! interpolated.

use std::panic;
use std::sync::Arc;

use crate::core::emoji::EmojiRenderer;
use crate::core::fonts::FontAssets;
use crate::core::image_row::build_image_row;
use crate::core::markdown::markdown_to_html;
use crate::core::request::ParsedRequest;
use crate::core::sanitizer::sanitize;
use crate::core::style::StyleBuilder;

#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    style: StyleBuilder,
    emoji: EmojiRenderer,
}

impl DocumentRenderer {
    pub fn new(fonts: Arc<FontAssets>, emoji: EmojiRenderer) -> Self {
        Self {
            style: StyleBuilder::new(fonts),
            emoji,
        }
    }

    pub fn render(&self, req: &ParsedRequest) -> String {
        let css = self.style.build(req.theme.as_deref(), &req.font_size);
        let images = build_image_row(&req.images, &req.widths, &req.heights);
        let heading = self.emoji.emojify(&heading_html(&req.text, req.md, markdown_to_html));

        format!(
            r#"<!DOCTYPE html>
<html>
    <meta charset="utf-8">
    <title>Generated Image</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        {css}
    </style>
    <body>
        <div>
            <div class="spacer">
                <div class="logo-wrapper">
                    {images}
                </div>
                <div class="spacer">
                    <div class="heading">{heading}
                    </div>
                </div>
            </div>
        </div>
    </body>
</html>"#
        )
    }
}

/// Markdown when `md` is set, escaped plain text otherwise. A panicking
/// Markdown pass degrades to the plain-text rendering.
fn heading_html(text: &str, md: bool, markdown: fn(&str) -> String) -> String {
    if !md {
        return sanitize(text);
    }
    panic::catch_unwind(|| markdown(text)).unwrap_or_else(|_| sanitize(text))
}
