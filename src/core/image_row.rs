use crate::core::sanitizer::sanitize;

pub const DEFAULT_WIDTH: &str = "auto";
pub const DEFAULT_HEIGHT: &str = "225";

const PLUS_SIGN: &str = r#"<div class="plus">+</div>"#;

/// Render the logo row: one `<img>` per entry in `images`, separated by
/// plus signs. Sizes are looked up by index and default when missing.
pub fn build_image_row(images: &[String], widths: &[String], heights: &[String]) -> String {
    let mut row = String::new();
    for (i, src) in images.iter().enumerate() {
        if i > 0 {
            row.push_str(PLUS_SIGN);
        }
        let width = widths.get(i).map_or(DEFAULT_WIDTH, String::as_str);
        let height = heights.get(i).map_or(DEFAULT_HEIGHT, String::as_str);
        row.push_str(&image(src, width, height));
    }
    row
}

fn image(src: &str, width: &str, height: &str) -> String {
    format!(
        r#"<img
        class="logo"
        alt="Generated Image"
        src="{}"
        width="{}"
        height="{}"
    />"#,
        sanitize(src),
        sanitize(width),
        sanitize(height)
    )
}
