pub mod document;
pub mod emoji;
pub mod fonts;
pub mod image_row;
pub mod markdown;
pub mod renderer;
pub mod request;
pub mod sanitizer;
pub mod style;
