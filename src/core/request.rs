pub const DEFAULT_FONT_SIZE: &str = "96px";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileType {
    #[default]
    Png,
    Jpeg,
}

impl FileType {
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => FileType::Jpeg,
            _ => FileType::Png,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            FileType::Png => "image/png",
            FileType::Jpeg => "image/jpeg",
        }
    }
}

/// Raw query parameters of a card request, before defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct CardQuery {
    pub theme: Option<String>,
    pub md: Option<String>,
    pub font_size: Option<String>,
    pub images: Vec<String>,
    pub widths: Vec<String>,
    pub heights: Vec<String>,
}

/// Everything needed to render one card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedRequest {
    pub file_type: FileType,
    pub text: String,
    pub theme: Option<String>,
    pub md: bool,
    pub font_size: String,
    pub images: Vec<String>,
    pub widths: Vec<String>,
    pub heights: Vec<String>,
}

impl ParsedRequest {
    /// Build a request from the decoded `<text>.<ext>` path segment and its
    /// query parameters.
    pub fn parse(path: &str, query: CardQuery) -> Self {
        let segment = path.trim_start_matches('/');
        let (text, file_type) = match segment.rsplit_once('.') {
            Some((text, extension)) => (text, FileType::from_extension(extension)),
            None => (segment, FileType::Png),
        };

        Self {
            file_type,
            text: text.to_string(),
            theme: query.theme,
            md: matches!(query.md.as_deref(), Some("1" | "true")),
            font_size: query
                .font_size
                .unwrap_or_else(|| DEFAULT_FONT_SIZE.to_string()),
            images: query.images,
            widths: query.widths,
            heights: query.heights,
        }
    }
}
