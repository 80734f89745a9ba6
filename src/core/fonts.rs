use std::path::Path;

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose};

pub const HEADING_FAMILY: &str = "Pretendard";

/// Files read from the font directory at start-up, with their CSS weight.
const PRETENDARD_FILES: [(&str, u16); 2] = [
    ("Pretendard-Bold.woff2", 700),
    ("Pretendard-Regular.woff2", 400),
];

/// A single `@font-face` payload, already base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    pub family: String,
    pub weight: u16,
    pub base64: String,
}

impl FontFace {
    pub fn from_bytes(family: &str, weight: u16, bytes: &[u8]) -> Self {
        Self {
            family: family.to_string(),
            weight,
            base64: general_purpose::STANDARD.encode(bytes),
        }
    }
}

/// Font payloads embedded into every card stylesheet.
///
/// Loaded once when the service starts and shared read-only between
/// requests.
#[derive(Debug, Clone, Default)]
pub struct FontAssets {
    faces: Vec<FontFace>,
}

impl FontAssets {
    pub fn new(faces: Vec<FontFace>) -> Self {
        Self { faces }
    }

    pub fn load(dir: &Path) -> Result<Self> {
        let mut faces = Vec::with_capacity(PRETENDARD_FILES.len());
        for (file, weight) in PRETENDARD_FILES {
            let path = dir.join(file);
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read font file {}", path.display()))?;
            tracing::debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
            faces.push(FontFace::from_bytes(HEADING_FAMILY, weight, &bytes));
        }
        Ok(Self { faces })
    }

    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }
}
