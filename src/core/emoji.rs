//! Emoji substitution in the Twemoji image style.
//!
//! Every emoji sequence in text content is replaced by an `<img>` pointing at
//! the matching Twemoji SVG. Tags are copied untouched so attribute values
//! are never rewritten.

use std::fmt::Write as _;

use emojis::UnicodeVersion;

pub const DEFAULT_EMOJI_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg/";

/// Longest sequence tried when matching (family ZWJ sequences with skin
/// tones and subdivision flags fit).
const MAX_SEQUENCE_CHARS: usize = 12;

const ZWJ: char = '\u{200D}';
const VS16: char = '\u{FE0F}';

#[derive(Debug, Clone)]
pub struct EmojiRenderer {
    base_url: String,
}

impl Default for EmojiRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_EMOJI_BASE_URL)
    }
}

impl EmojiRenderer {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn emojify(&self, html: &str) -> String {
        let chars: Vec<char> = html.chars().collect();
        let mut out = String::with_capacity(html.len());
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            if ch == '<' {
                let end = chars[i..]
                    .iter()
                    .position(|&c| c == '>')
                    .map_or(chars.len(), |p| i + p + 1);
                out.extend(&chars[i..end]);
                i = end;
                continue;
            }

            match longest_match(&chars[i..]) {
                Some(len) => {
                    self.push_image(&mut out, &chars[i..i + len]);
                    i += len;
                }
                None => {
                    out.push(ch);
                    i += 1;
                }
            }
        }
        out
    }

    fn push_image(&self, out: &mut String, sequence: &[char]) {
        let alt: String = sequence.iter().collect();
        let _ = write!(
            out,
            r#"<img class="emoji" draggable="false" alt="{}" src="{}{}.svg"/>"#,
            alt,
            self.base_url,
            icon_name(sequence)
        );
    }
}

/// Length in chars of the longest fully-qualified emoji with a Twemoji
/// asset starting at `chars[0]`.
fn longest_match(chars: &[char]) -> Option<usize> {
    let first = *chars.first()?;
    if first.is_ascii() && !matches!(first, '0'..='9' | '#' | '*') {
        return None;
    }

    // newest emoji release covered by the Twemoji 14 asset set
    let newest = UnicodeVersion::new(14, 0);
    let max = chars.len().min(MAX_SEQUENCE_CHARS);
    let mut candidate: String = chars[..max].iter().collect();
    for len in (1..=max).rev() {
        if let Some(emoji) = emojis::get(&candidate) {
            if emoji.as_str() == candidate && emoji.unicode_version() <= newest {
                return Some(len);
            }
        }
        candidate.pop();
    }
    None
}

/// Twemoji file name: lower-case hex code points joined by `-`. U+FE0F is
/// dropped unless the sequence is joined with ZWJ.
fn icon_name(sequence: &[char]) -> String {
    let keep_vs16 = sequence.contains(&ZWJ);
    sequence
        .iter()
        .filter(|&&c| keep_vs16 || c != VS16)
        .map(|&c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}
