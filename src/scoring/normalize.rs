use super::classify::is_meaningful;

pub const DEFAULT_MARKER_WIDTH: usize = 5;

/// Removes the decoder's trailing artifact from a hypothesis before filtering.
pub trait MarkerStrip: Send + Sync {
    fn strip<'a>(&self, text: &'a str) -> &'a str;

    fn describe(&self) -> String;
}

/// Cuts a fixed number of trailing characters; text no longer than the width becomes empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingChars {
    pub width: usize,
}

impl Default for TrailingChars {
    fn default() -> Self {
        Self {
            width: DEFAULT_MARKER_WIDTH,
        }
    }
}

impl MarkerStrip for TrailingChars {
    fn strip<'a>(&self, text: &'a str) -> &'a str {
        if self.width == 0 {
            return text;
        }

        let char_count = text.chars().count();
        if char_count <= self.width {
            return "";
        }

        let cut = text
            .char_indices()
            .nth(char_count - self.width)
            .map(|(index, _)| index)
            .unwrap_or(text.len());
        &text[..cut]
    }

    fn describe(&self) -> String {
        format!("trailing-chars:{}", self.width)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoMarker;

impl MarkerStrip for NoMarker {
    fn strip<'a>(&self, text: &'a str) -> &'a str {
        text
    }

    fn describe(&self) -> String {
        "none".to_string()
    }
}

pub struct Normalizer {
    marker: Box<dyn MarkerStrip>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Box::new(TrailingChars::default()))
    }
}

impl Normalizer {
    pub fn new(marker: Box<dyn MarkerStrip>) -> Self {
        Self { marker }
    }

    pub fn with_marker_width(width: usize) -> Self {
        if width == 0 {
            Self::new(Box::new(NoMarker))
        } else {
            Self::new(Box::new(TrailingChars { width }))
        }
    }

    pub fn marker_description(&self) -> String {
        self.marker.describe()
    }

    pub fn normalize(&self, text: &str, is_hypothesis: bool) -> String {
        let source = if is_hypothesis {
            self.marker.strip(text)
        } else {
            text
        };

        source
            .chars()
            .filter(|character| is_meaningful(*character))
            .collect()
    }
}
