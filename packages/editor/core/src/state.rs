use crate::config::EditorConfig;
use crate::counter::CharCount;
use crate::grapheme::grapheme_count;
use crate::metrics::{self, LineMetrics};

/// State of one mounted editor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// Committed value, always within the character limit
    pub text: String,

    pub focused: bool,

    /// Transient measurements, refreshed on every layout pass
    pub metrics: LineMetrics,

    /// Last value written to the caller's line-count output
    pub line_count: Option<usize>,

    /// The most recent candidate was longer than the limit
    pub limit_hit: bool,
}

impl EditorState {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn placeholder_visible(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_count(&self, config: &EditorConfig) -> CharCount {
        CharCount {
            count: grapheme_count(&self.text),
            limit: config.char_limit,
            exceeded: config.char_limit.is_some() && self.limit_hit,
        }
    }

    /// Height the editor occupies, once the content has been measured.
    pub fn visible_height(&self, config: &EditorConfig) -> Option<f32> {
        self.metrics
            .content_height
            .map(|height| metrics::visible_height(height, config.max_height))
    }

    pub fn is_scrolling(&self, config: &EditorConfig) -> bool {
        self.metrics
            .content_height
            .is_some_and(|height| metrics::overflows(height, config.max_height))
    }
}
