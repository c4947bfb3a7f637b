//! Character counting on user-perceived characters.
//!
//! Counts and cuts work on extended grapheme clusters, so an emoji with
//! modifiers or a letter with combining marks is one character and is
//! never split.

use unicode_segmentation::UnicodeSegmentation;

pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Longest prefix of `text` holding at most `limit` grapheme clusters.
pub fn truncate_graphemes(text: &str, limit: usize) -> &str {
    match text.grapheme_indices(true).nth(limit) {
        Some((byte_offset, _)) => &text[..byte_offset],
        None => text,
    }
}

/// Outcome of running a candidate value through the character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limited {
    pub text: String,
    /// The candidate had more characters than the limit allowed.
    pub exceeded: bool,
}

pub fn apply_limit(candidate: &str, limit: Option<usize>) -> Limited {
    match limit {
        Some(limit) => {
            let kept = truncate_graphemes(candidate, limit);
            Limited {
                exceeded: kept.len() < candidate.len(),
                text: kept.to_string(),
            }
        }
        None => Limited {
            text: candidate.to_string(),
            exceeded: false,
        },
    }
}
