//! Height measurement and line counting.
//!
//! The editor learns its line height by laying out one invisible reference
//! character (`L`), and its content height (`H`) from layout. The visual
//! editor carries a platform chrome inset `P` that the reference text does
//! not, so both heights are corrected by `P` before dividing.

/// Character laid out (but never drawn) to learn the line height.
pub const REFERENCE_CHARACTER: &str = "X";

/// Slack for heights that had `P` added by layout and removed again here.
const ROUNDING_SLACK: f32 = 1e-3;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineMetrics {
    pub reference_line_height: Option<f32>,
    pub content_height: Option<f32>,
}

impl LineMetrics {
    /// Returns `true` if the stored value changed.
    pub fn record_reference(&mut self, height: f32) -> bool {
        let changed = self.reference_line_height != Some(height);
        self.reference_line_height = Some(height);
        changed
    }

    /// Returns `true` if the stored value changed.
    pub fn record_content(&mut self, height: f32) -> bool {
        let changed = self.content_height != Some(height);
        self.content_height = Some(height);
        changed
    }

    /// Line count for the current measurements, or `None` until both
    /// heights are known and the reference height is usable.
    pub fn line_count(&self, padding: f32) -> Option<usize> {
        let reference = self.reference_line_height?;
        let content = self.content_height?;
        line_count(reference, content, padding)
    }
}

/// `max(1, floor(max(0, H - P) / (L - P)))`.
///
/// Skipped while `L` is zero, and whenever the corrected line height is not
/// positive.
pub fn line_count(reference: f32, content: f32, padding: f32) -> Option<usize> {
    if reference == 0.0 {
        return None;
    }

    let line_height = reference - padding;
    if line_height.is_nan() || line_height <= 0.0 {
        return None;
    }

    let content_height = (content - padding).max(0.0);
    let lines = (content_height / line_height + ROUNDING_SLACK).floor();
    if !lines.is_finite() {
        return None;
    }

    Some((lines as usize).max(1))
}

/// Height the editor occupies: the content height, capped by `max_height`.
pub fn visible_height(content: f32, max_height: Option<f32>) -> f32 {
    match max_height {
        Some(max) => content.min(max),
        None => content,
    }
}

/// Whether the content is taller than the cap, i.e. the editor scrolls.
pub fn overflows(content: f32, max_height: Option<f32>) -> bool {
    max_height.is_some_and(|max| content > max)
}
