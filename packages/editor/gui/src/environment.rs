//! Ambient styling and behavior for the editor.
//!
//! An [`Environment`] is an explicit, immutable value handed down the view
//! tree. A parent builds one (or derives one with [`Environment::inherit`])
//! and every editor below reads from it. There is no global state.

use crate::{fonts, theme::Colors};
use iced::{Color, Font};

#[derive(Debug, Clone)]
pub struct Environment<Message> {
    pub placeholder_color: Color,
    pub text_color: Color,
    /// Editor font. Falls back to `inherited_font`, then [`Font::DEFAULT`].
    pub font: Option<Font>,
    pub inherited_font: Option<Font>,
    pub text_size: f32,
    pub count_color: Color,
    pub count_exceeded_color: Color,
    /// Falls back to the editor font.
    pub count_font: Option<Font>,
    pub count_size: f32,
    /// Emitted when Return (without Shift) is pressed in a focused editor.
    pub on_submit: Option<Message>,
    pub show_scroll_indicators: bool,
}

impl<Message> Default for Environment<Message> {
    fn default() -> Self {
        Self {
            placeholder_color: Color {
                a: 0.7,
                ..Colors::TEXT_DIM
            },
            text_color: Colors::TEXT,
            font: None,
            inherited_font: None,
            text_size: 14.0,
            count_color: Colors::TEXT_DIM,
            count_exceeded_color: Colors::ERROR,
            count_font: None,
            count_size: 11.0,
            on_submit: None,
            show_scroll_indicators: true,
        }
    }
}

impl<Message: Clone> Environment<Message> {
    /// Child environment that inherits everything and treats `font` as the
    /// ambient font for editors that set none of their own.
    pub fn inherit(&self, font: Font) -> Self {
        Self {
            inherited_font: Some(font),
            ..self.clone()
        }
    }
}

impl<Message> Environment<Message> {
    pub fn editor_font(&self) -> Font {
        self.font.or(self.inherited_font).unwrap_or(Font::DEFAULT)
    }

    pub fn count_font(&self) -> Font {
        self.count_font.unwrap_or_else(|| self.editor_font())
    }

    pub fn with_placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn with_count_color(mut self, color: Color) -> Self {
        self.count_color = color;
        self
    }

    pub fn with_count_exceeded_color(mut self, color: Color) -> Self {
        self.count_exceeded_color = color;
        self
    }

    pub fn with_count_font(mut self, font: Font) -> Self {
        self.count_font = Some(font);
        self
    }

    pub fn on_submit(mut self, message: Message) -> Self {
        self.on_submit = Some(message);
        self
    }

    pub fn show_scroll_indicators(mut self, show: bool) -> Self {
        self.show_scroll_indicators = show;
        self
    }
}

impl<Message> Environment<Message> {
    /// Environment using this crate's bundled fonts.
    pub fn styled() -> Self {
        Self {
            font: Some(fonts::EDITOR),
            count_font: Some(fonts::COUNT),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_falls_back_to_inherited_then_default() {
        let env = Environment::<()>::default();
        assert_eq!(env.editor_font(), Font::DEFAULT);

        let child = env.inherit(Font::MONOSPACE);
        assert_eq!(child.editor_font(), Font::MONOSPACE);

        let own = child.with_font(fonts::EDITOR_BOLD);
        assert_eq!(own.editor_font(), fonts::EDITOR_BOLD);
    }

    #[test]
    fn count_font_follows_editor_font() {
        let env = Environment::<()>::default().with_font(Font::MONOSPACE);
        assert_eq!(env.count_font(), Font::MONOSPACE);

        let env = env.with_count_font(fonts::EDITOR_BOLD);
        assert_eq!(env.count_font(), fonts::EDITOR_BOLD);
    }

    #[test]
    fn submit_message_is_optional() {
        let env = Environment::<&str>::default();
        assert!(env.on_submit.is_none());
        assert_eq!(env.on_submit("send").on_submit, Some("send"));
    }
}
