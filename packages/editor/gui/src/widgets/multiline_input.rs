use crate::environment::Environment;
use crate::theme;
use crate::widgets::auto_grow::{AutoGrow, Measurement, ScrollIndicator};
use expanding_editor_core::metrics::REFERENCE_CHARACTER;
use expanding_editor_core::{
    reduce, Action, CharCount, EditorConfig, EditorState, Effect, FocusFlag, KeyMonitors, Mount,
};
use iced::advanced::text::Shaping;
use iced::alignment::Horizontal;
use iced::widget::{column, container, text, text_editor};
use iced::{Element, Length, Padding};
use std::rc::Rc;
use tracing::debug;

const HORIZONTAL_INSET: f32 = 12.0;

/// Events the editor feeds back into its own `update`.
#[derive(Debug, Clone)]
pub enum InputEvent {
    Edit(text_editor::Action),
    Measured(Measurement),
    FocusChanged(bool),
}

/// A growing multi-line text input.
///
/// The caller owns this value (and with it the text buffer) and routes
/// [`InputEvent`]s back into [`MultilineInput::update`]. Line-count changes
/// come back as [`Effect::LineCountChanged`] for the caller to store.
pub struct MultilineInput<Message> {
    config: EditorConfig,
    content: text_editor::Content,
    state: EditorState,
    focus: FocusFlag,
    mount: Mount<Message>,
}

impl<Message> MultilineInput<Message> {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_text(config, "")
    }

    pub fn with_text(config: EditorConfig, initial: &str) -> Self {
        let mut input = Self {
            config,
            content: text_editor::Content::new(),
            state: EditorState::default(),
            focus: FocusFlag::default(),
            mount: Mount::default(),
        };
        input.set_text(initial);
        input
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    /// Replaces the value, applying the character limit.
    pub fn set_text(&mut self, value: &str) -> Vec<Effect> {
        let effects = self.dispatch(Action::TextChanged {
            candidate: value.to_string(),
        });
        self.reset_buffer();
        effects
    }

    pub fn clear(&mut self) -> Vec<Effect> {
        let effects = self.dispatch(Action::Clear);
        self.reset_buffer();
        effects
    }

    pub fn line_count(&self) -> Option<usize> {
        self.state.line_count
    }

    pub fn char_count(&self) -> CharCount {
        self.state.char_count(&self.config)
    }

    pub fn is_focused(&self) -> bool {
        self.focus.get()
    }

    pub fn is_attached(&self) -> bool {
        self.mount.is_attached()
    }

    /// Releases the key monitor. Safe to call on every teardown path.
    pub fn detach(&mut self) -> bool {
        self.focus.set(false);
        self.dispatch(Action::Detached);
        self.mount.detach()
    }

    pub fn update(&mut self, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::Edit(action) => {
                let is_edit = action.is_edit();
                self.content.perform(action);
                if !is_edit {
                    return Vec::new();
                }

                let effects = self.dispatch(Action::TextChanged {
                    candidate: buffer_text(&self.content),
                });
                if effects
                    .iter()
                    .any(|effect| matches!(effect, Effect::TextTruncated { .. }))
                {
                    self.reset_buffer();
                }
                effects
            }

            InputEvent::Measured(measurement) => {
                let mut effects = self.dispatch(Action::ReferenceMeasured {
                    height: measurement.line_height,
                });
                effects.extend(self.dispatch(Action::ContentMeasured {
                    height: measurement.content_height,
                }));
                effects
            }

            InputEvent::FocusChanged(focused) => self.dispatch(Action::FocusChanged { focused }),
        }
    }

    fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let (state, effects) = reduce(&self.config, &self.state, &action);
        self.state = state;
        effects
    }

    fn reset_buffer(&mut self) {
        self.content = text_editor::Content::with_text(&self.state.text);
        self.content
            .perform(text_editor::Action::Move(text_editor::Motion::DocumentEnd));
    }

    /// Text laid out by the hidden mirror. Never empty, and a trailing
    /// newline keeps its (empty) last line.
    fn mirror_text(&self) -> String {
        let value = &self.state.text;
        if value.is_empty() {
            REFERENCE_CHARACTER.to_string()
        } else if value.ends_with('\n') {
            format!("{value} ")
        } else {
            value.clone()
        }
    }

    /// Where the indicator sits: it follows the cursor line, not the
    /// editor's own scroll position.
    fn cursor_offset(&self) -> f32 {
        let (line, _) = self.content.cursor_position();
        let last = self.content.line_count().saturating_sub(1);
        if last == 0 {
            0.0
        } else {
            line as f32 / last as f32
        }
    }

    fn inset(&self) -> Padding {
        let vertical = self.config.platform.padding() / 2.0;
        Padding {
            top: vertical,
            bottom: vertical,
            left: HORIZONTAL_INSET,
            right: HORIZONTAL_INSET,
        }
    }
}

impl<Message: Clone + 'static> MultilineInput<Message> {
    /// Installs the Return-to-submit key monitor, once, where the platform
    /// has one.
    pub fn attach(&mut self, monitors: &KeyMonitors<Message>, env: &Environment<Message>) -> bool {
        let installed = self.mount.attach(
            monitors,
            self.config.platform,
            &self.focus,
            env.on_submit.clone(),
        );
        if installed {
            debug!(target: "editor::widget", "editor attached");
        }
        installed
    }

    pub fn view<'a>(
        &'a self,
        env: &'a Environment<Message>,
        on_event: impl Fn(InputEvent) -> Message + 'a,
    ) -> Element<'a, Message> {
        let on_event = Rc::new(on_event);
        let font = env.editor_font();

        let editor = text_editor(&self.content)
            .placeholder(self.config.placeholder.as_str())
            .font(font)
            .size(env.text_size)
            .padding(self.inset())
            .height(Length::Fill)
            .on_action({
                let on_event = Rc::clone(&on_event);
                move |action| on_event(InputEvent::Edit(action))
            })
            .style(theme::editor_style(env.placeholder_color, env.text_color));

        // Shaped like the editor so wrapping matches.
        let reference = text(REFERENCE_CHARACTER)
            .font(font)
            .size(env.text_size)
            .shaping(Shaping::Advanced);
        let mirror = text(self.mirror_text())
            .font(font)
            .size(env.text_size)
            .shaping(Shaping::Advanced);

        let indicator = env.show_scroll_indicators.then(|| ScrollIndicator {
            color: theme::Colors::TEXT_DIM,
            offset: self.cursor_offset(),
        });

        let auto_grow = AutoGrow::new(
            reference,
            mirror,
            editor,
            self.inset(),
            &self.focus,
            &self.mount,
            {
                let on_event = Rc::clone(&on_event);
                move |measurement| on_event(InputEvent::Measured(measurement))
            },
            move |focused| on_event(InputEvent::FocusChanged(focused)),
        )
        .max_height(self.config.max_height)
        .scroll_indicator(indicator);

        let frame = container(auto_grow)
            .width(Length::Fill)
            .style(theme::editor_container(self.state.focused));

        if !self.config.show_char_count {
            return frame.into();
        }

        let count = self.char_count();
        let count_color = if count.exceeded {
            env.count_exceeded_color
        } else {
            env.count_color
        };
        let readout = container(
            text(count.label())
                .font(env.count_font())
                .size(env.count_size)
                .color(count_color),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Right);

        column![frame, readout].spacing(4).into()
    }
}

/// Buffer contents joined with `'\n'`, without the trailing newline
/// `Content::text` appends.
fn buffer_text(content: &text_editor::Content) -> String {
    content
        .lines()
        .enumerate()
        .fold(String::new(), |mut text, (index, line)| {
            if index > 0 {
                text.push('\n');
            }
            text.push_str(&line);
            text
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use expanding_editor_core::Platform;
    use text_editor::{Action as EditorAction, Edit};

    fn mac(config: EditorConfig) -> MultilineInput<()> {
        MultilineInput::new(config.platform(Platform::MacOs))
    }

    fn measure(input: &mut MultilineInput<()>, reference: f32, mirror: f32) -> Vec<Effect> {
        let inset = input.inset();
        input.update(InputEvent::Measured(Measurement::from_text_heights(
            reference, mirror, inset,
        )))
    }

    #[test]
    fn empty_editor_measures_one_line_on_macos() {
        for reference in [14.5, 18.2, 21.0] {
            let mut input = mac(EditorConfig::new(""));
            let effects = measure(&mut input, reference, reference);

            assert_eq!(input.line_count(), Some(1), "reference {reference}");
            assert_eq!(effects, vec![Effect::LineCountChanged(1)]);
        }
    }

    #[test]
    fn wrapped_content_measures_each_line_on_macos() {
        let mut input = mac(EditorConfig::new(""));
        measure(&mut input, 18.2, 18.2);

        let effects = measure(&mut input, 18.2, 18.2 * 3.0);
        assert_eq!(input.line_count(), Some(3));
        assert_eq!(effects, vec![Effect::LineCountChanged(3)]);

        measure(&mut input, 18.2, 18.2 * 7.0);
        assert_eq!(input.line_count(), Some(7));
    }

    #[test]
    fn measurement_carries_the_inset_on_both_heights() {
        let inset = Padding {
            top: 4.0,
            bottom: 6.0,
            left: 12.0,
            right: 12.0,
        };
        let measurement = Measurement::from_text_heights(18.0, 54.0, inset);

        assert_eq!(measurement.line_height, 28.0);
        assert_eq!(measurement.content_height, 64.0);
    }

    #[test]
    fn shift_return_appends_newline() {
        let mut input = MultilineInput::<()>::with_text(EditorConfig::new(""), "hello");

        let effects = input.update(InputEvent::Edit(EditorAction::Edit(Edit::Enter)));

        assert_eq!(input.text(), "hello\n");
        assert_eq!(buffer_text(&input.content), "hello\n");
        assert!(effects.is_empty());
    }

    #[test]
    fn typing_past_limit_keeps_text_and_buffer_at_limit() {
        let config = EditorConfig::new("").char_limit(3);
        let mut input = MultilineInput::<()>::with_text(config, "ab");

        input.update(InputEvent::Edit(EditorAction::Edit(Edit::Insert('c'))));
        assert_eq!(input.text(), "abc");
        assert!(!input.char_count().exceeded);

        let effects = input.update(InputEvent::Edit(EditorAction::Edit(Edit::Insert('d'))));
        assert_eq!(
            effects,
            vec![Effect::TextTruncated {
                text: "abc".to_string()
            }]
        );
        assert_eq!(input.text(), "abc");
        assert_eq!(buffer_text(&input.content), "abc");
        assert!(input.char_count().exceeded);
    }

    #[test]
    fn cursor_moves_do_not_touch_text() {
        let mut input = MultilineInput::<()>::with_text(EditorConfig::new(""), "ab");

        let effects = input.update(InputEvent::Edit(EditorAction::Move(
            text_editor::Motion::DocumentStart,
        )));

        assert!(effects.is_empty());
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn buffer_text_has_no_extra_trailing_newline() {
        assert_eq!(buffer_text(&text_editor::Content::with_text("")), "");
        assert_eq!(buffer_text(&text_editor::Content::with_text("a\nb")), "a\nb");
        assert_eq!(buffer_text(&text_editor::Content::with_text("a\n")), "a\n");
    }

    #[test]
    fn mirror_text_never_collapses_a_line() {
        let mut input = MultilineInput::<()>::new(EditorConfig::new(""));
        assert_eq!(input.mirror_text(), REFERENCE_CHARACTER);

        input.set_text("a\n");
        assert_eq!(input.mirror_text(), "a\n ");

        input.set_text("a");
        assert_eq!(input.mirror_text(), "a");
    }
}
