//! Layout wrapper that measures text and grows the editor with it.
//!
//! [`AutoGrow`] owns three children. Only the last one is ever drawn:
//!
//! 1. a reference text holding a single character, laid out to learn the
//!    line height of the active font;
//! 2. a mirror text holding the current value, laid out at the editor's
//!    text width to learn the content height;
//! 3. the visible editor, sized to the content height up to an optional cap.
//!
//! New measurements are published on the next event after the layout pass
//! that produced them. Key presses are offered to the editor's key monitor
//! before the editor sees them; a consumed key never reaches the editor.

use crate::keyboard::key_press;
use expanding_editor_core::{metrics, FocusFlag, Key, KeyOutcome, Mount};
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{tree, Tree, Widget};
use iced::advanced::{Clipboard, Renderer as _, Shell};
use iced::event::{self, Event};
use iced::{keyboard, mouse};
use iced::{Border, Color, Element, Length, Padding, Rectangle, Renderer, Shadow, Size, Theme};
use tracing::trace;

const REFERENCE: usize = 0;
const MIRROR: usize = 1;
const EDITOR: usize = 2;

const INDICATOR_WIDTH: f32 = 4.0;
const INDICATOR_MIN_LENGTH: f32 = 12.0;

/// Heights produced by one layout pass, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Height of the single reference character, chrome inset included (`L`).
    pub line_height: f32,
    /// Height of the rendered content, chrome inset included (`H`).
    pub content_height: f32,
}

impl Measurement {
    /// Both laid-out text heights carry the same vertical inset, so the
    /// line count can take it back out of each.
    pub fn from_text_heights(reference: f32, mirror: f32, inset: Padding) -> Self {
        Self {
            line_height: reference + inset.vertical(),
            content_height: mirror + inset.vertical(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollIndicator {
    pub color: Color,
    /// Position of the thumb along the track, `0.0..=1.0`.
    pub offset: f32,
}

#[derive(Debug, Default)]
struct State {
    measured: Option<Measurement>,
    published: Option<Measurement>,
}

pub struct AutoGrow<'a, Message> {
    children: Vec<Element<'a, Message>>,
    inset: Padding,
    max_height: Option<f32>,
    focus: &'a FocusFlag,
    mount: &'a Mount<Message>,
    on_measure: Box<dyn Fn(Measurement) -> Message + 'a>,
    on_focus: Box<dyn Fn(bool) -> Message + 'a>,
    indicator: Option<ScrollIndicator>,
}

impl<'a, Message> AutoGrow<'a, Message> {
    /// `inset` is the editor padding. The vertical part of it is the chrome
    /// the reference text does not carry.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reference: impl Into<Element<'a, Message>>,
        mirror: impl Into<Element<'a, Message>>,
        editor: impl Into<Element<'a, Message>>,
        inset: Padding,
        focus: &'a FocusFlag,
        mount: &'a Mount<Message>,
        on_measure: impl Fn(Measurement) -> Message + 'a,
        on_focus: impl Fn(bool) -> Message + 'a,
    ) -> Self {
        Self {
            children: vec![reference.into(), mirror.into(), editor.into()],
            inset,
            max_height: None,
            focus,
            mount,
            on_measure: Box::new(on_measure),
            on_focus: Box::new(on_focus),
            indicator: None,
        }
    }

    pub fn max_height(mut self, max_height: Option<f32>) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn scroll_indicator(mut self, indicator: Option<ScrollIndicator>) -> Self {
        self.indicator = indicator;
        self
    }
}

impl<'a, Message> Widget<Message, Theme, Renderer> for AutoGrow<'a, Message>
where
    Message: Clone + 'a,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Shrink)
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children);
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let width = limits.max().width;

        let reference = self.children[REFERENCE].as_widget().layout(
            &mut tree.children[REFERENCE],
            renderer,
            &layout::Limits::new(Size::ZERO, Size::INFINITY),
        );

        let text_width = (width - self.inset.horizontal()).max(0.0);
        let mirror = self.children[MIRROR].as_widget().layout(
            &mut tree.children[MIRROR],
            renderer,
            &layout::Limits::new(Size::ZERO, Size::new(text_width, f32::INFINITY)),
        );

        let measurement = Measurement::from_text_heights(
            reference.size().height,
            mirror.size().height,
            self.inset,
        );
        let height = metrics::visible_height(measurement.content_height, self.max_height);

        let editor_size = Size::new(width, height);
        let editor = self.children[EDITOR].as_widget().layout(
            &mut tree.children[EDITOR],
            renderer,
            &layout::Limits::new(editor_size, editor_size),
        );

        tree.state.downcast_mut::<State>().measured = Some(measurement);

        layout::Node::with_children(editor_size, vec![reference, mirror, editor])
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(editor_layout) = layout.children().nth(EDITOR) else {
            return;
        };

        self.children[EDITOR].as_widget().draw(
            &tree.children[EDITOR],
            renderer,
            theme,
            style,
            editor_layout,
            cursor,
            viewport,
        );

        let Some(indicator) = self.indicator else {
            return;
        };
        let Some(measured) = tree.state.downcast_ref::<State>().measured else {
            return;
        };
        if !metrics::overflows(measured.content_height, self.max_height) {
            return;
        }

        let bounds = editor_layout.bounds();
        let length = (bounds.height * bounds.height / measured.content_height)
            .max(INDICATOR_MIN_LENGTH)
            .min(bounds.height);
        let travel = bounds.height - length;

        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: bounds.x + bounds.width - INDICATOR_WIDTH - 2.0,
                    y: bounds.y + travel * indicator.offset.clamp(0.0, 1.0),
                    width: INDICATOR_WIDTH,
                    height: length,
                },
                border: Border {
                    width: 0.0,
                    radius: (INDICATOR_WIDTH / 2.0).into(),
                    color: Color::TRANSPARENT,
                },
                shadow: Shadow::default(),
            },
            indicator.color,
        );
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        let state = tree.state.downcast_mut::<State>();
        if let Some(measured) = state.measured {
            if state.published != Some(measured) {
                trace!(target: "editor::widget", ?measured, "publishing measurement");
                state.published = Some(measured);
                shell.publish((self.on_measure)(measured));
            }
        }

        let Some(editor_layout) = layout.children().nth(EDITOR) else {
            return event::Status::Ignored;
        };

        match &event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let focused = cursor.is_over(editor_layout.bounds());
                if self.focus.set(focused) {
                    shell.publish((self.on_focus)(focused));
                }
            }
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                let press = key_press(key, *modifiers);

                if press.key == Key::Escape {
                    if self.focus.set(false) {
                        shell.publish((self.on_focus)(false));
                    }
                } else if let KeyOutcome::Consumed(message) = self.mount.deliver(&press) {
                    if let Some(message) = message {
                        shell.publish(message);
                    }
                    return event::Status::Captured;
                }
            }
            _ => {}
        }

        self.children[EDITOR].as_widget_mut().on_event(
            &mut tree.children[EDITOR],
            event,
            editor_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        )
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        layout
            .children()
            .nth(EDITOR)
            .map(|editor_layout| {
                self.children[EDITOR].as_widget().mouse_interaction(
                    &tree.children[EDITOR],
                    editor_layout,
                    cursor,
                    viewport,
                    renderer,
                )
            })
            .unwrap_or_default()
    }
}

impl<'a, Message> From<AutoGrow<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(auto_grow: AutoGrow<'a, Message>) -> Self {
        Element::new(auto_grow)
    }
}
