mod state;

use anyhow::Context;
use expanding_editor::{fonts, theme, Environment, InputEvent, MultilineInput};
use expanding_editor_core::{EditorConfig, Effect, KeyMonitors};
use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Element, Length, Task as Command, Theme};
use state::{update, Action, AppState};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Path to a JSON `EditorConfig` overriding the demo defaults.
const CONFIG_ENV: &str = "EXPANDING_EDITOR_CONFIG";

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,editor=debug,demo=debug")),
        )
        .init();

    let config = load_config()?;
    info!(target: "demo", ?config, "starting");

    iced::application("Expanding Editor", Demo::update, Demo::view)
        .theme(|_| Theme::custom("Expanding Editor".to_string(), theme::palette()))
        .default_font(fonts::DEFAULT_FONT)
        .run_with(move || Demo::new(config))?;

    Ok(())
}

fn load_config() -> anyhow::Result<EditorConfig> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.to_string_lossy()))?;
            serde_json::from_str(&raw).context("parsing editor config")?
        }
        None => EditorConfig::new("Type a message... (Enter to send, Shift+Enter for a newline)")
            .char_limit(280)
            .show_char_count(true)
            .max_height(160.0),
    };

    config.validate()?;
    Ok(config)
}

#[derive(Debug, Clone)]
enum Message {
    Input(InputEvent),
    Submit,
    ToggleEditor,
}

struct Demo {
    state: AppState,
    input: MultilineInput<Message>,
    monitors: KeyMonitors<Message>,
    env: Environment<Message>,
}

impl Demo {
    fn new(config: EditorConfig) -> (Self, Command<Message>) {
        let mut demo = Self {
            state: AppState::default(),
            input: MultilineInput::new(config),
            monitors: KeyMonitors::new(),
            env: Environment::styled().on_submit(Message::Submit),
        };
        demo.mount();

        (demo, Command::none())
    }

    fn mount(&mut self) {
        self.input.attach(&self.monitors, &self.env);
        update(&mut self.state, Action::SetEditorMounted(true));
    }

    fn unmount(&mut self) {
        self.input.detach();
        update(&mut self.state, Action::SetEditorMounted(false));
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Input(event) => {
                let effects = self.input.update(event);
                self.handle_effects(effects);
            }

            Message::Submit => {
                debug!(target: "demo", chars = self.input.char_count().count, "submit");
                update(
                    &mut self.state,
                    Action::MessageSubmitted(self.input.text().to_string()),
                );
                let effects = self.input.clear();
                self.handle_effects(effects);
            }

            Message::ToggleEditor => {
                if self.state.editor_mounted {
                    self.unmount();
                } else {
                    self.mount();
                }
                debug!(target: "demo", monitors = self.monitors.len(), "editor toggled");
            }
        }

        Command::none()
    }

    fn handle_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LineCountChanged(lines) => {
                    update(&mut self.state, Action::LineCountChanged(lines));
                }
                Effect::TextTruncated { text } => {
                    debug!(target: "demo", kept = text.len(), "draft hit the character limit");
                }
                Effect::Submit => {
                    let _ = self.update(Message::Submit);
                }
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let messages: Vec<Element<Message>> = self
            .state
            .messages
            .iter()
            .map(|message| {
                container(text(&message.content).size(14).font(fonts::EDITOR))
                    .padding([8, 12])
                    .width(Length::Fill)
                    .style(theme::message_container)
                    .into()
            })
            .collect();
        let message_area = scrollable(
            Column::with_children(messages)
                .spacing(12)
                .padding([20, 24]),
        )
        .height(Length::Fill);

        let line_count = match self.state.line_count {
            Some(lines) => format!("lines: {lines}"),
            None => "lines: -".to_string(),
        };
        let toggle_label = if self.state.editor_mounted {
            "Unmount editor"
        } else {
            "Mount editor"
        };
        let toolbar = row![
            text(line_count).size(12).color(theme::Colors::TEXT_DIM),
            Space::with_width(Length::Fill),
            button(text(toggle_label).size(12))
                .on_press(Message::ToggleEditor)
                .padding([4, 10])
                .style(theme::secondary_button),
        ]
        .align_y(iced::Alignment::Center);

        let mut composer = column![toolbar].spacing(8).padding([12, 24]);
        if self.state.editor_mounted {
            composer = composer.push(self.input.view(&self.env, Message::Input));
        }

        column![message_area, composer].into()
    }
}
