use iced::widget::{button, container, text_editor};
use iced::{Background, Border, Color, Theme};

// Color palette
pub struct Colors;

impl Colors {
    pub const BACKGROUND: Color = Color::from_rgb(0.11, 0.11, 0.13); // #1c1c21
    pub const SURFACE: Color = Color::from_rgb(0.13, 0.13, 0.16); // #212127
    pub const SURFACE_LIGHT: Color = Color::from_rgb(0.16, 0.16, 0.20); // #292933
    pub const PRIMARY: Color = Color::from_rgb(0.38, 0.65, 1.0); // #61a6ff
    pub const TEXT: Color = Color::from_rgb(0.88, 0.88, 0.90); // #e0e0e6
    pub const TEXT_DIM: Color = Color::from_rgb(0.50, 0.50, 0.58); // #80809e
    pub const BORDER: Color = Color::from_rgb(0.20, 0.20, 0.24); // #33333d
    pub const BORDER_FOCUSED: Color = Color::from_rgb(0.30, 0.45, 0.70); // #4d73b3
    pub const SUCCESS: Color = Color::from_rgb(0.40, 0.80, 0.40); // #66cc66
    pub const ERROR: Color = Color::from_rgb(0.90, 0.40, 0.40); // #e66666
}

pub fn palette() -> iced::theme::Palette {
    iced::theme::Palette {
        background: Colors::BACKGROUND,
        text: Colors::TEXT,
        primary: Colors::PRIMARY,
        success: Colors::SUCCESS,
        danger: Colors::ERROR,
    }
}

// Frame around the editor
pub fn editor_container(focused: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Colors::SURFACE)),
        border: Border {
            width: 1.0,
            radius: 8.0.into(),
            color: if focused {
                Colors::BORDER_FOCUSED
            } else {
                Colors::BORDER
            },
        },
        ..Default::default()
    }
}

// The editor itself is transparent, the frame draws the chrome
pub fn editor_style(
    placeholder: Color,
    value: Color,
) -> impl Fn(&Theme, text_editor::Status) -> text_editor::Style {
    move |_theme, _status| text_editor::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            width: 0.0,
            radius: 0.0.into(),
            color: Color::TRANSPARENT,
        },
        icon: Color::TRANSPARENT,
        placeholder,
        value,
        selection: Color {
            a: 0.3,
            ..Colors::PRIMARY
        },
    }
}

// Submitted message bubble in the demo
pub fn message_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Colors::SURFACE_LIGHT)),
        border: Border {
            width: 0.0,
            radius: 8.0.into(),
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

pub fn secondary_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Colors::SURFACE_LIGHT)),
        text_color: Colors::TEXT,
        border: Border {
            width: 1.0,
            radius: 6.0.into(),
            color: Colors::BORDER,
        },
        ..Default::default()
    }
}
