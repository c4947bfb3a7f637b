use iced::Font;

// Editor text; the system monospace face keeps wrapping predictable
pub const EDITOR: Font = Font::MONOSPACE;

pub const EDITOR_BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::MONOSPACE
};

// Character-count readout
pub const COUNT: Font = Font::MONOSPACE;

// Main font to use everywhere else
pub const DEFAULT_FONT: Font = Font::DEFAULT;
