use serde::{Deserialize, Serialize};

/// Target platform the editor is rendered on.
///
/// The platform decides two things: the chrome inset the visual editor
/// carries on top of the measured text, and whether a window-level key
/// monitor exists to turn Return into a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Ios,
    Other,
}

impl Platform {
    /// Vertical inset of the editor chrome on macOS, in logical units.
    pub const MACOS_PADDING: f32 = 17.667;

    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Other
        }
    }

    /// Padding constant `P` subtracted from both heights before counting lines.
    pub fn padding(self) -> f32 {
        match self {
            Platform::MacOs => Self::MACOS_PADDING,
            Platform::Ios | Platform::Other => 0.0,
        }
    }

    pub fn supports_key_monitor(self) -> bool {
        matches!(self, Platform::MacOs)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Return,
    Escape,
    Character(char),
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub logo: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        logo: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        logo: false,
    };
}

/// A single key-down event, already translated out of the UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}
