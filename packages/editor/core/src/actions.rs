use crate::types::KeyPress;

/// Everything that can happen to a mounted editor
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Editing
    TextChanged { candidate: String },
    Clear,

    // Layout measurements
    ReferenceMeasured { height: f32 },
    ContentMeasured { height: f32 },

    // Input
    FocusChanged { focused: bool },
    KeyPressed(KeyPress),

    // Lifecycle
    Detached,
}
