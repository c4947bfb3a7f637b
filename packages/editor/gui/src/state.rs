/// A submitted draft
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub id: usize,
    pub content: String,
}

/// Pure demo state - just data, no widgets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub messages: Vec<SentMessage>,
    /// Written by the editor through its line-count output
    pub line_count: Option<usize>,
    pub editor_mounted: bool,
}

/// All possible state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    MessageSubmitted(String),
    LineCountChanged(usize),
    SetEditorMounted(bool),
}

/// Pure state transitions - no side effects
pub fn update(state: &mut AppState, action: Action) {
    match action {
        Action::MessageSubmitted(content) => {
            let content = content.trim_end().to_string();
            if !content.trim().is_empty() {
                state.messages.push(SentMessage {
                    id: state.messages.len(),
                    content,
                });
            }
        }

        Action::LineCountChanged(lines) => {
            state.line_count = Some(lines);
        }

        Action::SetEditorMounted(mounted) => {
            state.editor_mounted = mounted;
            if !mounted {
                state.line_count = None;
            }
        }
    }
}
