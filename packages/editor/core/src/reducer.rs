use crate::{
    actions::Action, config::EditorConfig, effects::Effect, grapheme::apply_limit,
    keys::{classify, KeyDecision},
    state::EditorState,
};
use tracing::{debug, trace};

/// Pure state transition function
/// Returns new state and any effects that need to be performed
pub fn reduce(
    config: &EditorConfig,
    state: &EditorState,
    action: &Action,
) -> (EditorState, Vec<Effect>) {
    let mut new_state = state.clone();
    let mut effects = Vec::new();

    match action {
        Action::TextChanged { candidate } => {
            let limited = apply_limit(candidate, config.char_limit);
            if limited.exceeded {
                debug!(target: "editor::reducer", limit = ?config.char_limit, "candidate truncated to limit");
                effects.push(Effect::TextTruncated {
                    text: limited.text.clone(),
                });
            }
            new_state.text = limited.text;
            new_state.limit_hit = limited.exceeded;
        }

        Action::Clear => {
            new_state.text.clear();
            new_state.limit_hit = false;
        }

        Action::ReferenceMeasured { height } => {
            new_state.metrics.record_reference(*height);
        }

        Action::ContentMeasured { height } => {
            new_state.metrics.record_content(*height);
        }

        Action::FocusChanged { focused } => {
            new_state.focused = *focused;
        }

        Action::Detached => {
            // Measurements only live while mounted
            new_state.focused = false;
            new_state.metrics = Default::default();
            new_state.line_count = None;
        }

        Action::KeyPressed(press) => {
            if new_state.focused
                && config.platform.supports_key_monitor()
                && classify(press) == KeyDecision::Submit
            {
                debug!(target: "editor::reducer", "return pressed, submitting");
                effects.push(Effect::Submit);
            }
        }
    }

    // Line count follows every measurement change
    if let Some(lines) = new_state.metrics.line_count(config.platform.padding()) {
        if new_state.line_count != Some(lines) {
            trace!(target: "editor::reducer", lines, "line count changed");
            new_state.line_count = Some(lines);
            effects.push(Effect::LineCountChanged(lines));
        }
    }

    (new_state, effects)
}
