//! Toolkit-independent core of the expanding text editor.
//!
//! Holds the editor state and its reducer, plus the pieces the view layer
//! builds on: grapheme-accurate limiting, the line-count math, and the
//! Return-key filter with its window-wide monitor registry.

pub mod actions;
pub mod config;
pub mod counter;
pub mod effects;
pub mod grapheme;
pub mod keys;
pub mod metrics;
pub mod monitor;
pub mod reducer;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

pub use actions::Action;
pub use config::{ConfigError, EditorConfig};
pub use counter::CharCount;
pub use effects::Effect;
pub use keys::{classify, FocusFlag, KeyDecision};
pub use monitor::{KeyMonitors, KeyOutcome, MonitorHandle, Mount};
pub use reducer::reduce;
pub use state::EditorState;
pub use types::{Key, KeyPress, Modifiers, Platform};
