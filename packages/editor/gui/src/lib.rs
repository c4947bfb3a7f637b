//! A growing multi-line text input for iced.
//!
//! [`MultilineInput`] renders a placeholder while empty, grows with its
//! content up to an optional cap, counts and limits characters, reports its
//! line count, and on macOS turns Return into a submit while Shift+Return
//! still inserts a newline. Styling comes from an [`Environment`] handed
//! down the view tree.

pub mod environment;
pub mod fonts;
pub mod keyboard;
pub mod theme;
pub mod widgets;

pub use environment::Environment;
pub use widgets::{InputEvent, Measurement, MultilineInput};
