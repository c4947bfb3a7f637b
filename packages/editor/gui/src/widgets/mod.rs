pub mod auto_grow;
pub mod multiline_input;

pub use auto_grow::{AutoGrow, Measurement, ScrollIndicator};
pub use multiline_input::{InputEvent, MultilineInput};
