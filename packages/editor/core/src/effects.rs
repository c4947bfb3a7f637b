/// Work the reducer hands back to the view layer and the caller
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The committed value differs from what the user typed; the text
    /// buffer must be reset to `text`.
    TextTruncated { text: String },

    /// Write a new value into the caller's line-count output.
    LineCountChanged(usize),

    /// Invoke the caller's submit callback.
    Submit,
}
