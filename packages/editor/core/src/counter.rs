use std::fmt;

/// Character-count readout, derived from the committed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCount {
    pub count: usize,
    pub limit: Option<usize>,
    /// The last edit tried to go past the limit and was truncated.
    pub exceeded: bool,
}

impl CharCount {
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CharCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit {
            Some(limit) => write!(f, "{}/{}", self.count, limit),
            None => write!(f, "{}", self.count),
        }
    }
}
