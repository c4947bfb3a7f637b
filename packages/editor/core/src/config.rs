use crate::types::Platform;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max height must be a finite positive number, got {0}")]
    InvalidMaxHeight(f32),
}

/// Per-mount editor configuration. Never changes while the editor is mounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    pub placeholder: String,

    /// Maximum number of user-perceived characters. `Some(0)` is allowed.
    #[serde(default)]
    pub char_limit: Option<usize>,

    #[serde(default)]
    pub show_char_count: bool,

    /// Height at which growth stops and the editor starts scrolling.
    #[serde(default)]
    pub max_height: Option<f32>,

    #[serde(default)]
    pub platform: Platform,
}

impl EditorConfig {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            char_limit: None,
            show_char_count: false,
            max_height: None,
            platform: Platform::current(),
        }
    }

    pub fn char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    pub fn show_char_count(mut self, show: bool) -> Self {
        self.show_char_count = show;
        self
    }

    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(height) = self.max_height {
            if !height.is_finite() || height <= 0.0 {
                return Err(ConfigError::InvalidMaxHeight(height));
            }
        }
        Ok(())
    }
}
