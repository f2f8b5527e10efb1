//! Presentation-level configuration
//!
//! Settings that only affect how generated questions are printed.

use radix_quiz_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Mark the correct choice in text output
    pub show_answer: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_answer: false,
        }
    }
}

impl OutputConfig {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_show_answer(mut self, show_answer: bool) -> Self {
        self.show_answer = show_answer;
        self
    }

    /// Force colors off process-wide when disabled; otherwise leave the
    /// terminal and `NO_COLOR` detection alone
    pub fn apply_color_preference(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
