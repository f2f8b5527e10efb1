//! Question format value object

use serde::{Deserialize, Serialize};

/// How a question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionFormat {
    /// Pick one of a fixed set of choices
    #[default]
    MultipleChoice,
}

impl QuestionFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionFormat::MultipleChoice => "multiple-choice",
        }
    }
}

impl std::fmt::Display for QuestionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
