//! Per-request question parameters

use radix_quiz_domain::Conversion;
use serde::{Deserialize, Serialize};

/// Caller preferences for a generated question.
///
/// An empty `conversions` list leaves the choice to the provider's
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionParams {
    pub conversions: Vec<Conversion>,
}

impl QuestionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conversion(mut self, conversion: Conversion) -> Self {
        self.conversions.push(conversion);
        self
    }
}
