//! Generation parameters: question assembly control.
//!
//! [`GenerationParams`] groups the static parameters used by
//! [`GenerateQuestionUseCase`](crate::use_cases::generate_question::GenerateQuestionUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Default number of choices per question (answer + 4 distractors)
pub const DEFAULT_CHOICE_LIMIT: usize = 5;

/// Default bound on random-fill draws per question
pub const DEFAULT_MAX_RANDOM_ATTEMPTS: usize = 10_000;

/// Question assembly parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Capacity of the answer-choice collector, correct answer included.
    pub choice_limit: usize,
    /// Maximum random draws used to fill remaining choices.
    /// `None` retries until the collector is full.
    pub max_random_attempts: Option<usize>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            choice_limit: DEFAULT_CHOICE_LIMIT,
            max_random_attempts: Some(DEFAULT_MAX_RANDOM_ATTEMPTS),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_choice_limit(mut self, limit: usize) -> Self {
        self.choice_limit = limit;
        self
    }

    pub fn with_max_random_attempts(mut self, max: Option<usize>) -> Self {
        self.max_random_attempts = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = GenerationParams::default();
        assert_eq!(params.choice_limit, 5);
        assert_eq!(params.max_random_attempts, Some(10_000));
    }

    #[test]
    fn test_builder() {
        let params = GenerationParams::default()
            .with_choice_limit(4)
            .with_max_random_attempts(None);

        assert_eq!(params.choice_limit, 4);
        assert!(params.max_random_attempts.is_none());
    }
}
