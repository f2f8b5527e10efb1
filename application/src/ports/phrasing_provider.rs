//! Phrasing provider port

use super::random_source::RandomSource;
use radix_quiz_domain::Radix;

/// Produces the question text shown to the learner
pub trait PhrasingProvider {
    fn question_text(
        &self,
        rng: &mut dyn RandomSource,
        source_text: &str,
        from: Radix,
        to: Radix,
    ) -> String;
}
