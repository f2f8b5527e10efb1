//! Output formatter trait

use radix_quiz_domain::QuestionRecord;

/// Trait for formatting generated questions
pub trait OutputFormatter {
    /// Format one question for reading; `number` is its 1-based position
    fn format(&self, record: &QuestionRecord, number: usize, show_answer: bool) -> String;

    /// Format one question as a single JSON line
    fn format_json(&self, record: &QuestionRecord) -> String;
}
