//! Question record entity

use super::format::QuestionFormat;
use serde::{Deserialize, Serialize};

/// A generated multiple-choice question
///
/// `answer` is the index of the correct choice in `choices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub choices: Vec<String>,
    pub answer: usize,
    pub question: String,
    pub format: QuestionFormat,
}

impl QuestionRecord {
    pub fn multiple_choice(
        choices: Vec<String>,
        answer: usize,
        question: impl Into<String>,
    ) -> Self {
        Self {
            choices,
            answer,
            question: question.into(),
            format: QuestionFormat::MultipleChoice,
        }
    }

    /// The correct choice, if `answer` is in bounds
    pub fn correct_choice(&self) -> Option<&str> {
        self.choices.get(self.answer).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuestionRecord {
        QuestionRecord::multiple_choice(
            vec!["377".into(), "ff".into(), "255".into()],
            1,
            "Convert 255 from decimal to hexadecimal.",
        )
    }

    #[test]
    fn test_correct_choice() {
        let record = sample();
        assert_eq!(record.correct_choice(), Some("ff"));
        assert_eq!(record.choices.iter().filter(|c| *c == "ff").count(), 1);
    }

    #[test]
    fn test_out_of_bounds_answer() {
        let mut record = sample();
        record.answer = 9;
        assert_eq!(record.correct_choice(), None);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["answer"], 1);
        assert_eq!(json["format"], "multiple-choice");
        assert_eq!(json["choices"][0], "377");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
