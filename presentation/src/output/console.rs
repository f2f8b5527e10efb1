//! Console output formatter for generated questions

use crate::config::OutputConfig;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use radix_quiz_domain::{OutputFormat, QuestionRecord};

/// Formats questions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a question with lettered choices
    pub fn format(record: &QuestionRecord, number: usize, show_answer: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            format!("Q{}.", number).cyan().bold(),
            record.question
        ));

        for (index, choice) in record.choices.iter().enumerate() {
            let label = format!("{})", Self::choice_label(index));
            if show_answer && index == record.answer {
                output.push_str(&format!(
                    "  {} {} {}\n",
                    label.green().bold(),
                    choice.green(),
                    "<- answer".dimmed()
                ));
            } else {
                output.push_str(&format!("  {} {}\n", label.bold(), choice));
            }
        }

        output
    }

    /// Format as JSON
    pub fn format_json(record: &QuestionRecord) -> String {
        serde_json::to_string(record).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a batch according to `config`
    pub fn format_all(records: &[QuestionRecord], config: &OutputConfig) -> String {
        let formatter: &dyn OutputFormatter = &ConsoleFormatter;
        let blocks: Vec<String> = records
            .iter()
            .enumerate()
            .map(|(i, record)| match config.format {
                OutputFormat::Text => formatter.format(record, i + 1, config.show_answer),
                OutputFormat::Json => formatter.format_json(record),
            })
            .collect();

        match config.format {
            OutputFormat::Text => blocks.join("\n"),
            OutputFormat::Json => blocks.join("\n") + "\n",
        }
    }

    /// Choice label: A-Z, then numbers past the alphabet
    fn choice_label(index: usize) -> String {
        match u8::try_from(index) {
            Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
            _ => (index + 1).to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, record: &QuestionRecord, number: usize, show_answer: bool) -> String {
        Self::format(record, number, show_answer)
    }

    fn format_json(&self, record: &QuestionRecord) -> String {
        Self::format_json(record)
    }
}
