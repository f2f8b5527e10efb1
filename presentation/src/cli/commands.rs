//! CLI command definitions

use clap::{Parser, ValueEnum};
use radix_quiz_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for generated questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Question text with lettered choices
    Text,
    /// One JSON record per line
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// How misread-source distractors re-read the digit string
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParserMode {
    /// The whole string must be valid in the sibling radix
    Strict,
    /// Use the longest valid leading digit run
    Prefix,
}

/// CLI arguments for radix-quiz
#[derive(Parser, Debug)]
#[command(name = "radix-quiz")]
#[command(author, version, about = "Multiple-choice change-of-base question generator")]
#[command(long_about = r#"
radix-quiz generates multiple-choice questions that ask you to convert a
number from one base to another.

Wrong answers are built from common mistakes: writing the right value in
the wrong base, or reading the digits in the wrong base. Remaining slots
are filled with other numbers from the same range.

Configuration files are loaded from (in priority order):
1. RADIX_QUIZ_*        Environment variables
2. --config <path>     Explicit config file
3. ./radix-quiz.toml   Project-level config
4. <config dir>/radix-quiz/config.toml   Global config

Example:
  radix-quiz
  radix-quiz -n 10 --seed 42 --show-answer
  radix-quiz --from 2 --to 16 --min 0 --max 255 -o json
"#)]
pub struct Cli {
    /// Number of questions to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible questions
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Source radix (2-36)
    #[arg(long, value_name = "RADIX", value_parser = clap::value_parser!(u32).range(2..=36), requires = "to")]
    pub from: Option<u32>,

    /// Target radix (2-36)
    #[arg(long, value_name = "RADIX", value_parser = clap::value_parser!(u32).range(2..=36), requires = "from")]
    pub to: Option<u32>,

    /// Smallest number to convert
    #[arg(long, value_name = "N", allow_negative_numbers = true, requires = "from")]
    pub min: Option<i64>,

    /// Largest number to convert
    #[arg(long, value_name = "N", allow_negative_numbers = true, requires = "from")]
    pub max: Option<i64>,

    /// Choices per question, correct answer included
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub choices: Option<u64>,

    /// Random-fill draws per question (0 = unbounded)
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<usize>,

    /// Digit re-reading strategy for misread distractors
    #[arg(long, value_enum)]
    pub parser: Option<ParserMode>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Mark the correct choice
    #[arg(long)]
    pub show_answer: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
