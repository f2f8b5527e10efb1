//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. They are deserialized
//! directly and converted into application parameters after validation.

use radix_quiz_application::{GenerationParams, QuestionParams};
use radix_quiz_domain::{
    Conversion, DomainError, NumberRange, OutputFormat, PrefixRadixParser, Radix, RadixParser,
    StrictRadixParser,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use radix_quiz_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("choice_limit cannot be 0")]
    ZeroChoiceLimit,

    #[error("conversions[{index}] is invalid: {source}")]
    InvalidConversion {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("phrasing template cannot be empty")]
    EmptyTemplate,
}

/// How distractor generation re-reads digit strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileParserMode {
    /// Whole string must be valid in the radix
    #[default]
    Strict,
    /// Longest leading run of valid digits
    Prefix,
}

impl FileParserMode {
    pub fn into_parser(self) -> Box<dyn RadixParser> {
        match self {
            FileParserMode::Strict => Box::new(StrictRadixParser),
            FileParserMode::Prefix => Box::new(PrefixRadixParser),
        }
    }
}

/// Raw generation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Choices per question, correct answer included
    pub choice_limit: usize,
    /// Random-fill draws per question; 0 means unbounded
    pub max_random_attempts: usize,
    /// Fixed seed for reproducible quizzes
    pub seed: Option<u64>,
    pub parser: FileParserMode,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            choice_limit: params.choice_limit,
            max_random_attempts: params.max_random_attempts.unwrap_or(0),
            seed: None,
            parser: FileParserMode::default(),
        }
    }
}

/// One `[[conversions]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConversionConfig {
    pub from: u32,
    pub to: u32,
    pub min: i64,
    pub max: i64,
}

impl FileConversionConfig {
    pub fn to_conversion(&self) -> Result<Conversion, DomainError> {
        Ok(Conversion::new(
            Radix::new(self.from)?,
            Radix::new(self.to)?,
            NumberRange::new(self.min, self.max)?,
        ))
    }
}

/// Raw phrasing configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePhrasingConfig {
    /// Question templates; empty uses the built-in set
    pub templates: Vec<String>,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Mark the correct choice in text output
    pub show_answer: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            show_answer: false,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub generation: FileGenerationConfig,
    pub conversions: Vec<FileConversionConfig>,
    pub phrasing: FilePhrasingConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.generation.choice_limit == 0 {
            return Err(ConfigValidationError::ZeroChoiceLimit);
        }

        for (index, conversion) in self.conversions.iter().enumerate() {
            conversion
                .to_conversion()
                .map_err(|source| ConfigValidationError::InvalidConversion { index, source })?;
        }

        if self.phrasing.templates.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyTemplate);
        }

        Ok(())
    }

    pub fn generation_params(&self) -> GenerationParams {
        let max_random_attempts = match self.generation.max_random_attempts {
            0 => None,
            n => Some(n),
        };
        GenerationParams::default()
            .with_choice_limit(self.generation.choice_limit)
            .with_max_random_attempts(max_random_attempts)
    }

    pub fn question_params(&self) -> Result<QuestionParams, ConfigValidationError> {
        let mut params = QuestionParams::new();
        for (index, conversion) in self.conversions.iter().enumerate() {
            let conversion = conversion
                .to_conversion()
                .map_err(|source| ConfigValidationError::InvalidConversion { index, source })?;
            params = params.with_conversion(conversion);
        }
        Ok(params)
    }
}
