//! Configuration file loading for radix-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RADIX_QUIZ_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./radix-quiz.toml` or `./.radix-quiz.toml`
//! 4. Global: `<config dir>/radix-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileConversionConfig, FileGenerationConfig,
    FileOutputConfig, FileOutputFormat, FileParserMode, FilePhrasingConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
