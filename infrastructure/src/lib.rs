//! Infrastructure layer for radix-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod conversion;
pub mod phrasing;
pub mod random;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileConversionConfig, FileGenerationConfig,
    FileOutputConfig, FileOutputFormat, FileParserMode, FilePhrasingConfig,
};
pub use conversion::{TableConversionProvider, default_conversion_table};
pub use phrasing::{DEFAULT_TEMPLATES, TemplatePhrasingProvider};
pub use random::SeededRandomSource;
