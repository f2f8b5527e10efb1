//! Application layer for radix-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{GenerationParams, QuestionParams};
pub use ports::{
    conversion_provider::{ConversionError, ConversionProvider},
    phrasing_provider::PhrasingProvider,
    random_source::RandomSource,
};
pub use use_cases::generate_question::{
    GenerateQuestionError, GenerateQuestionUseCase, add_random_choices,
};
