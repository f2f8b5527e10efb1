//! Application-level configuration.
//!
//! - [`GenerationParams`]: question assembly control (choice count, random fill bound)
//! - [`QuestionParams`]: caller preferences handed to the conversion provider

pub mod generation_params;
pub mod question_params;

pub use generation_params::GenerationParams;
pub use question_params::QuestionParams;
