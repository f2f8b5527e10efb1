//! Conversion provider port
//!
//! Decides which radices a question converts between and which range the
//! number to convert is drawn from.

use super::random_source::RandomSource;
use crate::config::QuestionParams;
use radix_quiz_domain::{Conversion, DomainError};
use thiserror::Error;

/// Errors that can occur while selecting a conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("No conversions available to choose from")]
    NoConversions,

    #[error("Invalid conversion: {0}")]
    Invalid(#[from] DomainError),
}

/// Selects the conversion for a new question
pub trait ConversionProvider {
    /// Pick a conversion using `params`, falling back to `defaults`
    fn conversion(
        &self,
        rng: &mut dyn RandomSource,
        params: &QuestionParams,
        defaults: &[Conversion],
    ) -> Result<Conversion, ConversionError>;

    /// Conversions used when the caller does not ask for any
    fn default_conversions(&self) -> &[Conversion];
}
