//! Table-driven conversion provider

use radix_quiz_application::{ConversionError, ConversionProvider, QuestionParams, RandomSource};
use radix_quiz_domain::{Conversion, NumberRange, Radix};
use tracing::debug;

/// Default conversions: every ordered pair of octal, decimal and
/// hexadecimal, with ranges that keep answers to two or three digits.
pub fn default_conversion_table() -> Vec<Conversion> {
    let dec_hex = NumberRange::between(16, 255);
    let octal = NumberRange::between(8, 511);

    vec![
        Conversion::new(Radix::DECIMAL, Radix::HEXADECIMAL, dec_hex),
        Conversion::new(Radix::HEXADECIMAL, Radix::DECIMAL, dec_hex),
        Conversion::new(Radix::DECIMAL, Radix::OCTAL, octal),
        Conversion::new(Radix::OCTAL, Radix::DECIMAL, octal),
        Conversion::new(Radix::OCTAL, Radix::HEXADECIMAL, octal),
        Conversion::new(Radix::HEXADECIMAL, Radix::OCTAL, octal),
    ]
}

/// Picks a conversion uniformly from the caller's list, or from a default
/// table when the caller has none.
#[derive(Debug, Clone)]
pub struct TableConversionProvider {
    defaults: Vec<Conversion>,
}

impl Default for TableConversionProvider {
    fn default() -> Self {
        Self::new(default_conversion_table())
    }
}

impl TableConversionProvider {
    pub fn new(defaults: Vec<Conversion>) -> Self {
        Self { defaults }
    }

    /// Build a conversion from unchecked parts
    pub fn conversion_from_parts(
        from: u32,
        to: u32,
        min: i64,
        max: i64,
    ) -> Result<Conversion, ConversionError> {
        Ok(Conversion::new(
            Radix::new(from)?,
            Radix::new(to)?,
            NumberRange::new(min, max)?,
        ))
    }
}

impl ConversionProvider for TableConversionProvider {
    fn conversion(
        &self,
        rng: &mut dyn RandomSource,
        params: &QuestionParams,
        defaults: &[Conversion],
    ) -> Result<Conversion, ConversionError> {
        let candidates: &[Conversion] = if params.conversions.is_empty() {
            defaults
        } else {
            &params.conversions
        };

        let conversion = rng
            .pick_index(candidates.len())
            .and_then(|index| candidates.get(index))
            .copied()
            .ok_or(ConversionError::NoConversions)?;

        debug!(
            "Selected conversion base {} -> base {} over {}..={} ({} candidates)",
            conversion.radix.from,
            conversion.radix.to,
            conversion.range.min(),
            conversion.range.max(),
            candidates.len()
        );
        Ok(conversion)
    }

    fn default_conversions(&self) -> &[Conversion] {
        &self.defaults
    }
}
