//! Radix value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Base of a positional numeral system (Value Object)
///
/// Only bases `2..=36` can be written with the digits `0-9a-z`, so any
/// other value is rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    /// Create a radix, rejecting bases outside `2..=36`
    pub fn new(base: u32) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&base) {
            Ok(Self(base))
        } else {
            Err(DomainError::InvalidRadix(base))
        }
    }

    /// The numeric base
    pub fn get(self) -> u32 {
        self.0
    }

    /// Conventional name for the well-known bases
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            2 => Some("binary"),
            8 => Some("octal"),
            10 => Some("decimal"),
            16 => Some("hexadecimal"),
            _ => None,
        }
    }
}

impl TryFrom<u32> for Radix {
    type Error = DomainError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Radix::new(base)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive numeric range a question's value is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct NumberRange {
    min: i64,
    max: i64,
}

#[derive(Deserialize)]
struct RawRange {
    min: i64,
    max: i64,
}

impl TryFrom<RawRange> for NumberRange {
    type Error = DomainError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        NumberRange::new(raw.min, raw.max)
    }
}

impl NumberRange {
    pub fn new(min: i64, max: i64) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range spanning `a` and `b` in whichever order they are given
    pub fn between(a: i64, b: i64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of distinct integers in the range, saturating at `u64::MAX`
    pub fn span(&self) -> u64 {
        (self.max.abs_diff(self.min)).saturating_add(1)
    }
}

/// Source and target radix of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadixPair {
    pub from: Radix,
    pub to: Radix,
}

impl RadixPair {
    pub fn new(from: Radix, to: Radix) -> Self {
        Self { from, to }
    }
}

/// A conversion task: which radices to convert between and where the
/// number to convert comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub radix: RadixPair,
    pub range: NumberRange,
}

impl Conversion {
    pub fn new(from: Radix, to: Radix, range: NumberRange) -> Self {
        Self {
            radix: RadixPair::new(from, to),
            range,
        }
    }
}
