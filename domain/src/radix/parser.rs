//! Digit-string parsing strategies.
//!
//! Distractor generation re-reads a digit string under a different radix.
//! How forgiving that reading is depends on the strategy:
//!
//! - [`StrictRadixParser`]: the whole string must be a literal in the radix
//! - [`PrefixRadixParser`]: the longest valid leading digit run is used

use super::value_objects::Radix;

/// Parses a digit string as an integer in a given radix.
///
/// Returns `None` when the text cannot be read in that radix.
pub trait RadixParser {
    fn parse(&self, text: &str, radix: Radix) -> Option<i64>;
}

impl<P: RadixParser + ?Sized> RadixParser for Box<P> {
    fn parse(&self, text: &str, radix: Radix) -> Option<i64> {
        (**self).parse(text, radix)
    }
}

/// Whole-string parser (default)
///
/// Accepts an optional sign followed by at least one digit, ASCII
/// case-insensitive. `"9a"` is not octal; `"19"` in base 16 is 25.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictRadixParser;

impl RadixParser for StrictRadixParser {
    fn parse(&self, text: &str, radix: Radix) -> Option<i64> {
        i64::from_str_radix(text, radix.get()).ok()
    }
}

/// Leading-digits parser
///
/// Skips leading whitespace, reads an optional sign (and a `0x` prefix in
/// base 16), then consumes digits until the first character that is not a
/// digit of the radix. Fails only when no digit was consumed or the value
/// does not fit in an `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixRadixParser;

impl RadixParser for PrefixRadixParser {
    fn parse(&self, text: &str, radix: Radix) -> Option<i64> {
        let mut rest = text.trim_start();
        let negative = match rest.as_bytes().first() {
            Some(b'-') => {
                rest = &rest[1..];
                true
            }
            Some(b'+') => {
                rest = &rest[1..];
                false
            }
            _ => false,
        };
        if radix == Radix::HEXADECIMAL
            && let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))
        {
            rest = stripped;
        }

        let limit = i128::from(i64::MAX) + 1;
        let mut magnitude: i128 = 0;
        let mut consumed = 0usize;
        for c in rest.chars() {
            let Some(digit) = c.to_digit(radix.get()) else {
                break;
            };
            magnitude = magnitude * i128::from(radix.get()) + i128::from(digit);
            if magnitude > limit {
                return None;
            }
            consumed += 1;
        }
        if consumed == 0 {
            return None;
        }

        let signed = if negative { -magnitude } else { magnitude };
        i64::try_from(signed).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_accepts_whole_literals() {
        let parser = StrictRadixParser;
        assert_eq!(parser.parse("19", Radix::HEXADECIMAL), Some(25));
        assert_eq!(parser.parse("FF", Radix::HEXADECIMAL), Some(255));
        assert_eq!(parser.parse("-17", Radix::OCTAL), Some(-15));
    }

    #[test]
    fn test_strict_rejects_invalid_digits() {
        let parser = StrictRadixParser;
        assert_eq!(parser.parse("9A", Radix::OCTAL), None);
        assert_eq!(parser.parse("19", Radix::OCTAL), None);
        assert_eq!(parser.parse("", Radix::DECIMAL), None);
        assert_eq!(parser.parse("-", Radix::DECIMAL), None);
    }

    #[test]
    fn test_prefix_reads_leading_digits() {
        let parser = PrefixRadixParser;
        assert_eq!(parser.parse("19", Radix::OCTAL), Some(1));
        assert_eq!(parser.parse("  42xyz", Radix::DECIMAL), Some(42));
        assert_eq!(parser.parse("-7f", Radix::DECIMAL), Some(-7));
        assert_eq!(parser.parse("0x1f", Radix::HEXADECIMAL), Some(31));
    }

    #[test]
    fn test_prefix_fails_without_digits() {
        let parser = PrefixRadixParser;
        assert_eq!(parser.parse("9A", Radix::OCTAL), None);
        assert_eq!(parser.parse("", Radix::DECIMAL), None);
        assert_eq!(parser.parse("+", Radix::DECIMAL), None);
    }

    #[test]
    fn test_boxed_parser_delegates() {
        let parser: Box<dyn RadixParser> = Box::new(PrefixRadixParser);
        assert_eq!(parser.parse("17z", Radix::OCTAL), Some(15));
    }

    #[test]
    fn test_prefix_overflow() {
        let parser = PrefixRadixParser;
        assert_eq!(
            parser.parse("-8000000000000000", Radix::HEXADECIMAL),
            Some(i64::MIN)
        );
        assert_eq!(parser.parse("8000000000000000", Radix::HEXADECIMAL), None);
        assert_eq!(parser.parse("ffffffffffffffffff", Radix::HEXADECIMAL), None);
    }
}
