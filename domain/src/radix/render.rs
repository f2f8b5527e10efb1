//! Rendering integers as digit strings in an arbitrary radix.

use super::value_objects::Radix;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Render `value` in `radix` using lowercase digits and a leading `-` for
/// negative values.
pub fn render(value: i64, radix: Radix) -> String {
    let base = u64::from(radix.get());
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
    }
    if value < 0 {
        digits.push(b'-');
    }
    digits.reverse();

    // Only ASCII bytes from DIGITS and '-' are pushed
    digits.into_iter().map(char::from).collect()
}
