//! Personal registry (CPF) check digits.

use super::{mod11_digit, weighted_sum};

const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a cleaned 11-digit candidate.
pub(super) fn validate(cleaned: &str) -> bool {
    let b = cleaned.as_bytes();
    if !b.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let first = mod11_digit(weighted_sum(&b[..9], &FIRST_WEIGHTS));
    let second = mod11_digit(weighted_sum(&b[..10], &SECOND_WEIGHTS));
    u32::from(b[9] - b'0') == first && u32::from(b[10] - b'0') == second
}
