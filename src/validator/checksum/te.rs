//! Electoral card (TE) check digits.
//!
//! A TE is an 8-digit sequential number, a 2-digit state code (01..=28) and
//! two check digits. The first check digit covers the sequential number with
//! ascending weights 2..=9; the second covers the state code and the first
//! check digit with weights 7, 8 and 9. Both use `sum mod 11` with remainder
//! 10 collapsing to 0.

use super::weighted_sum;

const SEQUENTIAL_WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Validate a cleaned 12-digit candidate.
pub(super) fn validate(cleaned: &str) -> bool {
    let b = cleaned.as_bytes();
    if !b.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let d = |i: usize| u32::from(b[i] - b'0');

    let state = d(8) * 10 + d(9);
    if !(1..=28).contains(&state) {
        return false;
    }

    let first = collapse(weighted_sum(&b[..8], &SEQUENTIAL_WEIGHTS) % 11);
    if d(10) != first {
        return false;
    }

    let second = collapse((d(8) * 7 + d(9) * 8 + first * 9) % 11);
    d(11) == second
}

const fn collapse(remainder: u32) -> u32 {
    if remainder == 10 { 0 } else { remainder }
}
