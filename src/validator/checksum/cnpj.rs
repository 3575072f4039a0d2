//! Company registry (CNPJ) check digits.
//!
//! The 2026 alphanumeric format is a superset of the legacy all-numeric one:
//! the 12-character body may mix digits and uppercase letters, while the two
//! check digits stay numeric. A single character-to-value mapping covers both
//! alphabets, so legacy and alphanumeric bodies share one code path.

use super::mod11_digit;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a cleaned 14-character candidate.
pub(super) fn validate(cleaned: &str) -> bool {
    let b = cleaned.as_bytes();
    let (body, check) = b.split_at(12);
    if !body.iter().all(|&c| is_cnpj_char(c)) || !check.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let first = mod11_digit(weighted(&b[..12], &FIRST_WEIGHTS));
    if u32::from(check[0] - b'0') != first {
        return false;
    }
    let second = mod11_digit(weighted(&b[..13], &SECOND_WEIGHTS));
    u32::from(check[1] - b'0') == second
}

/// Digits and uppercase letters are the legal body alphabet.
const fn is_cnpj_char(c: u8) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase()
}

/// Character value for the weighted sum: ASCII code minus 48, so `0`-`9`
/// map to 0-9 and `A`-`Z` to 17-42.
const fn char_value(c: u8) -> u32 {
    c as u32 - 48
}

fn weighted(chars: &[u8], weights: &[u32]) -> u32 {
    chars
        .iter()
        .zip(weights)
        .map(|(&c, &w)| char_value(c) * w)
        .sum()
}
