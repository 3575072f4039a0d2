//! Social integration (PIS) check digit.

use super::{mod11_digit, weighted_sum};

const WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a cleaned 11-digit candidate.
pub(super) fn validate(cleaned: &str) -> bool {
    let b = cleaned.as_bytes();
    if !b.iter().all(u8::is_ascii_digit) {
        return false;
    }
    u32::from(b[10] - b'0') == mod11_digit(weighted_sum(&b[..10], &WEIGHTS))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::validate;

    // Body 1201234567: weighted sum 119, remainder 9 -> digit 2.
    #[test_case("12012345672")]
    // Body 7053942610: weighted sum 214, remainder 5 -> digit 6.
    #[test_case("70539426106")]
    fn accepts_worked_examples(cleaned: &str) {
        assert!(validate(cleaned));
    }

    #[test_case("12012345671"; "check digit wrong")]
    #[test_case("120123456C2"; "non digit")]
    fn rejects_bad_candidates(cleaned: &str) {
        assert!(!validate(cleaned));
    }
}
