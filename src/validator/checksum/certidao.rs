//! Birth-certificate matrícula check digits.
//!
//! The 32-digit matrícula (CNJ registry format) ends in two check digits
//! over the 30-digit base. Each digit is a `mod 11` weighted sum with
//! weights 2..=11, applied from the rightmost position leftwards and cycling
//! back to 2; a remainder of 10 maps to 1. The first digit covers the base,
//! the second covers the base plus the first digit.

/// Validate a cleaned 32-digit candidate.
pub(super) fn validate(cleaned: &str) -> bool {
    let b = cleaned.as_bytes();
    if !b.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let first = check_digit(&b[..30]);
    let second = check_digit(&b[..31]);
    u32::from(b[30] - b'0') == first && u32::from(b[31] - b'0') == second
}

/// Mod-11 digit with ascending weights 2..=11 from the rightmost digit.
fn check_digit(digits: &[u8]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip((2..=11).cycle())
        .map(|(&d, w)| u32::from(d - b'0') * w)
        .sum();
    match sum % 11 {
        10 => 1,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::validate;

    // Base 104539015520131000120210000123: first weighted sum 305,
    // remainder 8; second sum 343, remainder 2.
    #[test_case("10453901552013100012021000012382")]
    fn accepts_worked_example(cleaned: &str) {
        assert!(validate(cleaned));
    }

    #[test_case("10453901552013100012021000012392"; "first digit wrong")]
    #[test_case("10453901552013100012021000012383"; "second digit wrong")]
    #[test_case("1045390155201310001202100001238X"; "non digit")]
    fn rejects_bad_candidates(cleaned: &str) {
        assert!(!validate(cleaned));
    }
}
