//! Postal code (CEP) shape check.
//!
//! Postal codes carry no check digit; validity is 8 digits plus the
//! degenerate-sequence guard the caller already applied.

/// Validate a cleaned 8-character candidate.
pub(super) fn validate(cleaned: &str) -> bool {
    cleaned.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::validate;

    #[test_case("59151650")]
    #[test_case("01310100")]
    fn accepts_digit_runs(cleaned: &str) {
        assert!(validate(cleaned));
    }

    #[test_case("5915165O"; "letter O is not a digit")]
    #[test_case("59151-65"; "separator survived")]
    fn rejects_non_digits(cleaned: &str) {
        assert!(!validate(cleaned));
    }
}
