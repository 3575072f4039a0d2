//! ID card (RG) check character.
//!
//! Issuing states never agreed on a single algorithm; this module implements
//! the SSP-SP rule, the one variant that explains the `X` check character:
//! the 8 body digits are multiplied by ascending weights 2..=9, and the check
//! value is `11 - (sum mod 11)`, with 10 rendered as `X` and 11 as `0`.

use super::Failure;

const WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Validate a cleaned 9-character candidate.
///
/// A non-digit inside the 8-digit body is reported as [`Failure::IdCardBody`]
/// so callers can keep the diagnostic distinction the generic invalid error
/// would lose.
pub(super) fn validate(cleaned: &str) -> Result<(), Failure> {
    let b = cleaned.as_bytes();
    let (body, check) = b.split_at(8);
    if !body.iter().all(u8::is_ascii_digit) {
        return Err(Failure::IdCardBody);
    }
    if !check[0].is_ascii_digit() && check[0] != b'X' {
        return Err(Failure::Invalid);
    }

    let sum: u32 = body
        .iter()
        .zip(&WEIGHTS)
        .map(|(&d, &w)| u32::from(d - b'0') * w)
        .sum();
    let expected = match 11 - sum % 11 {
        10 => b'X',
        11 => b'0',
        dv => b'0' + u8::try_from(dv).unwrap_or(0),
    };
    if check[0] == expected {
        Ok(())
    } else {
        Err(Failure::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{Failure, validate};

    // Body 34712366: weighted sum 186, remainder 10 -> check digit 1.
    #[test_case("347123661")]
    // Body 30200001: weighted sum 23, remainder 1 -> check value 10 -> X.
    #[test_case("30200001X")]
    // Body 10000001: weighted sum 11, remainder 0 -> check value 11 -> 0.
    #[test_case("100000010")]
    fn accepts_worked_examples(cleaned: &str) {
        assert_eq!(validate(cleaned), Ok(()));
    }

    #[test_case("347123669"; "wrong digit")]
    #[test_case("302000011"; "digit where X expected")]
    #[test_case("34712366X"; "X where digit expected")]
    #[test_case("34712366x"; "lowercase x was not cleaned")]
    fn rejects_wrong_check_char(cleaned: &str) {
        assert_eq!(validate(cleaned), Err(Failure::Invalid));
    }

    #[test_case("3471236X1")]
    #[test_case("A47123661")]
    fn non_digit_body_is_the_specific_failure(cleaned: &str) {
        assert_eq!(validate(cleaned), Err(Failure::IdCardBody));
    }
}
