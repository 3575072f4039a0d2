//! Mask grammar matchers.
//!
//! A matcher answers one question: does the raw input follow the kind's
//! canonical punctuated layout? Lengths and separator offsets are checked
//! positionally on the byte level; matchers never panic and never allocate.
//!
//! Per the CNPJ layout rules this does *not* inspect digit content: a
//! well-placed set of separators around garbage still "matches the mask" and
//! is rejected by the checksum stage instead. The ID card is the exception:
//! its historical grammar fixes the character classes of every group, so the
//! matcher enforces them.

use crate::domain::DocumentKind;

/// Returns `true` when `value` follows the canonical masked layout of `kind`.
#[must_use]
pub fn matches_mask(kind: DocumentKind, value: &str) -> bool {
    let b = value.as_bytes();
    match kind {
        DocumentKind::CompanyRegistry => {
            b.len() == 18 && b[2] == b'.' && b[6] == b'.' && b[10] == b'/' && b[15] == b'-'
        }
        DocumentKind::PersonalRegistry => {
            b.len() == 14 && b[3] == b'.' && b[7] == b'.' && b[11] == b'-'
        }
        DocumentKind::IdCard => id_card(b),
        DocumentKind::PostalCode => b.len() == 9 && b[5] == b'-',
        DocumentKind::ElectoralCard => b.len() == 14 && b[4] == b' ' && b[9] == b' ',
        DocumentKind::SocialIntegration => {
            b.len() == 14 && b[3] == b'.' && b[9] == b'.' && b[12] == b'-'
        }
        DocumentKind::BirthCertificate => birth_certificate(b),
    }
}

/// `XX.XXX.XXX-X`: two digits, dot, three digits, dot, three digits,
/// hyphen, then a digit or `X`.
///
/// This is the grammar of the original issuing convention; a legacy 3-group
/// variant without the trailing check group exists in some states and is not
/// accepted here (see DESIGN.md).
fn id_card(b: &[u8]) -> bool {
    if b.len() != 12 || b[2] != b'.' || b[6] != b'.' || b[10] != b'-' {
        return false;
    }
    let body = [b[0], b[1], b[3], b[4], b[5], b[7], b[8], b[9]];
    if !body.iter().all(u8::is_ascii_digit) {
        return false;
    }
    b[11].is_ascii_digit() || b[11] == b'X' || b[11] == b'x'
}

/// `XXXXXX XX XX XXXX X XXXXX XXX XXXXXXX-XX`: the 40-character CNJ layout.
fn birth_certificate(b: &[u8]) -> bool {
    const SPACES: [usize; 7] = [6, 9, 12, 17, 19, 25, 29];
    b.len() == 40 && SPACES.iter().all(|&i| b[i] == b' ') && b[37] == b'-'
}
