//! Per-kind checksum validators.
//!
//! Every validator operates on the *cleaned* form only (see
//! [`super::canonical::clean`]) and starts from the same two gates: the exact
//! cleaned length, and the degenerate-sequence guard. A run of one repeated
//! character is never a real document, even when it happens to satisfy the
//! check-digit formula (`111.111.111-11` does, for instance).

mod cep;
mod certidao;
mod cnpj;
mod cpf;
mod pis;
mod rg;
mod te;

use crate::domain::DocumentKind;

/// Why a cleaned candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Failure {
    /// Length, degenerate-sequence or check-digit failure.
    Invalid,
    /// ID-card refinement: a non-digit sits in the 8-digit body.
    IdCardBody,
}

/// Run the checksum algorithm of `kind` over a cleaned candidate.
pub(crate) fn validate(kind: DocumentKind, cleaned: &str) -> Result<(), Failure> {
    if cleaned.len() != kind.cleaned_len() || all_same(cleaned) {
        return Err(Failure::Invalid);
    }
    let ok = match kind {
        DocumentKind::CompanyRegistry => cnpj::validate(cleaned),
        DocumentKind::PersonalRegistry => cpf::validate(cleaned),
        DocumentKind::IdCard => return rg::validate(cleaned),
        DocumentKind::PostalCode => cep::validate(cleaned),
        DocumentKind::ElectoralCard => te::validate(cleaned),
        DocumentKind::SocialIntegration => pis::validate(cleaned),
        DocumentKind::BirthCertificate => certidao::validate(cleaned),
    };
    if ok { Ok(()) } else { Err(Failure::Invalid) }
}

/// True when every character of a non-empty string is the same.
fn all_same(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|first| chars.all(|c| c == first))
}

/// Weighted sum of digit bytes against a weight table of the same length.
///
/// Callers guarantee `bytes` holds ASCII digits and `bytes.len() == weights.len()`.
fn weighted_sum(bytes: &[u8], weights: &[u32]) -> u32 {
    bytes
        .iter()
        .zip(weights)
        .map(|(&b, &w)| u32::from(b - b'0') * w)
        .sum()
}

/// The `mod 11` check-digit rule shared by CNPJ, CPF and PIS: remainders
/// below 2 collapse to 0, everything else is the complement to 11.
const fn mod11_digit(sum: u32) -> u32 {
    let r = sum % 11;
    if r < 2 { 0 } else { 11 - r }
}
