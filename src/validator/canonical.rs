//! Canonicalization of raw input into the cleaned, separator-free form.

use crate::domain::DocumentKind;

/// Strip the kind's separator characters and uppercase ASCII letters.
///
/// This is a total function: malformed input simply comes out malformed and
/// is rejected downstream by the length and character-class checks. Cleaning
/// is idempotent.
#[must_use]
pub fn clean(kind: DocumentKind, value: &str) -> String {
    value
        .chars()
        .filter(|c| !kind.separators().contains(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::clean;
    use crate::domain::DocumentKind;

    #[test_case(DocumentKind::CompanyRegistry, "12.ABC.345/01DE-35", "12ABC34501DE35")]
    #[test_case(DocumentKind::CompanyRegistry, "ab.cd1.234/0001-47", "ABCD1234000147"; "lowercase letters are raised")]
    #[test_case(DocumentKind::PersonalRegistry, "529.982.247-25", "52998224725")]
    #[test_case(DocumentKind::PostalCode, "59151-650", "59151650")]
    #[test_case(DocumentKind::ElectoralCard, "1023 8501 0175", "102385010175")]
    #[test_case(DocumentKind::IdCard, "30.200.001-x", "30200001X")]
    fn strips_separators(kind: DocumentKind, raw: &str, expected: &str) {
        assert_eq!(clean(kind, raw), expected);
    }

    #[test_case(DocumentKind::CompanyRegistry, "12.ABC.345/01DE-35")]
    #[test_case(DocumentKind::PostalCode, "59151-650")]
    #[test_case(DocumentKind::BirthCertificate, "104539 01 55 2013 1 00012 021 0000123-82")]
    #[test_case(DocumentKind::PersonalRegistry, "not a document at all")]
    #[test_case(DocumentKind::PersonalRegistry, "")]
    fn cleaning_is_idempotent(kind: DocumentKind, raw: &str) {
        let once = clean(kind, raw);
        assert_eq!(clean(kind, &once), once);
    }

    #[test]
    fn foreign_punctuation_is_kept() {
        // Only the kind's own separators are stripped; anything else stays
        // and fails validation later.
        assert_eq!(clean(DocumentKind::PostalCode, "59151.650"), "59151.650");
    }
}
