use std::fmt;

/// The families of Brazilian identification numbers this crate validates.
///
/// Each kind owns its cleaned (separator-free) length, its separator set and
/// its canonical mask layout. The checksum rules themselves live in the
/// validator modules; this type is pure data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// CNPJ: company registry number, 12-character alphanumeric body plus
    /// two numeric check digits.
    CompanyRegistry,
    /// CPF: personal registry number, 9 digits plus two check digits.
    PersonalRegistry,
    /// RG: state-issued ID card, 8 digits plus one check character
    /// (digit or `X`).
    IdCard,
    /// CEP: postal code, 8 digits, no check digit.
    PostalCode,
    /// TE: electoral card, 8-digit sequential number, 2-digit state code
    /// and two check digits.
    ElectoralCard,
    /// PIS: social integration number, 10 digits plus one check digit.
    SocialIntegration,
    /// Birth-certificate matrícula, 30-digit base plus two check digits.
    BirthCertificate,
}

impl DocumentKind {
    /// Length of the value once every separator has been stripped.
    #[must_use]
    pub const fn cleaned_len(self) -> usize {
        match self {
            Self::CompanyRegistry => 14,
            Self::PersonalRegistry => 11,
            Self::IdCard => 9,
            Self::PostalCode => 8,
            Self::ElectoralCard => 12,
            Self::SocialIntegration => 11,
            Self::BirthCertificate => 32,
        }
    }

    /// The separator characters that may appear in the masked form.
    #[must_use]
    pub const fn separators(self) -> &'static [char] {
        match self {
            Self::CompanyRegistry => &['.', '-', '/'],
            Self::PersonalRegistry | Self::IdCard | Self::SocialIntegration => &['.', '-'],
            Self::PostalCode => &['-'],
            Self::ElectoralCard => &[' '],
            Self::BirthCertificate => &[' ', '-'],
        }
    }

    /// Human-readable description of the canonical mask layout, used in
    /// error messages.
    #[must_use]
    pub const fn mask_pattern(self) -> &'static str {
        match self {
            Self::CompanyRegistry => "XX.XXX.XXX/XXXX-XX",
            Self::PersonalRegistry => "XXX.XXX.XXX-XX",
            Self::IdCard => "XX.XXX.XXX-X",
            Self::PostalCode => "XXXXX-XXX",
            Self::ElectoralCard => "XXXX XXXX XXXX",
            Self::SocialIntegration => "XXX.XXXXX.XX-X",
            Self::BirthCertificate => "XXXXXX XX XX XXXX X XXXXX XXX XXXXXXX-XX",
        }
    }

    /// Short display name for the document kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CompanyRegistry => "CNPJ",
            Self::PersonalRegistry => "CPF",
            Self::IdCard => "RG",
            Self::PostalCode => "CEP",
            Self::ElectoralCard => "TE",
            Self::SocialIntegration => "PIS",
            Self::BirthCertificate => "birth certificate",
        }
    }

    /// Description of the bare character class, used in error messages.
    #[must_use]
    pub const fn bare_pattern(self) -> &'static str {
        match self {
            Self::CompanyRegistry => "digits 0-9 and letters A-Z",
            _ => "digits 0-9",
        }
    }

    /// Whether `c` may appear in the bare (digits-only) form of this kind.
    ///
    /// The company registry is the one alphanumeric kind; everything else is
    /// strictly numeric in bare form.
    #[must_use]
    pub const fn is_bare_char(self, c: char) -> bool {
        match self {
            Self::CompanyRegistry => c.is_ascii_alphanumeric(),
            _ => c.is_ascii_digit(),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
