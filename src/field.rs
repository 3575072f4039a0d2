//! Typed, validated document fields for use at (de)serialization boundaries.
//!
//! [`Validated<D, M>`] wraps a `String` that has already passed the
//! [`validate`](crate::validate) pipeline for the document kind `D` under the
//! access mode `M`. Deserializing one of these types validates on the way in
//! and rejects non-string input with [`FieldError::Type`]; serializing writes
//! the stored string back out unchanged.
//!
//! The aliases at the bottom of this module cover every kind × mode
//! combination, so a data model can say exactly how strict each field is:
//!
//! ```
//! use brdoc::field::{Cnpj, CepMask, CpfDigits};
//!
//! #[derive(serde::Deserialize)]
//! struct Company {
//!     registry: Cnpj,       // masked or bare
//!     postal_code: CepMask, // masked only
//!     owner: CpfDigits,     // bare only
//! }
//! ```

use std::{fmt, marker::PhantomData, ops::Deref, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
    domain::{AccessMode, DocumentKind},
    validator::{FieldError, validate},
};

/// Marker trait tying a field type to its [`DocumentKind`].
pub trait DocumentSpec {
    /// The document kind this marker stands for.
    const KIND: DocumentKind;
}

/// Marker trait tying a field type to its [`AccessMode`].
pub trait ModeSpec {
    /// The access mode this marker stands for.
    const MODE: AccessMode;
}

/// Marker types for each document kind and access mode.
pub mod marker {
    use super::{AccessMode, DocumentKind, DocumentSpec, ModeSpec};

    macro_rules! document_marker {
        ($(#[$doc:meta] $name:ident => $kind:ident),* $(,)?) => {
            $(
                #[$doc]
                #[derive(Debug, Clone, Copy, PartialEq, Eq)]
                pub struct $name;

                impl DocumentSpec for $name {
                    const KIND: DocumentKind = DocumentKind::$kind;
                }
            )*
        };
    }

    document_marker! {
        /// Company registry (CNPJ).
        Cnpj => CompanyRegistry,
        /// Personal registry (CPF).
        Cpf => PersonalRegistry,
        /// ID card (RG).
        Rg => IdCard,
        /// Postal code (CEP).
        Cep => PostalCode,
        /// Electoral card (TE).
        Te => ElectoralCard,
        /// Social integration (PIS).
        Pis => SocialIntegration,
        /// Birth-certificate matrícula.
        Certidao => BirthCertificate,
    }

    /// Accept masked or bare input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flexible;

    impl ModeSpec for Flexible {
        const MODE: AccessMode = AccessMode::Flexible;
    }

    /// Accept masked input only.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MaskOnly;

    impl ModeSpec for MaskOnly {
        const MODE: AccessMode = AccessMode::MaskOnly;
    }

    /// Accept bare input only.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DigitsOnly;

    impl ModeSpec for DigitsOnly {
        const MODE: AccessMode = AccessMode::DigitsOnly;
    }
}

/// A document value that passed validation for kind `D` under mode `M`.
///
/// The stored string is exactly what the caller supplied; no normalization
/// happens on acceptance.
pub struct Validated<D, M = marker::Flexible> {
    value: String,
    _spec: PhantomData<fn() -> (D, M)>,
}

impl<D: DocumentSpec, M: ModeSpec> Validated<D, M> {
    /// Validate `value` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldError`] produced by the validation pipeline when
    /// the value is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        validate(D::KIND, M::MODE, &value)?;
        Ok(Self {
            value,
            _spec: PhantomData,
        })
    }

    /// The validated string, exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the wrapper and return the validated string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }

    /// The separator-free, uppercased form of the value.
    #[must_use]
    pub fn cleaned(&self) -> String {
        crate::validator::clean(D::KIND, &self.value)
    }
}

impl<D, M> Clone for Validated<D, M> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _spec: PhantomData,
        }
    }
}

impl<D: DocumentSpec, M> fmt::Debug for Validated<D, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple(D::KIND.name()).field(&self.value).finish()
    }
}

impl<D, M> PartialEq for Validated<D, M> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D, M> Eq for Validated<D, M> {}

impl<D, M> Deref for Validated<D, M> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<D, M> AsRef<str> for Validated<D, M> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<D, M> fmt::Display for Validated<D, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<D: DocumentSpec, M: ModeSpec> FromStr for Validated<D, M> {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<D: DocumentSpec, M: ModeSpec> TryFrom<String> for Validated<D, M> {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<D, M> Serialize for Validated<D, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, D: DocumentSpec, M: ModeSpec> Deserialize<'de> for Validated<D, M> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        deserializer.deserialize_any(FieldVisitor::<D, M>(PhantomData))
    }
}

struct FieldVisitor<D, M>(PhantomData<fn() -> (D, M)>);

impl<D: DocumentSpec, M: ModeSpec> de::Visitor<'_> for FieldVisitor<D, M> {
    type Value = Validated<D, M>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a {} string ({})", D::KIND.name(), M::MODE)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Validated::new(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Err(E::custom(FieldError::Type { found: "an integer" }))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Err(E::custom(FieldError::Type { found: "an integer" }))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Err(E::custom(FieldError::Type { found: "a number" }))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Err(E::custom(FieldError::Type { found: "a boolean" }))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(E::custom(FieldError::Type { found: "null" }))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(E::custom(FieldError::Type { found: "null" }))
    }
}

macro_rules! field_aliases {
    ($(#[$doc:meta] $flexible:ident / $masked:ident / $digits:ident => $marker:ident),* $(,)?) => {
        $(
            #[$doc]
            #[doc = " Accepts masked or bare input."]
            pub type $flexible = Validated<marker::$marker, marker::Flexible>;

            #[$doc]
            #[doc = " Accepts masked input only."]
            pub type $masked = Validated<marker::$marker, marker::MaskOnly>;

            #[$doc]
            #[doc = " Accepts bare input only."]
            pub type $digits = Validated<marker::$marker, marker::DigitsOnly>;
        )*
    };
}

field_aliases! {
    /// Company registry number (CNPJ).
    Cnpj / CnpjMask / CnpjDigits => Cnpj,
    /// Personal registry number (CPF).
    Cpf / CpfMask / CpfDigits => Cpf,
    /// ID-card number (RG).
    Rg / RgMask / RgDigits => Rg,
    /// Postal code (CEP).
    Cep / CepMask / CepDigits => Cep,
    /// Electoral card number (TE).
    Te / TeMask / TeDigits => Te,
    /// Social integration number (PIS).
    Pis / PisMask / PisDigits => Pis,
    /// Birth-certificate matrícula.
    Certidao / CertidaoMask / CertidaoDigits => Certidao,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{Cep, CepDigits, CepMask, Cnpj, CpfDigits, Rg, Validated, marker};

    #[derive(Debug, serde::Deserialize)]
    struct Address {
        cep: Cep,
        cep_mask: CepMask,
        cep_digits: CepDigits,
    }

    #[test_case("59151650", "59151-650")]
    #[test_case("57602660", "57602-660")]
    #[test_case("78735819", "78735-819")]
    fn deserializes_valid_postal_codes(bare: &str, masked: &str) {
        let json = format!(
            r#"{{ "cep": "{masked}", "cep_mask": "{masked}", "cep_digits": "{bare}" }}"#
        );
        let address: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(address.cep.as_str(), masked);
        assert_eq!(address.cep_mask.as_str(), masked);
        assert_eq!(address.cep_digits.as_str(), bare);
        assert_eq!(address.cep_digits.cleaned(), bare);
    }

    #[test]
    fn non_string_input_is_a_type_error() {
        let err = serde_json::from_str::<CepDigits>("59151650").unwrap_err();
        assert!(err.to_string().contains("expected a string value"), "{err}");

        let err = serde_json::from_str::<Cnpj>("true").unwrap_err();
        assert!(err.to_string().contains("expected a string value"), "{err}");
    }

    #[test]
    fn invalid_document_surfaces_the_field_error_message() {
        let err = serde_json::from_str::<Cep>(r#""00000-000""#).unwrap_err();
        assert!(err.to_string().contains("is not a valid CEP"), "{err}");

        let err = serde_json::from_str::<CepMask>(r#""59151650""#).unwrap_err();
        assert!(err.to_string().contains("does not match the mask"), "{err}");
    }

    #[test]
    fn serializes_the_value_unchanged() {
        let cnpj: Cnpj = "11.222.333/0001-81".parse().unwrap();
        assert_eq!(
            serde_json::to_string(&cnpj).unwrap(),
            r#""11.222.333/0001-81""#
        );
    }

    #[test]
    fn from_str_and_try_from_agree() {
        let parsed: CpfDigits = "52998224725".parse().unwrap();
        let converted = CpfDigits::try_from(String::from("52998224725")).unwrap();
        assert_eq!(parsed, converted);
        assert_eq!(&*parsed, "52998224725");
    }

    #[test]
    fn rg_with_check_letter_round_trips() {
        let rg: Rg = "30.200.001-X".parse().unwrap();
        assert_eq!(rg.cleaned(), "30200001X");
        assert_eq!(rg.to_string(), "30.200.001-X");
        assert_eq!(
            format!("{rg:?}"),
            r#"RG("30.200.001-X")"#
        );
    }

    #[test]
    fn mode_markers_are_part_of_the_type() {
        // A masked value parses as flexible but not as digits-only.
        assert!("59151-650".parse::<Cep>().is_ok());
        assert!("59151-650".parse::<CepDigits>().is_err());
        assert!(
            Validated::<marker::Cep, marker::MaskOnly>::new("59151-650").is_ok()
        );
    }
}
