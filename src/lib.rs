//! Checksum validation and mask parsing for Brazilian identification numbers.
//!
//! Supports CNPJ (including the alphanumeric format), CPF, RG, CEP, TE, PIS
//! and the birth-certificate matrícula. Every document can be checked in its
//! masked form, its bare digits form, or either, and accepted values are
//! returned exactly as supplied.
//!
//! ```
//! use brdoc::{AccessMode, DocumentKind, validate};
//!
//! assert!(validate(DocumentKind::PostalCode, AccessMode::MaskOnly, "59151-650").is_ok());
//! assert!(validate(DocumentKind::PersonalRegistry, AccessMode::Flexible, "529.982.247-25").is_ok());
//! ```
//!
//! For schema-style integration, the [`field`] module offers typed wrappers
//! that validate while deserializing:
//!
//! ```
//! #[derive(serde::Deserialize)]
//! struct Address {
//!     cep: brdoc::field::CepMask,
//! }
//!
//! let address: Address = serde_json::from_str(r#"{ "cep": "59151-650" }"#).unwrap();
//! assert_eq!(&*address.cep, "59151-650");
//! ```

pub mod domain;
pub use domain::{AccessMode, DocumentKind};

pub mod validator;
pub use validator::{FieldError, clean, matches_mask, validate};

pub mod field;
pub use field::Validated;
