//! The validation pipeline.
//!
//! [`validate`] is the single entry point: it runs the mode-appropriate shape
//! check on the input *as supplied*, cleans it, and hands the cleaned form to
//! the kind's checksum algorithm. Stages short-circuit, so each rejection
//! maps to exactly one [`FieldError`] variant. Accepted input is returned
//! unchanged: masked stays masked, bare stays bare.

mod canonical;
mod checksum;
pub mod error;
mod mask;

pub use canonical::clean;
pub use error::FieldError;
pub use mask::matches_mask;

use crate::domain::{AccessMode, DocumentKind};

/// Validate `value` as a document of `kind` under the given access mode.
///
/// On success the original input slice is returned unchanged.
///
/// # Errors
///
/// Returns the first [`FieldError`] the pipeline produces:
/// [`FieldError::Mask`] when a mask-only field lacks the canonical layout,
/// [`FieldError::Digit`] when a digits-only field contains separators or
/// foreign characters, and [`FieldError::Invalid`] (or the RG-specific
/// [`FieldError::IdCardBody`]) when the cleaned form fails the length,
/// degenerate-sequence or check-digit rules.
pub fn validate<'a>(
    kind: DocumentKind,
    mode: AccessMode,
    value: &'a str,
) -> Result<&'a str, FieldError> {
    check(kind, mode, value).map(|()| value).inspect_err(|error| {
        tracing::trace!(%kind, %mode, %error, "rejected document value");
    })
}

fn check(kind: DocumentKind, mode: AccessMode, value: &str) -> Result<(), FieldError> {
    match mode {
        AccessMode::Flexible => {}
        AccessMode::MaskOnly => {
            if !mask::matches_mask(kind, value) {
                return Err(FieldError::Mask {
                    value: value.to_owned(),
                    pattern: kind.mask_pattern(),
                });
            }
        }
        AccessMode::DigitsOnly => {
            // Character class only; length mistakes fall through to the
            // checksum stage and report as invalid, not as a digit error.
            if !value.chars().all(|c| kind.is_bare_char(c)) {
                return Err(FieldError::Digit {
                    value: value.to_owned(),
                    pattern: kind.bare_pattern(),
                });
            }
        }
    }

    let cleaned = canonical::clean(kind, value);
    checksum::validate(kind, &cleaned).map_err(|failure| match failure {
        checksum::Failure::IdCardBody => FieldError::IdCardBody {
            value: value.to_owned(),
        },
        checksum::Failure::Invalid => FieldError::Invalid {
            value: value.to_owned(),
            document: kind.name(),
        },
    })
}
