//! The validation error taxonomy.

/// Why a value was rejected.
///
/// Exactly one variant is produced per failed call; the pipeline
/// short-circuits on the first stage that rejects. Every variant carries the
/// offending value so boundary layers can build user-facing messages without
/// keeping the input around.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The supplied value is not string-shaped. Only the deserialization
    /// boundary can produce this; the string API is total over `&str`.
    #[error("expected a string value, found {found}")]
    Type {
        /// What the input turned out to be (e.g. `"an integer"`).
        found: &'static str,
    },

    /// A mask-only field was given input that does not follow the canonical
    /// punctuated layout.
    #[error("'{value}' does not match the mask {pattern}")]
    Mask {
        /// The rejected input, as supplied.
        value: String,
        /// The canonical mask layout of the document kind.
        pattern: &'static str,
    },

    /// A digits-only field was given separators or characters outside the
    /// kind's bare alphabet.
    #[error("'{value}' must contain only {pattern}")]
    Digit {
        /// The rejected input, as supplied.
        value: String,
        /// Description of the bare character class of the document kind.
        pattern: &'static str,
    },

    /// The shape was acceptable but the length, degenerate-sequence or
    /// check-digit validation failed.
    #[error("'{value}' is not a valid {document}")]
    Invalid {
        /// The rejected input, as supplied.
        value: String,
        /// Display name of the document kind.
        document: &'static str,
    },

    /// ID-card refinement of [`FieldError::Invalid`]: the 8-digit body
    /// contains a non-digit character.
    #[error("'{value}' has a non-digit character in the RG body")]
    IdCardBody {
        /// The rejected input, as supplied.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::FieldError;

    #[test]
    fn display_templates() {
        let err = FieldError::Mask {
            value: "59151650".into(),
            pattern: "XXXXX-XXX",
        };
        assert_eq!(err.to_string(), "'59151650' does not match the mask XXXXX-XXX");

        let err = FieldError::Invalid {
            value: "00000-000".into(),
            document: "CEP",
        };
        assert_eq!(err.to_string(), "'00000-000' is not a valid CEP");

        let err = FieldError::Type { found: "an integer" };
        assert_eq!(err.to_string(), "expected a string value, found an integer");
    }
}
