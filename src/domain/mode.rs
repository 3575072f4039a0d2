use std::fmt;

/// Which textual shapes of a document a validation call will accept.
///
/// The mode only adds a shape precondition in front of the checksum; the
/// checksum itself always runs on the cleaned form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// Accept the masked and the bare form alike.
    #[default]
    Flexible,
    /// Accept only the masked form (separators at their canonical offsets).
    MaskOnly,
    /// Accept only the bare form (no separators at all).
    DigitsOnly,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Self::Flexible => "flexible",
            Self::MaskOnly => "mask-only",
            Self::DigitsOnly => "digits-only",
        };
        f.write_str(label)
    }
}
