//! Domain models for document validation.
//!
//! This module contains the closed set of supported document kinds and the
//! access modes that control which textual shapes a caller will accept.

/// Document kind descriptors (lengths, separators, mask layouts).
pub mod kind;
pub use kind::DocumentKind;

mod mode;
pub use mode::AccessMode;
