//! Error types for the itten core.
//!
//! Unknown color names are not errors: lookups signal absence with `None`.
//! These variants cover malformed input that is rejected when a catalog or
//! scheme identifier is parsed.

use thiserror::Error;

/// Errors produced while building a wheel or parsing user-supplied identifiers.
#[derive(Debug, Error)]
pub enum WheelError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A catalog or principal hue sequence failed validation at load time.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A scheme identifier did not match any known scheme kind.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
}
