//! Error types for address construction and classification.
//!
//! Two tiers are kept apart:
//!
//! - [`ConfigError`]: the fixed parameters of an address kind are invalid.
//!   This is a defect in the kind definition, never in runtime input.
//! - [`ValidationError`]: one construction attempt was given bad input.
//!
//! [`Error`] wraps both and adds the aggregated classifier failure.

use thiserror::Error;

/// Result type alias for address operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid parameters in an address kind definition or formatting override.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Bit length is zero, not a multiple of 4, or wider than 128 bits.
    #[error("{kind}: bit length {bits} must be a positive multiple of 4 no larger than 128")]
    BitLength {
        /// Name of the offending kind.
        kind: String,
        /// Declared bit length.
        bits: u32,
    },

    /// Uniform group size outside the allowed range.
    #[error("{kind}: group size {size} not in {min}..={max}")]
    GroupSize {
        kind: String,
        size: usize,
        min: usize,
        max: usize,
    },

    /// Explicit group sections do not partition the digit sequence.
    #[error("{kind}: group sections {sections:?} must be non-zero and sum to {digits} digits")]
    GroupSections {
        kind: String,
        sections: Vec<usize>,
        digits: usize,
    },

    /// A verifier pattern could not be compiled.
    #[error("{kind}: cannot build verifier: {message}")]
    Pattern { kind: String, message: String },

    /// Delimiter is not one of the allowed values.
    #[error("delimiter {0:?} not in {allowed:?}", allowed = crate::options::Delimiter::ALL_STR)]
    Delimiter(String),
}

/// A single construction attempt was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Negative integers never denote an address.
    #[error("{value} is negative")]
    Negative {
        /// The rejected value.
        value: i128,
    },

    /// Integer needs more bits than the kind provides.
    #[error("{value} can not fit in {bits} bits")]
    Overflow { value: u128, bits: u32 },

    /// Wrong number of digits left after stripping delimiters.
    #[error("'{input}' has {found} hex digits, expected {expected}")]
    Length {
        input: String,
        expected: usize,
        found: usize,
    },

    /// A character other than a hexadecimal digit survived stripping.
    #[error("'{input}' contains non hexadecimal digits")]
    NonHex { input: String },

    /// The kind's structural check rejected the digits.
    #[error("{kind}: {reason}")]
    Structure { kind: &'static str, reason: String },
}

impl ValidationError {
    /// Creates a structural check failure.
    pub fn structure(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::Structure {
            kind,
            reason: reason.into(),
        }
    }
}

/// Top-level error for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid address kind: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid address: {0}")]
    Validation(#[from] ValidationError),

    /// Every classifier candidate rejected the input.
    #[error("{input} does not seem to be any of {candidates:?}")]
    NoMatch {
        /// Rendering of the rejected input.
        input: String,
        /// Candidate kind names, in the order they were tried.
        candidates: Vec<String>,
    },
}

impl Error {
    /// Returns true if the error came from bad input rather than a bad kind.
    ///
    /// A classifier moves on to its next candidate only for these.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Returns true if the error is a kind definition defect.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
