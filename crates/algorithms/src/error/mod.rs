//! Error handling for cryptographic primitives

use std::borrow::Cow;
use std::fmt;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A scalar is outside the permitted [1, n-1] range
    ScalarOutOfRange {
        /// Reason the scalar was rejected
        reason: &'static str,
    },

    /// A computed point does not satisfy the curve equation
    PointNotOnCurve {
        /// Operation that produced the point
        context: &'static str,
    },

    /// An input character is outside the codec alphabet
    InvalidCharacter {
        /// Codec that rejected the character
        context: &'static str,
        /// The offending character
        character: char,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::ScalarOutOfRange { reason } => {
                write!(f, "Scalar out of range: {}", reason)
            }
            Error::PointNotOnCurve { context } => {
                write!(f, "Point produced by {} is not on the curve", context)
            }
            Error::InvalidCharacter { context, character } => {
                write!(f, "Invalid character {:?} in {} input", character, context)
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
