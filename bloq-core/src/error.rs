//! Error types for bloq

use thiserror::Error;

/// Errors that can occur when resolving a gate from user input
///
/// Every failure mode of gate resolution maps onto one variant: malformed
/// literal text, a literal with the wrong shape, non-finite entries, or a
/// matrix that fails the unitarity check. Resolution is the only fallible
/// boundary in the system; projection and evolution are total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidGateError {
    /// Custom gate text is not a literal nested numeric array
    #[error("invalid gate literal at byte {offset}: {message}")]
    Parse { offset: usize, message: String },

    /// Parsed literal is not a 2×2 matrix
    #[error("expected a 2x2 matrix, found {found}")]
    Shape { found: String },

    /// Matrix contains NaN or infinite entries
    #[error("matrix contains NaN or infinite entries")]
    NonFinite,

    /// Matrix is not unitary (U†U ≠ I)
    #[error(
        "matrix is not unitary: max deviation {max_deviation:.2e} exceeds tolerance \
         {tolerance:.2e}; ensure U\u{2020}U = I where U\u{2020} is the conjugate transpose"
    )]
    NotUnitary { max_deviation: f64, tolerance: f64 },
}

impl InvalidGateError {
    /// Create a parse error at the given byte offset
    pub fn parse(offset: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            offset,
            message: message.into(),
        }
    }

    /// Create a shape error describing what was found instead of a 2×2 matrix
    pub fn shape(found: impl Into<String>) -> Self {
        Self::Shape {
            found: found.into(),
        }
    }
}
