//! Validated single-qubit gate type

use crate::error::InvalidGateError;
use crate::matrix::{self, Matrix2};
use crate::state::QubitState;
use crate::Result;
use std::fmt;

/// Tolerance used for the informational hermiticity flag
const HERMITIAN_EPSILON: f64 = 1e-10;

/// A named 2×2 unitary matrix
///
/// Gates reach the rest of the system through exactly two doors:
/// [`Gate::new`] validates a matrix built from user input, while
/// [`Gate::from_matrix_unchecked`] admits matrices that are unitary by
/// construction (the predefined gate tables and evolution output). Either
/// way the matrix is immutable afterwards, so a non-unitary matrix can
/// never reach the evolution step.
///
/// # Example
/// ```
/// use bloq_core::{Complex64, Gate, QubitState};
///
/// let x = Gate::new(
///     "X",
///     [
///         [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
///         [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
///     ],
///     1e-9,
/// )
/// .unwrap();
///
/// // X|0⟩ = |1⟩
/// let flipped = x.apply(&QubitState::zero());
/// assert_eq!(flipped, QubitState::one());
/// ```
#[derive(Clone, Debug)]
pub struct Gate {
    name: String,
    matrix: Matrix2,
    hermitian: bool,
}

impl Gate {
    /// Create a gate from a matrix of unknown provenance, with validation
    ///
    /// Checks, in order:
    /// 1. every entry is finite (no NaN or infinities),
    /// 2. max-norm(U†U − I) ≤ `tolerance`.
    ///
    /// # Errors
    /// [`InvalidGateError::NonFinite`] or [`InvalidGateError::NotUnitary`].
    pub fn new(name: impl Into<String>, matrix: Matrix2, tolerance: f64) -> Result<Self> {
        if !matrix::has_finite_entries(&matrix) {
            return Err(InvalidGateError::NonFinite);
        }

        let max_deviation = matrix::unitarity_deviation(&matrix);
        if max_deviation > tolerance {
            return Err(InvalidGateError::NotUnitary {
                max_deviation,
                tolerance,
            });
        }

        Ok(Self::from_matrix_unchecked(name, matrix))
    }

    /// Create a gate from a matrix that is unitary by construction
    ///
    /// Used for the predefined gate tables and for evolution output, which
    /// stays unitary by algebra. Skips the runtime unitarity check.
    pub fn from_matrix_unchecked(name: impl Into<String>, matrix: Matrix2) -> Self {
        let hermitian = matrix::is_hermitian(&matrix, HERMITIAN_EPSILON);
        Self {
            name: name.into(),
            matrix,
            hermitian,
        }
    }

    /// Gate name (e.g. "H", "custom")
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The gate matrix
    #[inline]
    pub const fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// Whether the gate is hermitian (self-inverse)
    #[inline]
    pub const fn is_hermitian(&self) -> bool {
        self.hermitian
    }

    /// How far U†U is from the identity, in max-norm
    pub fn unitarity_deviation(&self) -> f64 {
        matrix::unitarity_deviation(&self.matrix)
    }

    /// Apply the gate to a state, producing a new state
    ///
    /// The input is never mutated; states are derived functionally.
    pub fn apply(&self, state: &QubitState) -> QubitState {
        let [alpha, beta] = *state.amplitudes();
        QubitState::new(
            self.matrix[0][0] * alpha + self.matrix[0][1] * beta,
            self.matrix[1][0] * alpha + self.matrix[1][1] * beta,
        )
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
