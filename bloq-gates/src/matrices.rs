//! Pre-computed matrices for the named single-qubit gates
//!
//! These constants are exact by construction and are handed to
//! [`bloq_core::Gate::from_matrix_unchecked`] without a runtime check.

use bloq_core::Matrix2;
use num_complex::Complex64;

// Compile-time constant helpers
const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = 0.7071067811865476; // 1/√2

/// Identity gate matrix
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: Matrix2 = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X gate matrix (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate matrix
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Matrix2 = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Matrix2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2 = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bloq_core::matrix::{matrix_multiply, unitarity_deviation};

    #[test]
    fn test_all_tables_are_unitary() {
        for table in [&IDENTITY, &PAULI_X, &PAULI_Y, &PAULI_Z, &HADAMARD] {
            assert!(unitarity_deviation(table) <= 1e-9);
        }
    }

    #[test]
    fn test_pauli_x_squares_to_identity() {
        let product = matrix_multiply(&PAULI_X, &PAULI_X);
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(product[i][j].re, IDENTITY[i][j].re, epsilon = 1e-12);
                assert_relative_eq!(product[i][j].im, IDENTITY[i][j].im, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_hadamard_self_inverse() {
        let product = matrix_multiply(&HADAMARD, &HADAMARD);
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(product[i][j].re, IDENTITY[i][j].re, epsilon = 1e-12);
                assert_relative_eq!(product[i][j].im, IDENTITY[i][j].im, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_xy_anticommute_to_z_up_to_phase() {
        // XY = iZ
        let product = matrix_multiply(&PAULI_X, &PAULI_Y);
        for i in 0..2 {
            for j in 0..2 {
                let expected = I * PAULI_Z[i][j];
                assert_relative_eq!(product[i][j].re, expected.re, epsilon = 1e-12);
                assert_relative_eq!(product[i][j].im, expected.im, epsilon = 1e-12);
            }
        }
    }
}
